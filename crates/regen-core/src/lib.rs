//! Generator execution and verification for regen
//!
//! Runs each configured generator in its own working directory, brackets
//! every run with checksum snapshots of the paths it owns, and reports
//! which generators changed their outputs.
//!
//! - [`GeneratorRunner`] runs one generator and returns its diff
//! - [`Orchestrator`] runs every generator in name order, in either
//!   [`Mode::Apply`] or [`Mode::Verify`]

pub mod command;
pub mod error;
pub mod orchestrator;
pub mod params;
pub mod report;
pub mod runner;

pub use command::GenerateCommand;
pub use error::{Error, Result};
pub use orchestrator::{Mode, Orchestrator};
pub use params::{GeneratorParam, ProjectParam};
pub use report::ProjectReport;
pub use runner::GeneratorRunner;
