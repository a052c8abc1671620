//! Versioned YAML configuration for regen
//!
//! Configuration is upgraded to the current schema before it is parsed:
//!
//! 1. [`upgrade::upgrade_config`] recognises legacy documents and explicit
//!    version markers, rejecting versions it does not know.
//! 2. [`schema::ProjectConfig`] parses the upgraded document strictly.
//! 3. [`schema::ProjectConfig::to_param`] builds the runtime
//!    [`regen_core::ProjectParam`].
//!
//! [`loader::load_project_param`] runs all three steps for a file.

mod de;
pub mod error;
pub mod legacy;
pub mod loader;
pub mod schema;
pub mod upgrade;

pub use error::{Error, Result};
pub use loader::{UpgradeOutcome, load_project_param, upgrade_config_file};
pub use schema::{GenPathsConfig, GeneratorConfig, ProjectConfig};
pub use upgrade::upgrade_config;
