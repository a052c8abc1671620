//! Shared test utilities for the regen workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`project`]: [`TestProject`] builder for scratch project roots with a
//!   private `bin/` directory holding fake generator executables

pub mod project;

pub use project::{TestProject, sha256_hex};
