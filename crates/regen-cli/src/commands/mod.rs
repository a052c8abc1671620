//! Command implementations for regen-cli

pub mod run;
pub mod upgrade;

pub use run::run_generate;
pub use upgrade::run_upgrade_config;
