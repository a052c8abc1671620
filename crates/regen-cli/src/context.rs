//! Resolved invocation settings

use std::path::PathBuf;

use crate::cli::Cli;

/// Default configuration file name, relative to the project directory
pub const DEFAULT_CONFIG_FILE: &str = "generate.yml";

/// Everything a command needs to know about where it runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub project_dir: PathBuf,
    pub config_path: PathBuf,
}

impl RunContext {
    pub fn from_cli(cli: &Cli) -> Self {
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| cli.project_dir.join(DEFAULT_CONFIG_FILE));
        Self {
            project_dir: cli.project_dir.clone(),
            config_path,
        }
    }
}
