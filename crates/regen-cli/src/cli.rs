//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// regen - run code generators and verify their outputs are up to date
#[derive(Parser, Debug)]
#[command(name = "regen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long, global = true, env = "REGEN_PROJECT_DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// YAML configuration file for the generate task
    ///
    /// Defaults to generate.yml in the project directory.
    #[arg(short, long, global = true, env = "REGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run generators specified in configuration
    Run {
        /// Verify that running generators does not change the current output
        #[arg(long)]
        verify: bool,
    },

    /// Upgrade the configuration file to the current schema
    ///
    /// Prints the upgraded configuration, or rewrites the file with
    /// --in-place.
    UpgradeConfig {
        /// Rewrite the configuration file if it changed
        #[arg(long)]
        in_place: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["regen"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_run_verify() {
        let cli = Cli::try_parse_from(["regen", "run", "--verify", "-p", "/tmp/project"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Run { verify: true }));
        assert_eq!(cli.project_dir, PathBuf::from("/tmp/project"));
    }

    #[test]
    fn parses_upgrade_config() {
        let cli =
            Cli::try_parse_from(["regen", "--config", "cfg.yml", "upgrade-config", "--in-place"])
                .unwrap();
        assert_eq!(cli.command, Some(Commands::UpgradeConfig { in_place: true }));
        assert_eq!(cli.config, Some(PathBuf::from("cfg.yml")));
    }
}
