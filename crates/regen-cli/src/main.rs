//! regen CLI
//!
//! Runs the code generators declared in a project's configuration and can
//! verify that they leave their outputs unchanged.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use context::RunContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        // verification failures have already printed their report
        if !e.is_already_reported() {
            eprintln!("{}: {}", "error".red().bold(), e);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries generator output and reports, so logs go to stderr
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let ctx = RunContext::from_cli(&cli);
    match cli.command.unwrap_or(Commands::Run { verify: false }) {
        Commands::Run { verify } => commands::run_generate(&ctx, verify),
        Commands::UpgradeConfig { in_place } => commands::run_upgrade_config(&ctx, in_place),
    }
}
