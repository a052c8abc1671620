//! Upgrade-config command implementation

use std::io::{self, Write};

use regen_config::upgrade_config_file;

use crate::context::RunContext;
use crate::error::Result;

/// Upgrade the configuration file to the current schema.
///
/// Without `in_place` the upgraded document is printed to stdout. With it,
/// the file is rewritten only when the upgrade changed it.
pub fn run_upgrade_config(ctx: &RunContext, in_place: bool) -> Result<()> {
    let outcome = upgrade_config_file(&ctx.config_path, in_place)?;

    if !in_place {
        io::stdout().write_all(&outcome.upgraded)?;
        return Ok(());
    }
    if outcome.changed {
        let name = ctx
            .config_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| ctx.config_path.display().to_string());
        println!("Upgraded configuration for {name}");
    }
    Ok(())
}
