//! Run command implementation

use std::io;

use regen_config::load_project_param;
use regen_core::{Mode, Orchestrator};

use crate::context::RunContext;
use crate::error::Result;

/// Load the configuration and run every generator.
///
/// Generator output and, when verifying, the drift report go to stdout.
pub fn run_generate(ctx: &RunContext, verify: bool) -> Result<()> {
    let project = load_project_param(&ctx.config_path)?;
    let mode = if verify { Mode::Verify } else { Mode::Apply };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Orchestrator::default().run_all(&ctx.project_dir, &project, &mut out, mode)?;
    Ok(())
}
