//! Runs a single generator between two snapshots

use std::io::Write;
use std::path::Path;

use regen_fs::{GeneratorDiff, Snapshot, compare};

use crate::{Error, GenerateCommand, GeneratorParam, Result};

/// Executes one generator and reports what it changed.
///
/// The runner never touches the filesystem itself; every mutation it
/// observes comes from the generate command.
#[derive(Debug, Clone, Default)]
pub struct GeneratorRunner {
    command: GenerateCommand,
}

impl GeneratorRunner {
    pub fn new(command: GenerateCommand) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &GenerateCommand {
        &self.command
    }

    /// Snapshot the generator's paths, run the generate command in the
    /// generator's working directory under `root`, snapshot again and return
    /// the difference.
    ///
    /// # Errors
    ///
    /// Fails if either snapshot fails, or if the command cannot be launched
    /// or exits unsuccessfully. Errors name the generator and directory.
    pub fn run_one(
        &self,
        root: &Path,
        name: &str,
        param: &GeneratorParam,
        out: &mut dyn Write,
    ) -> Result<GeneratorDiff> {
        let before = self.snapshot(root, name, param)?;

        let dir = param.resolve_work_dir(root);
        tracing::info!(generator = name, dir = %dir.display(), command = %self.command, "running generator");

        let status = self
            .command
            .run(&dir, &param.environment, out)
            .map_err(|source| Error::Launch {
                generator: name.to_string(),
                command: self.command.to_string(),
                dir: dir.clone(),
                source,
            })?;
        if !status.success() {
            return Err(Error::GeneratorFailed {
                generator: name.to_string(),
                command: self.command.to_string(),
                dir,
                status,
            });
        }

        let after = self.snapshot(root, name, param)?;
        let diff = compare(&before, &after);
        tracing::debug!(generator = name, changed = diff.len(), "generator finished");
        Ok(diff)
    }

    fn snapshot(&self, root: &Path, name: &str, param: &GeneratorParam) -> Result<Snapshot> {
        Snapshot::capture(root, &param.gen_paths).map_err(|source| Error::Snapshot {
            generator: name.to_string(),
            source,
        })
    }
}
