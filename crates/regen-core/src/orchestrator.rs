//! Runs every configured generator in order
//!
//! Generators run one at a time, sorted by name, each to completion before
//! the next starts. The first failure stops the run.

use std::io::Write;
use std::path::Path;

use crate::{Error, GenerateCommand, GeneratorRunner, ProjectParam, ProjectReport, Result};

/// What to do with the changes generators make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Run generators and keep whatever they write
    #[default]
    Apply,
    /// Run generators exactly as in apply mode, then fail if any of them
    /// changed its tracked outputs. Not a dry run: changes stay on disk.
    Verify,
}

/// Drives a [`GeneratorRunner`] over a whole project
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    runner: GeneratorRunner,
}

impl Orchestrator {
    pub fn new(command: GenerateCommand) -> Self {
        Self {
            runner: GeneratorRunner::new(command),
        }
    }

    pub fn runner(&self) -> &GeneratorRunner {
        &self.runner
    }

    /// Run every generator in name order and collect the non-empty diffs.
    ///
    /// Generator output is forwarded to `out` as it is produced.
    pub fn run_generators(
        &self,
        root: &Path,
        project: &ProjectParam,
        out: &mut dyn Write,
    ) -> Result<ProjectReport> {
        let mut report = ProjectReport::new();
        for (name, param) in &project.generators {
            let diff = self.runner.run_one(root, name, param, out)?;
            report.record(name.as_str(), diff);
        }
        Ok(report)
    }

    /// Run every generator in the given mode.
    ///
    /// In [`Mode::Verify`], a non-empty report is written to `out` and
    /// [`Error::VerificationFailed`] is returned.
    pub fn run_all(
        &self,
        root: &Path,
        project: &ProjectParam,
        out: &mut dyn Write,
        mode: Mode,
    ) -> Result<()> {
        tracing::debug!(generators = project.len(), ?mode, root = %root.display(), "starting run");
        let report = self.run_generators(root, project, out)?;

        match mode {
            Mode::Apply => {
                for name in report.generators() {
                    tracing::debug!(generator = name, "generator updated its outputs");
                }
                Ok(())
            }
            Mode::Verify if report.is_empty() => Ok(()),
            Mode::Verify => {
                writeln!(out, "{report}").map_err(Error::Output)?;
                Err(Error::VerificationFailed)
            }
        }
    }

    /// Run every generator, keeping their changes.
    pub fn run(&self, root: &Path, project: &ProjectParam, out: &mut dyn Write) -> Result<()> {
        self.run_all(root, project, out, Mode::Apply)
    }

    /// Run every generator and fail if any changed its tracked outputs.
    pub fn verify(&self, root: &Path, project: &ProjectParam, out: &mut dyn Write) -> Result<()> {
        self.run_all(root, project, out, Mode::Verify)
    }
}
