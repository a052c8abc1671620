//! Error types for regen-core

use std::path::PathBuf;
use std::process::ExitStatus;

/// Result type for regen-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a generator run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Snapshotting the generator's tracked paths failed
    #[error("failed to compute checksums for generator {generator}: {source}")]
    Snapshot {
        generator: String,
        #[source]
        source: regen_fs::Error,
    },

    /// The generate command could not be started or waited on
    #[error("failed to run {command} for generator {generator} in {dir}: {source}")]
    Launch {
        generator: String,
        command: String,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The generate command exited unsuccessfully
    #[error("{command} failed for generator {generator} in {dir}: {status}")]
    GeneratorFailed {
        generator: String,
        command: String,
        dir: PathBuf,
        status: ExitStatus,
    },

    /// Writing to the caller's output stream failed
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    /// Verification found differences; the report has already been written
    /// to the output stream, so this error carries no message of its own.
    #[error("")]
    VerificationFailed,
}

impl Error {
    /// True when the failure was already rendered to the user and callers
    /// should not print anything further.
    pub fn is_already_reported(&self) -> bool {
        matches!(self, Error::VerificationFailed)
    }
}
