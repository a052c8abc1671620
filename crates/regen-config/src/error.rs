//! Error types for regen-config

use std::path::PathBuf;

/// Result type for regen-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading, upgrading or interpreting configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not YAML, or its version markers are malformed
    #[error("failed to parse configuration: {0}")]
    Parse(#[source] serde_yaml::Error),

    /// The document claims the current schema but does not conform to it
    #[error("failed to unmarshal input as v0 YAML: {0}")]
    InvalidCurrent(#[source] serde_yaml::Error),

    #[error("failed to unmarshal legacy configuration: {0}")]
    InvalidLegacy(#[source] serde_yaml::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("unsupported version: {version}")]
    UnsupportedVersion { version: String },

    #[error("invalid gen-paths for generator {generator}: {source}")]
    InvalidGenPaths {
        generator: String,
        #[source]
        source: regen_fs::Error,
    },

    #[error(transparent)]
    Fs(#[from] regen_fs::Error),
}
