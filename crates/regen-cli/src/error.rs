//! Error types for regen-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from running generators
    #[error(transparent)]
    Core(#[from] regen_core::Error),

    /// Error from loading or upgrading configuration
    #[error(transparent)]
    Config(#[from] regen_config::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// True when the error's output has already been printed and `main`
    /// should only set the exit status.
    pub fn is_already_reported(&self) -> bool {
        matches!(self, CliError::Core(e) if e.is_already_reported())
    }
}
