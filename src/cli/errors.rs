//! CLI error types

use thiserror::Error;

use crate::api::StatementError;
use crate::config::ConfigError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors; all exit non-zero
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Statement execution failed
    #[error(transparent)]
    Statement(#[from] StatementError),

    /// Output could not be written
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be serialized
    #[error("output serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
