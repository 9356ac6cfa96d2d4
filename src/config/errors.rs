//! Configuration errors

use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read config file '{path}': {source}")]
    Io {
        /// File path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON
    #[error("invalid config JSON in '{path}': {source}")]
    Parse {
        /// File path
        path: String,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A configuration value is missing or out of range
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
