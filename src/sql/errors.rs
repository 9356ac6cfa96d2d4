//! Statement parsing errors

use thiserror::Error;

/// Result type for statement parsing
pub type SqlResult<T> = Result<T, SqlError>;

/// Statement parsing errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SqlError {
    /// The statement does not match the supported
    /// `SELECT ... FROM ... [WHERE ...]` shape
    #[error("cannot parse SQL statement: {0}")]
    MalformedQuery(String),

    /// The statement is a recognized write or DDL form, which the
    /// directory does not support
    #[error("unsupported statement kind '{0}': the directory is read-only")]
    Unsupported(String),
}
