//! Statement execution errors

use thiserror::Error;

use crate::executor::SearchError;
use crate::sql::SqlError;

/// Result type for statement execution
pub type StatementResult<T> = Result<T, StatementError>;

/// Anything that can fail between statement text and a row stream
#[derive(Debug, Error)]
pub enum StatementError {
    /// The statement could not be parsed
    #[error(transparent)]
    Sql(#[from] SqlError),

    /// The directory search failed
    #[error(transparent)]
    Search(#[from] SearchError),
}
