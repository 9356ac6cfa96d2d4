//! Statement API for dirsql
//!
//! The façade excluded collaborators call into: build a [`Statement`]
//! over a configuration, execute a SELECT, receive a [`QueryResult`]
//! carrying the fixed column schema and a lazy row stream.

mod errors;
mod result;
mod statement;

pub use errors::{StatementError, StatementResult};
pub use result::QueryResult;
pub use statement::Statement;
