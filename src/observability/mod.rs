//! Observability for dirsql
//!
//! Structured JSON logging for the query pipeline.

mod logger;

pub use logger::{Logger, Severity};
