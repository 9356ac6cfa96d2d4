//! Command-line interface for dirsql

mod args;
mod commands;
mod errors;

pub use commands::run;
pub use errors::{CliError, CliResult};
