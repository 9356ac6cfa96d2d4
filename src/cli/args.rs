//! CLI argument definitions using clap
//!
//! Commands:
//! - dirsql query --config <path> [--max-rows N] <sql>
//! - dirsql explain --config <path> <sql>
//! - dirsql tables --config <path>
//! - dirsql columns --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// dirsql - SQL SELECT over LDAP directory stores
#[derive(Parser, Debug)]
#[command(name = "dirsql")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Execute a SELECT statement and print rows as JSON lines
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./dirsql.json")]
        config: PathBuf,

        /// Statement-level row cap (0 = connector default)
        #[arg(long, default_value_t = 0)]
        max_rows: u32,

        /// The SELECT statement
        sql: String,
    },

    /// Print the search plan for a statement without executing it
    Explain {
        /// Path to configuration file
        #[arg(long, default_value = "./dirsql.json")]
        config: PathBuf,

        /// The SELECT statement
        sql: String,
    },

    /// List the tables (configured object classes)
    Tables {
        /// Path to configuration file
        #[arg(long, default_value = "./dirsql.json")]
        config: PathBuf,
    },

    /// List the columns (configured attributes)
    Columns {
        /// Path to configuration file
        #[arg(long, default_value = "./dirsql.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
