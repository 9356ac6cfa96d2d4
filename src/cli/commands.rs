//! CLI command implementations
//!
//! Thin wrappers over the library: load configuration, run one
//! pipeline stage or the whole statement, print JSON to stdout.

use std::io::{self, Write};
use std::path::Path;

use serde_json::json;

use crate::api::Statement;
use crate::catalog::Catalog;
use crate::config::ConnectorConfig;
use crate::planner::SearchPlanner;
use crate::sql::QueryFragments;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parses arguments and dispatches to a command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Query {
            config,
            max_rows,
            sql,
        } => query(&config, max_rows, &sql),
        Command::Explain { config, sql } => explain(&config, &sql),
        Command::Tables { config } => tables(&config),
        Command::Columns { config } => columns(&config),
    }
}

/// Executes one statement and prints schema plus rows as JSON lines
fn query(config_path: &Path, max_rows: u32, sql: &str) -> CliResult<()> {
    let config = ConnectorConfig::load(config_path)?;
    let mut statement = Statement::new(&config);
    statement.set_max_rows(max_rows);

    let result = statement.execute_query(sql)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(
        out,
        "{}",
        json!({
            "columns": result.schema().names(),
            "type": result.schema().column_type_name(),
        })
    )?;

    let truncated = result.truncated();
    let mut count = 0usize;
    for row in result {
        writeln!(out, "{}", serde_json::to_string(&row)?)?;
        count += 1;
    }

    writeln!(out, "{}", json!({ "rows": count, "truncated": truncated }))?;
    out.flush()?;
    Ok(())
}

/// Prints the search plan for a statement without touching the network
fn explain(config_path: &Path, sql: &str) -> CliResult<()> {
    let config = ConnectorConfig::load(config_path)?;
    let fragments = QueryFragments::parse(sql).map_err(crate::api::StatementError::from)?;
    let plan = SearchPlanner::new(&config).plan(&fragments, 0);

    println!(
        "{}",
        json!({
            "search_base": plan.search_base,
            "filter": plan.filter.as_str(),
            "attributes": plan.requested_attributes,
            "size_limit": plan.size_limit,
        })
    );
    Ok(())
}

/// Lists configured object classes as tables
fn tables(config_path: &Path) -> CliResult<()> {
    let config = ConnectorConfig::load(config_path)?;
    println!("{}", json!({ "tables": Catalog::new(&config).tables() }));
    Ok(())
}

/// Lists configured attributes as columns
fn columns(config_path: &Path) -> CliResult<()> {
    let config = ConnectorConfig::load(config_path)?;
    let columns = Catalog::new(&config).columns();
    println!("{}", serde_json::to_string(&json!({ "columns": columns }))?);
    Ok(())
}
