//! Statement fragment extraction
//!
//! Splits a `SELECT <cols> FROM <target> [WHERE <predicate>]` string
//! into its three fragments. Keyword matching is case-insensitive and
//! clause bodies may span multiple lines. No further interpretation
//! happens here; the planner decides what the fragments mean.

use std::sync::OnceLock;

use regex::Regex;

use super::errors::{SqlError, SqlResult};

/// Statement kinds rejected outright as writes or DDL
const WRITE_KEYWORDS: [&str; 6] = ["INSERT", "UPDATE", "DELETE", "CREATE", "DROP", "ALTER"];

fn select_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?is)^\s*SELECT\s+(.+?)\s+FROM\s+(.+?)(?:\s+WHERE\s+(.+))?\s*$")
            .expect("statement pattern is valid")
    })
}

/// The SELECT-list: either the `*` wildcard or an explicit column list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectList {
    /// `SELECT *`
    Wildcard,
    /// Explicit columns, qualifiers and quotes already stripped
    Columns(Vec<String>),
}

impl SelectList {
    /// Returns true for the `*` wildcard
    pub fn is_wildcard(&self) -> bool {
        matches!(self, SelectList::Wildcard)
    }
}

/// The three fragments of one statement, produced once per text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFragments {
    /// Requested columns or wildcard
    pub select_list: SelectList,
    /// Object-class name or raw directory path, case preserved
    pub from_target: String,
    /// WHERE-clause body, verbatim
    pub where_predicate: Option<String>,
}

impl QueryFragments {
    /// Parses a statement into fragments.
    ///
    /// Fails with [`SqlError::MalformedQuery`] when no FROM clause is
    /// found, and with [`SqlError::Unsupported`] for write statements.
    pub fn parse(sql: &str) -> SqlResult<Self> {
        let trimmed = sql.trim();

        for keyword in WRITE_KEYWORDS {
            if starts_with_keyword(trimmed, keyword) {
                return Err(SqlError::Unsupported(keyword.to_string()));
            }
        }

        let captures = select_pattern()
            .captures(trimmed)
            .ok_or_else(|| SqlError::MalformedQuery(sql.to_string()))?;

        let select_part = captures[1].trim();
        let from_part = captures[2].trim();
        let where_part = captures.get(3).map(|m| m.as_str().trim().to_string());

        let select_list = if select_part == "*" {
            SelectList::Wildcard
        } else {
            SelectList::Columns(
                select_part
                    .split(',')
                    .map(clean_column_name)
                    .filter(|c| !c.is_empty())
                    .collect(),
            )
        };

        Ok(QueryFragments {
            select_list,
            from_target: from_part.replace('"', "").trim().to_string(),
            where_predicate: where_part.filter(|w| !w.is_empty()),
        })
    }
}

/// True when `sql` begins with `keyword` as a whole word
fn starts_with_keyword(sql: &str, keyword: &str) -> bool {
    match sql.get(..keyword.len()) {
        Some(head) => {
            head.eq_ignore_ascii_case(keyword)
                && sql[keyword.len()..]
                    .chars()
                    .next()
                    .map_or(true, |c| c.is_whitespace())
        }
        None => false,
    }
}

/// Strips quotes and a leading `alias.` qualifier from a column token
fn clean_column_name(token: &str) -> String {
    let bare = token.trim().replace('"', "");
    match bare.rfind('.') {
        Some(idx) => bare[idx + 1..].to_string(),
        None => bare,
    }
}
