//! Query result surface
//!
//! The schema plus a lazy, forward-only stream of normalized rows.
//! Entries were materialized by the executor up to the cap; rows
//! normalize one at a time as the caller pulls them.

use std::vec;

use crate::executor::{DirectoryEntry, SearchOutcome};
use crate::rows::{ColumnSchema, NormalizedRow, RowNormalizer};

/// Result of one executed statement
#[derive(Debug)]
pub struct QueryResult {
    schema: ColumnSchema,
    rows: RowNormalizer<vec::IntoIter<DirectoryEntry>>,
    truncated: bool,
}

impl QueryResult {
    /// Builds a result from the executed search outcome
    pub fn new(schema: ColumnSchema, outcome: SearchOutcome) -> Self {
        Self {
            rows: RowNormalizer::new(schema.clone(), outcome.entries.into_iter()),
            schema,
            truncated: outcome.truncated,
        }
    }

    /// The fixed column schema for this result set
    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    /// True when the directory cut the result short at the cap
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

impl Iterator for QueryResult {
    type Item = NormalizedRow;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next()
    }
}
