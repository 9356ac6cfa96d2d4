//! Result-set column schema
//!
//! Derived once per result set from the SELECT-list (or the configured
//! attributes for a wildcard select) and fixed for the lifetime of the
//! result set: later entries carrying different attributes never
//! change the column order. Every column presents as a nullable
//! VARCHAR to the relational caller, since directory attribute values
//! are strings.

use serde::Serialize;

/// Maximum directory attribute length presented as column precision
const COLUMN_PRECISION: u32 = 4000;

/// Suggested display width for a column
const COLUMN_DISPLAY_SIZE: u32 = 255;

/// Fixed, ordered column list for one result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSchema {
    columns: Vec<String>,
}

impl ColumnSchema {
    /// Builds a schema from declared column names, dropping
    /// case-insensitive duplicates while keeping first-seen order and
    /// case
    pub fn from_columns(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut seen: Vec<String> = Vec::new();
        let mut columns = Vec::new();
        for name in names {
            let name = name.into();
            let key = name.to_lowercase();
            if !seen.contains(&key) {
                seen.push(key);
                columns.push(name);
            }
        }
        Self { columns }
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when no columns are declared
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in declaration order
    pub fn names(&self) -> &[String] {
        &self.columns
    }

    /// Zero-based position of a column, case-insensitive
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.eq_ignore_ascii_case(name))
    }

    /// Every column presents as VARCHAR
    pub fn column_type_name(&self) -> &'static str {
        "VARCHAR"
    }

    /// Every column is nullable: entries are heterogeneous and any
    /// attribute may be absent
    pub fn is_nullable(&self) -> bool {
        true
    }

    /// Column precision in characters
    pub fn precision(&self) -> u32 {
        COLUMN_PRECISION
    }

    /// Suggested display width
    pub fn display_size(&self) -> u32 {
        COLUMN_DISPLAY_SIZE
    }
}
