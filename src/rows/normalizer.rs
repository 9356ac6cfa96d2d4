//! Row normalization
//!
//! Projects heterogeneous directory entries onto the fixed column
//! schema: one value per declared column, in declaration order, with
//! absent attributes becoming nulls. Multi-valued attributes flatten
//! to a single `", "`-joined string. The normalizer is a lazy,
//! forward-only iterator holding no state beyond its position.

use crate::executor::DirectoryEntry;

use super::schema::ColumnSchema;

/// One value per declared column; `None` marks an absent attribute
pub type NormalizedRow = Vec<Option<String>>;

/// True for the synthetic distinguished-name column and its alias
fn is_dn_column(name: &str) -> bool {
    name.eq_ignore_ascii_case("dn") || name.eq_ignore_ascii_case("distinguishedName")
}

/// Projects one entry onto the schema.
///
/// Pure: the entry is read through its case-insensitive attribute map
/// and never retained. The distinguished name backs a declared `dn`
/// column (or the `distinguishedName` alias when the entry carries no
/// attribute of that name); it is never added to undeclared columns.
pub fn project(schema: &ColumnSchema, entry: &DirectoryEntry) -> NormalizedRow {
    schema
        .names()
        .iter()
        .map(|column| match entry.get(column) {
            Some(value) => Some(value.as_joined()),
            None if is_dn_column(column) => Some(entry.dn().to_string()),
            None => None,
        })
        .collect()
}

/// Lazy normalizer over a stream of directory entries
#[derive(Debug)]
pub struct RowNormalizer<I> {
    schema: ColumnSchema,
    entries: I,
}

impl<I> RowNormalizer<I>
where
    I: Iterator<Item = DirectoryEntry>,
{
    /// Creates a normalizer producing rows of `schema` length
    pub fn new(schema: ColumnSchema, entries: I) -> Self {
        Self { schema, entries }
    }

    /// The schema rows are normalized against
    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }
}

impl<I> Iterator for RowNormalizer<I>
where
    I: Iterator<Item = DirectoryEntry>,
{
    type Item = NormalizedRow;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|entry| project(&self.schema, &entry))
    }
}
