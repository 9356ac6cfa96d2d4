//! Row Normalizer subsystem for dirsql
//!
//! Materializes fixed-width, fixed-order relational rows out of
//! schema-less directory entries.
//!
//! # Invariants
//!
//! - Row length always equals schema length
//! - The schema is fixed before the first row and never changes,
//!   however heterogeneous later entries turn out
//! - Absent attributes become nulls; multi-valued attributes flatten
//!   to one `", "`-joined string

mod normalizer;
mod schema;

pub use normalizer::{project, NormalizedRow, RowNormalizer};
pub use schema::ColumnSchema;
