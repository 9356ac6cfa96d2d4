//! Catalog echo
//!
//! The metadata surface is static configuration reflected back: tables
//! are the configured object classes, columns are the configured
//! attribute names, every column a nullable VARCHAR. No I/O.

use serde::Serialize;

use crate::config::ConnectorConfig;

/// One column as presented to the relational caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    /// Attribute name, case preserved from configuration
    pub name: String,
    /// Always VARCHAR
    pub type_name: &'static str,
    /// Always nullable: any attribute may be absent from any entry
    pub nullable: bool,
}

/// Read-only view of the configured relational surface
pub struct Catalog<'a> {
    config: &'a ConnectorConfig,
}

impl<'a> Catalog<'a> {
    /// Creates a catalog over the given configuration
    pub fn new(config: &'a ConnectorConfig) -> Self {
        Self { config }
    }

    /// Table names: the configured object classes, in configured order
    pub fn tables(&self) -> Vec<String> {
        self.config.object_classes.clone()
    }

    /// Columns shared by every table: the configured attributes
    pub fn columns(&self) -> Vec<ColumnInfo> {
        self.config
            .default_projection()
            .into_iter()
            .map(|name| ColumnInfo {
                name,
                type_name: "VARCHAR",
                nullable: true,
            })
            .collect()
    }
}
