//! Directory entry representation
//!
//! One record from a directory search: a distinguished name plus a
//! variable set of named attributes, some multi-valued. Two entries of
//! the same object class may carry different attribute subsets, so
//! lookups are by name, case-insensitive, against a map pre-keyed on
//! the lowercased attribute name.

use std::collections::HashMap;

/// A single- or multi-valued attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Exactly one value
    Single(String),
    /// Two or more values in directory-returned order
    Multiple(Vec<String>),
}

impl AttributeValue {
    /// Builds from a value list; empty lists collapse to an empty
    /// single value
    pub fn from_values(mut values: Vec<String>) -> Self {
        match values.len() {
            0 => AttributeValue::Single(String::new()),
            1 => AttributeValue::Single(values.remove(0)),
            _ => AttributeValue::Multiple(values),
        }
    }

    /// Flattens to one string; multiple values join with `", "` in
    /// directory order
    pub fn as_joined(&self) -> String {
        match self {
            AttributeValue::Single(v) => v.clone(),
            AttributeValue::Multiple(vs) => vs.join(", "),
        }
    }
}

/// One directory entry with case-insensitive attribute lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    dn: String,
    /// Keyed on the lowercased attribute name; the value keeps the
    /// directory's original casing of the data
    attributes: HashMap<String, AttributeValue>,
}

impl DirectoryEntry {
    /// Creates an entry with no attributes
    pub fn new(dn: impl Into<String>) -> Self {
        Self {
            dn: dn.into(),
            attributes: HashMap::new(),
        }
    }

    /// Builder-style attribute insertion, for tests and fixtures
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.insert(name, values.into_iter().map(Into::into).collect());
        self
    }

    /// Inserts an attribute under its lowercased name
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.attributes
            .insert(name.into().to_lowercase(), AttributeValue::from_values(values));
    }

    /// The entry's distinguished name
    pub fn dn(&self) -> &str {
        &self.dn
    }

    /// Case-insensitive attribute lookup
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(&name.to_lowercase())
    }

    /// Number of attributes carried by this entry
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True when the entry carries no attributes
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
