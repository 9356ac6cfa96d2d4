//! Search planner
//!
//! Combines statement fragments with connector configuration to choose
//! the search base, the filter, the attribute projection and the row
//! cap. Planning never fails: a FROM target that matches no configured
//! object class degrades to pass-through addressing, where the target
//! itself is the search base.

use crate::config::ConnectorConfig;
use crate::filter::{self, ClassConstraint};
use crate::sql::{QueryFragments, SelectList};

use super::plan::SearchPlan;

/// Plans directory searches for one connector configuration
pub struct SearchPlanner<'a> {
    config: &'a ConnectorConfig,
}

impl<'a> SearchPlanner<'a> {
    /// Creates a planner over the given configuration
    pub fn new(config: &'a ConnectorConfig) -> Self {
        Self { config }
    }

    /// Produces a plan for one statement.
    ///
    /// `statement_limit` is the statement-level row cap; 0 means unset.
    /// The effective cap is the smaller of the statement and connector
    /// caps, each ignored when unset.
    pub fn plan(&self, fragments: &QueryFragments, statement_limit: u32) -> SearchPlan {
        let matched_class = self
            .config
            .object_classes
            .iter()
            .find(|oc| oc.eq_ignore_ascii_case(&fragments.from_target));

        let (search_base, constraint) = match matched_class {
            Some(class) => {
                let constraint = if self.config.skip_filter {
                    None
                } else {
                    Some(ClassConstraint::new(
                        self.config.class_filter_attribute(),
                        class.clone(),
                    ))
                };
                (self.config.base_dn.clone(), constraint)
            }
            // Pass-through addressing: the target is a DN of its own
            None => (fragments.from_target.clone(), None),
        };

        let filter = filter::compile(fragments.where_predicate.as_deref(), constraint.as_ref());

        let requested = match &fragments.select_list {
            SelectList::Wildcard => self.config.default_projection(),
            SelectList::Columns(columns) => columns.clone(),
        };

        SearchPlan {
            search_base,
            filter,
            requested_attributes: dedupe_case_insensitive(requested),
            size_limit: effective_cap(statement_limit, self.config.max_rows),
        }
    }
}

/// Smaller of two caps, treating 0 as unset
fn effective_cap(statement_limit: u32, connector_limit: u32) -> u32 {
    match (statement_limit, connector_limit) {
        (0, c) => c,
        (s, 0) => s,
        (s, c) => s.min(c),
    }
}

/// Removes case-insensitive duplicates, keeping first-seen order and
/// case; falls back to the minimal projection when the list is empty
fn dedupe_case_insensitive(names: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(names.len());
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        let key = name.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            out.push(name);
        }
    }
    if out.is_empty() {
        crate::config::FALLBACK_ATTRIBUTES
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        out
    }
}
