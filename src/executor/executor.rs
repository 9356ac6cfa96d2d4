//! Directory search executor
//!
//! Owns the network session for one search: connect, optionally bind,
//! issue a single subtree-scoped search with the plan's filter and
//! projection, drain entries up to the cap, and release the session on
//! every exit path.
//!
//! Referral following is disabled; referral responses contribute no
//! entries and are not errors. A size-limit-exceeded result returns
//! the entries already collected with the truncation flag set.

use ldap3::{LdapConn, Scope, SearchEntry, SearchOptions};

use crate::config::ConnectorConfig;
use crate::observability::Logger;
use crate::planner::SearchPlan;

use super::entry::DirectoryEntry;
use super::errors::{ExecutorResult, SearchError};

/// Server-side cap applied when the plan is unbounded
pub const DEFAULT_SIZE_LIMIT: u32 = 500;

/// Protocol result code: success
const RC_SUCCESS: u32 = 0;
/// Protocol result code: sizeLimitExceeded
const RC_SIZE_LIMIT_EXCEEDED: u32 = 4;
/// Protocol result code: referral
const RC_REFERRAL: u32 = 10;

/// Result of one executed search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Entries collected, in directory-returned order
    pub entries: Vec<DirectoryEntry>,
    /// True when the directory or the cap cut the result short
    pub truncated: bool,
}

impl SearchOutcome {
    /// An outcome with no entries
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            truncated: false,
        }
    }

    /// Number of entries collected
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries were collected
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Seam between the statement pipeline and the network.
///
/// The production implementation is [`LdapExecutor`]; tests drive the
/// pipeline with an in-memory directory instead.
pub trait DirectorySearch {
    /// Executes one bounded, subtree-scoped search
    fn search(&mut self, plan: &SearchPlan) -> ExecutorResult<SearchOutcome>;
}

/// Executor backed by a real LDAP connection
pub struct LdapExecutor {
    url: String,
    bind_dn: String,
    password: String,
}

impl LdapExecutor {
    /// Creates an executor from connector configuration
    pub fn new(config: &ConnectorConfig) -> Self {
        Self {
            url: config.ldap_url(),
            bind_dn: config.bind_dn.clone(),
            password: config.password.clone(),
        }
    }

    fn run(&self, conn: &mut LdapConn, plan: &SearchPlan) -> ExecutorResult<SearchOutcome> {
        if !self.bind_dn.is_empty() {
            conn.simple_bind(&self.bind_dn, &self.password)
                .and_then(|res| res.success())
                .map_err(|source| SearchError::Bind {
                    bind_dn: self.bind_dn.clone(),
                    source,
                })?;
        }

        let cap = if plan.is_bounded() {
            plan.size_limit
        } else {
            DEFAULT_SIZE_LIMIT
        };

        let result = conn
            .with_search_options(SearchOptions::new().sizelimit(cap as i32))
            .search(
                &plan.search_base,
                Scope::Subtree,
                plan.filter.as_str(),
                plan.requested_attributes.clone(),
            )
            .map_err(SearchError::Search)?;

        let raw_entries = result.0;
        let ldap_result = result.1;

        // sizeLimitExceeded is a truncated success; a referral result
        // simply contributes whatever entries arrived before it
        let mut truncated = match ldap_result.rc {
            RC_SUCCESS | RC_REFERRAL => false,
            RC_SIZE_LIMIT_EXCEEDED => true,
            rc => {
                return Err(SearchError::Rejected {
                    rc,
                    text: ldap_result.text,
                })
            }
        };

        let mut entries = Vec::with_capacity(raw_entries.len().min(cap as usize));
        for raw in raw_entries {
            if entries.len() >= cap as usize {
                truncated = true;
                break;
            }
            let constructed = SearchEntry::construct(raw);
            let mut entry = DirectoryEntry::new(constructed.dn);
            for (name, values) in constructed.attrs {
                entry.insert(name, values);
            }
            entries.push(entry);
        }

        Ok(SearchOutcome { entries, truncated })
    }
}

impl DirectorySearch for LdapExecutor {
    fn search(&mut self, plan: &SearchPlan) -> ExecutorResult<SearchOutcome> {
        let mut conn = LdapConn::new(&self.url).map_err(SearchError::Connect)?;

        let outcome = self.run(&mut conn, plan);

        // Release the session on every exit path; an unbind failure
        // cannot improve on an error we are already propagating
        let _ = conn.unbind();

        match &outcome {
            Ok(result) => {
                let count = result.entries.len().to_string();
                let truncated = result.truncated.to_string();
                Logger::info(
                    "SEARCH_EXECUTED",
                    &[
                        ("base", plan.search_base.as_str()),
                        ("filter", plan.filter.as_str()),
                        ("entries", count.as_str()),
                        ("truncated", truncated.as_str()),
                    ],
                );
            }
            Err(err) => {
                let message = err.to_string();
                Logger::error(
                    "SEARCH_FAILED",
                    &[
                        ("base", plan.search_base.as_str()),
                        ("filter", plan.filter.as_str()),
                        ("error", message.as_str()),
                    ],
                );
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_empty() {
        let outcome = SearchOutcome::empty();
        assert!(outcome.is_empty());
        assert_eq!(outcome.len(), 0);
        assert!(!outcome.truncated);
    }

    #[test]
    fn test_executor_takes_url_from_config() {
        let config = ConnectorConfig::new("ldap.example.org", "DC=example,DC=org");
        let executor = LdapExecutor::new(&config);
        assert_eq!(executor.url, "ldap://ldap.example.org:389");
        assert!(executor.bind_dn.is_empty());
    }
}
