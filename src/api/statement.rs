//! Statement execution
//!
//! Orchestrates one statement: extract fragments, plan the search
//! (compiling the WHERE-predicate along the way), execute it over a
//! fresh session, and hand back the schema plus a lazy row stream.

use crate::config::ConnectorConfig;
use crate::executor::{DirectorySearch, LdapExecutor};
use crate::observability::Logger;
use crate::planner::SearchPlanner;
use crate::rows::ColumnSchema;
use crate::sql::QueryFragments;

use super::errors::StatementResult;
use super::result::QueryResult;

/// One executable statement bound to a connector configuration.
///
/// Re-execution opens a fresh directory session each time; nothing is
/// pooled or cached at this layer.
pub struct Statement<'a> {
    config: &'a ConnectorConfig,
    /// Statement-level row cap; 0 means unset
    max_rows: u32,
}

impl<'a> Statement<'a> {
    /// Creates a statement with no statement-level row cap
    pub fn new(config: &'a ConnectorConfig) -> Self {
        Self {
            config,
            max_rows: 0,
        }
    }

    /// Sets the statement-level row cap; 0 clears it
    pub fn set_max_rows(&mut self, max_rows: u32) {
        self.max_rows = max_rows;
    }

    /// Returns the statement-level row cap
    pub fn max_rows(&self) -> u32 {
        self.max_rows
    }

    /// Executes one SELECT against the configured directory
    pub fn execute_query(&self, sql: &str) -> StatementResult<QueryResult> {
        let mut executor = LdapExecutor::new(self.config);
        self.execute_query_with(sql, &mut executor)
    }

    /// Executes one SELECT against the given directory seam.
    ///
    /// This is the whole pipeline behind [`execute_query`]; tests
    /// inject an in-memory directory here.
    ///
    /// [`execute_query`]: Statement::execute_query
    pub fn execute_query_with<D: DirectorySearch>(
        &self,
        sql: &str,
        directory: &mut D,
    ) -> StatementResult<QueryResult> {
        let fragments = QueryFragments::parse(sql)?;

        let plan = SearchPlanner::new(self.config).plan(&fragments, self.max_rows);
        let cap = plan.size_limit.to_string();
        Logger::trace(
            "SEARCH_PLANNED",
            &[
                ("base", plan.search_base.as_str()),
                ("filter", plan.filter.as_str()),
                ("size_limit", cap.as_str()),
            ],
        );

        let outcome = directory.search(&plan)?;
        if outcome.truncated {
            let count = outcome.len().to_string();
            Logger::warn("RESULT_TRUNCATED", &[("entries", count.as_str())]);
        }

        // The schema is fixed here, before any row is produced, and
        // never changes however heterogeneous the entries turn out
        let schema = ColumnSchema::from_columns(plan.requested_attributes);
        Ok(QueryResult::new(schema, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::{
        DirectoryEntry, ExecutorResult, SearchError, SearchOutcome,
    };
    use crate::planner::SearchPlan;
    use crate::sql::SqlError;
    use crate::api::errors::StatementError;

    /// In-memory directory that records the plan it was asked to run
    struct FakeDirectory {
        outcome: ExecutorResult<SearchOutcome>,
        last_plan: Option<SearchPlan>,
    }

    impl FakeDirectory {
        fn returning(outcome: SearchOutcome) -> Self {
            Self {
                outcome: Ok(outcome),
                last_plan: None,
            }
        }

        fn failing(error: SearchError) -> Self {
            Self {
                outcome: Err(error),
                last_plan: None,
            }
        }
    }

    impl DirectorySearch for FakeDirectory {
        fn search(&mut self, plan: &SearchPlan) -> ExecutorResult<SearchOutcome> {
            self.last_plan = Some(plan.clone());
            std::mem::replace(&mut self.outcome, Ok(SearchOutcome::empty()))
        }
    }

    fn config() -> ConnectorConfig {
        ConnectorConfig::new("ldap.example.org", "DC=example,DC=org")
            .with_object_classes(["user"])
            .with_attributes(["cn", "mail"])
    }

    #[test]
    fn test_pipeline_end_to_end() {
        let config = config();
        let statement = Statement::new(&config);
        let mut directory = FakeDirectory::returning(SearchOutcome {
            entries: vec![DirectoryEntry::new("CN=a").with_attribute("cn", ["a"])],
            truncated: false,
        });

        let result = statement
            .execute_query_with("SELECT cn, mail FROM user WHERE cn = 'a'", &mut directory)
            .unwrap();

        let plan = directory.last_plan.unwrap();
        assert_eq!(plan.search_base, "DC=example,DC=org");
        assert_eq!(plan.filter.as_str(), "(&(objectClass=user)(cn=a))");

        assert_eq!(result.schema().names(), &["cn", "mail"]);
        let rows: Vec<_> = result.collect();
        assert_eq!(rows, vec![vec![Some("a".into()), None]]);
    }

    #[test]
    fn test_statement_cap_reaches_plan() {
        let config = config();
        let mut statement = Statement::new(&config);
        statement.set_max_rows(5);
        let mut directory = FakeDirectory::returning(SearchOutcome::empty());

        statement
            .execute_query_with("SELECT cn FROM user", &mut directory)
            .unwrap();

        assert_eq!(directory.last_plan.unwrap().size_limit, 5);
    }

    #[test]
    fn test_malformed_query_surfaces() {
        let config = config();
        let statement = Statement::new(&config);
        let mut directory = FakeDirectory::returning(SearchOutcome::empty());

        let err = statement
            .execute_query_with("SELECT cn", &mut directory)
            .unwrap_err();
        assert!(matches!(
            err,
            StatementError::Sql(SqlError::MalformedQuery(_))
        ));
        // The search never ran
        assert!(directory.last_plan.is_none());
    }

    #[test]
    fn test_search_failure_surfaces_with_cause() {
        let config = config();
        let statement = Statement::new(&config);
        let mut directory = FakeDirectory::failing(SearchError::Rejected {
            rc: 32,
            text: "no such object".into(),
        });

        let err = statement
            .execute_query_with("SELECT cn FROM user", &mut directory)
            .unwrap_err();
        assert!(matches!(err, StatementError::Search(_)));
    }

    #[test]
    fn test_truncated_outcome_is_not_an_error() {
        let config = config();
        let statement = Statement::new(&config);
        let entries: Vec<_> = (0..5)
            .map(|i| DirectoryEntry::new(format!("CN={}", i)).with_attribute("cn", [i.to_string()]))
            .collect();
        let mut directory = FakeDirectory::returning(SearchOutcome {
            entries,
            truncated: true,
        });

        let result = statement
            .execute_query_with("SELECT cn FROM user", &mut directory)
            .unwrap();
        assert!(result.truncated());
        assert_eq!(result.count(), 5);
    }
}
