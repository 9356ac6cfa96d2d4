//! Search execution errors
//!
//! Every variant keeps the underlying protocol error as its source so
//! the cause chain survives propagation. Size-limit truncation is not
//! represented here; it is a successful outcome.

use thiserror::Error;

/// Result type for executor operations
pub type ExecutorResult<T> = Result<T, SearchError>;

/// Typed failure of one directory search
#[derive(Debug, Error)]
pub enum SearchError {
    /// The directory connection could not be established
    #[error("directory connection failed: {0}")]
    Connect(#[source] ldap3::LdapError),

    /// The bind was rejected
    #[error("directory bind failed for '{bind_dn}': {source}")]
    Bind {
        /// DN the bind was attempted as
        bind_dn: String,
        /// Underlying protocol error
        #[source]
        source: ldap3::LdapError,
    },

    /// The search could not be sent or the transport failed mid-search
    #[error("directory search failed: {0}")]
    Search(#[source] ldap3::LdapError),

    /// The directory rejected the search with a non-success result
    /// code (bad filter or base syntax, unsupported operation, ...)
    #[error("directory rejected search with result code {rc}: {text}")]
    Rejected {
        /// Protocol result code
        rc: u32,
        /// Diagnostic text from the server
        text: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display() {
        let err = SearchError::Rejected {
            rc: 32,
            text: "no such object".into(),
        };
        let display = err.to_string();
        assert!(display.contains("32"));
        assert!(display.contains("no such object"));
    }
}
