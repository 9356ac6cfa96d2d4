//! Connector configuration
//!
//! Connection parameters for one directory source: where the server
//! is, how to bind, which object classes are exposed as tables, which
//! attributes are exposed as columns, and the search size cap.

use serde::{Deserialize, Serialize};

use super::errors::{ConfigError, ConfigResult};

/// Fallback attribute projection when no attributes are configured
pub const FALLBACK_ATTRIBUTES: [&str; 3] = ["dn", "cn", "objectClass"];

/// Connector configuration for one directory source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Directory host (required)
    pub host: String,

    /// Directory port (default 389)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Connect over LDAPS instead of plain LDAP
    #[serde(default)]
    pub use_ssl: bool,

    /// Default search base DN (required)
    pub base_dn: String,

    /// Bind DN; empty means anonymous bind
    #[serde(default)]
    pub bind_dn: String,

    /// Bind password
    #[serde(default)]
    pub password: String,

    /// Object classes exposed as tables, ordered, case preserved
    #[serde(default = "default_object_classes")]
    pub object_classes: Vec<String>,

    /// Attributes exposed as columns, ordered, case preserved
    #[serde(default = "default_attributes")]
    pub attributes: Vec<String>,

    /// Connector-level row cap per query; 0 leaves only the executor
    /// default in effect
    #[serde(default = "default_max_rows")]
    pub max_rows: u32,

    /// Filter on `objectCategory` instead of `objectClass`, which is
    /// the better-indexed attribute on Active Directory
    #[serde(default)]
    pub use_object_category: bool,

    /// Suppress the automatic object-class filter entirely
    #[serde(default)]
    pub skip_filter: bool,
}

fn default_port() -> u16 {
    389
}

fn default_max_rows() -> u32 {
    500
}

fn default_object_classes() -> Vec<String> {
    ["user", "group", "computer", "organizationalUnit", "contact"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_attributes() -> Vec<String> {
    [
        "dn",
        "cn",
        "objectClass",
        "sAMAccountName",
        "displayName",
        "mail",
        "givenName",
        "sn",
        "memberOf",
        "member",
        "description",
        "userPrincipalName",
        "distinguishedName",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl ConnectorConfig {
    /// Creates a configuration with defaults for everything but the
    /// host and base DN
    pub fn new(host: impl Into<String>, base_dn: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: default_port(),
            use_ssl: false,
            base_dn: base_dn.into(),
            bind_dn: String::new(),
            password: String::new(),
            object_classes: default_object_classes(),
            attributes: default_attributes(),
            max_rows: default_max_rows(),
            use_object_category: false,
            skip_filter: false,
        }
    }

    /// Sets the bind credentials
    pub fn with_credentials(
        mut self,
        bind_dn: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.bind_dn = bind_dn.into();
        self.password = password.into();
        self
    }

    /// Sets the exposed object classes
    pub fn with_object_classes(
        mut self,
        classes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.object_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the exposed attributes
    pub fn with_attributes(
        mut self,
        attributes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the connector-level row cap
    pub fn with_max_rows(mut self, max_rows: u32) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Filters on `objectCategory` instead of `objectClass`
    pub fn with_object_category(mut self, enabled: bool) -> Self {
        self.use_object_category = enabled;
        self
    }

    /// Suppresses the automatic object-class filter
    pub fn with_skip_filter(mut self, enabled: bool) -> Self {
        self.skip_filter = enabled;
        self
    }

    /// Directory URL derived from host, port and the SSL flag
    pub fn ldap_url(&self) -> String {
        let scheme = if self.use_ssl { "ldaps" } else { "ldap" };
        format!("{}://{}:{}", scheme, self.host, self.port)
    }

    /// Filter attribute used for object-class constraints
    pub fn class_filter_attribute(&self) -> &'static str {
        if self.use_object_category {
            "objectCategory"
        } else {
            "objectClass"
        }
    }

    /// The attribute projection used for wildcard selects; never empty
    pub fn default_projection(&self) -> Vec<String> {
        if self.attributes.is_empty() {
            FALLBACK_ATTRIBUTES.iter().map(|s| s.to_string()).collect()
        } else {
            self.attributes.clone()
        }
    }

    /// Rejects blank required fields and an out-of-range port
    pub fn validate(&self) -> ConfigResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("host must not be blank".into()));
        }
        if self.base_dn.trim().is_empty() {
            return Err(ConfigError::Invalid("base_dn must not be blank".into()));
        }
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_connector_defaults() {
        let config = ConnectorConfig::new("ldap.example.org", "DC=example,DC=org");
        assert_eq!(config.port, 389);
        assert_eq!(config.max_rows, 500);
        assert!(!config.use_ssl);
        assert!(!config.use_object_category);
        assert!(!config.skip_filter);
        assert_eq!(config.object_classes.len(), 5);
        assert_eq!(config.attributes.len(), 13);
    }

    #[test]
    fn test_ldap_url_schemes() {
        let mut config = ConnectorConfig::new("ad.corp", "DC=corp");
        assert_eq!(config.ldap_url(), "ldap://ad.corp:389");

        config.use_ssl = true;
        config.port = 636;
        assert_eq!(config.ldap_url(), "ldaps://ad.corp:636");
    }

    #[test]
    fn test_class_filter_attribute() {
        let config = ConnectorConfig::new("h", "b");
        assert_eq!(config.class_filter_attribute(), "objectClass");
        assert_eq!(
            config.with_object_category(true).class_filter_attribute(),
            "objectCategory"
        );
    }

    #[test]
    fn test_default_projection_falls_back() {
        let config = ConnectorConfig::new("h", "b").with_attributes(Vec::<String>::new());
        assert_eq!(config.default_projection(), vec!["dn", "cn", "objectClass"]);
    }

    #[test]
    fn test_validation_rejects_blank_fields() {
        assert!(ConnectorConfig::new("", "b").validate().is_err());
        assert!(ConnectorConfig::new("h", " ").validate().is_err());
        let mut config = ConnectorConfig::new("h", "b");
        config.port = 0;
        assert!(config.validate().is_err());
        assert!(ConnectorConfig::new("h", "b").validate().is_ok());
    }
}
