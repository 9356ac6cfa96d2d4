//! Configuration file loading
//!
//! One JSON file per connector instance; missing optional fields take
//! the connector defaults, required fields fail the load.

use std::fs;
use std::path::Path;

use super::errors::{ConfigError, ConfigResult};
use super::types::ConnectorConfig;

impl ConnectorConfig {
    /// Loads and validates a configuration file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config: ConnectorConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        config.validate()?;

        Ok(config)
    }
}
