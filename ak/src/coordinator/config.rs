//! Coordinator configuration

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::ErrorCatalog;
use crate::navigation::LoginRoute;

/// Coordinator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatorConfig {
    /// Channel buffer size for coordinator requests
    #[serde(default = "default_channel_buffer", rename = "channel-buffer")]
    pub channel_buffer: usize,

    /// Scene pushed when a session has to be re-established
    #[serde(default)]
    pub login: LoginRoute,

    /// Error names classified by name in addition to the built-in sentinels
    #[serde(default, rename = "error-catalog")]
    pub error_catalog: Vec<String>,
}

fn default_channel_buffer() -> usize {
    debug!("default_channel_buffer: called");
    256
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        debug!("CoordinatorConfig::default: called");
        Self {
            channel_buffer: default_channel_buffer(),
            login: LoginRoute::default(),
            error_catalog: Vec::new(),
        }
    }
}

impl CoordinatorConfig {
    /// Catalog with the built-in sentinels plus the configured names
    pub fn catalog(&self) -> ErrorCatalog {
        debug!(extra = self.error_catalog.len(), "CoordinatorConfig::catalog: called");
        ErrorCatalog::with_names(self.error_catalog.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ERR_NOT_LOGGED_IN;

    #[test]
    fn test_default_config() {
        let config = CoordinatorConfig::default();
        assert_eq!(config.channel_buffer, 256);
        assert_eq!(config.login, LoginRoute::default());
        assert!(config.error_catalog.is_empty());
    }

    #[test]
    fn test_catalog_merges_builtins() {
        let config = CoordinatorConfig {
            error_catalog: vec!["ERR_DISK_FULL".to_string()],
            ..Default::default()
        };
        let catalog = config.catalog();
        assert!(catalog.contains("ERR_DISK_FULL"));
        assert!(catalog.contains(ERR_NOT_LOGGED_IN));
    }

    #[test]
    fn test_deserialize_partial() {
        let yaml = "channel-buffer: 8\nlogin:\n  modal-level: 70\n";
        let config: CoordinatorConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.channel_buffer, 8);
        assert_eq!(config.login.modal_level, 70);
        assert_eq!(config.login.scene_key, "loginScene");
    }
}
