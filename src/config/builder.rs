//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile};
use crate::domain::ApiVersion;
use crate::error::ConfigError;

use std::path::PathBuf;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path must load; without one the default locations are
    /// searched and unreadable files are skipped.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default(),
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI server address
    pub fn with_ip(mut self, ip: Option<String>) -> Self {
        if let Some(ip) = ip {
            self.config.server.ip = ip;
        }
        self
    }

    /// Override with CLI server port
    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(p) = port {
            self.config.server.port = p;
        }
        self
    }

    /// Override with CLI protocol version
    pub fn with_api_version(mut self, version: Option<ApiVersion>) -> Self {
        if let Some(v) = version {
            self.config.server.api_version = v;
        }
        self
    }

    /// Override with CLI resolve cache directory
    pub fn with_cache_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(d) = dir {
            self.config.resolver.cache_dir = d;
        }
        self
    }

    /// Override with CLI long ids flag
    pub fn with_long_ids(mut self, long_ids: Option<bool>) -> Self {
        if let Some(l) = long_ids {
            self.config.output.long_ids = l;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().build();
        assert_eq!(config.server.port, 9005);
        assert!(!config.output.long_ids);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .with_ip(Some("10.0.0.9".to_string()))
            .with_port(Some(9006))
            .with_api_version(Some(ApiVersion::V1))
            .with_cache_dir(Some(PathBuf::from("/tmp/conductr-cache")))
            .with_long_ids(Some(true))
            .build();

        assert_eq!(config.server.ip, "10.0.0.9");
        assert_eq!(config.server.port, 9006);
        assert_eq!(config.server.api_version, ApiVersion::V1);
        assert_eq!(config.resolver.cache_dir, PathBuf::from("/tmp/conductr-cache"));
        assert!(config.output.long_ids);
    }

    #[test]
    fn test_builder_none_keeps_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 9100\n").unwrap();

        let config = ConfigBuilder::new()
            .with_file(path.to_str())
            .unwrap()
            .with_port(None)
            .build();

        assert_eq!(config.server.port, 9100);
    }

    #[test]
    fn test_explicit_file_errors_are_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            ConfigBuilder::new().with_file(missing.to_str()),
            Err(ConfigError::FileNotFound(_))
        ));

        let invalid = dir.path().join("invalid.toml");
        std::fs::write(&invalid, "[server\nport = ").unwrap();
        assert!(matches!(
            ConfigBuilder::new().with_file(invalid.to_str()),
            Err(ConfigError::TomlError(_))
        ));
    }
}
