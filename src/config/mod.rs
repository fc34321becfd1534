//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::domain::ApiVersion;
use crate::services::resolver::default_cache_dir;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default ConductR control server address
pub const DEFAULT_IP: &str = "127.0.0.1";

/// Default ConductR control server port
pub const DEFAULT_PORT: u16 = 9005;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Control server settings
    pub server: ServerConfig,
    /// Bundle resolution settings
    pub resolver: ResolverConfig,
    /// Output settings
    pub output: OutputConfig,
}

/// Control server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host name or address
    pub ip: String,
    /// Server port
    pub port: u16,
    /// Control protocol version
    pub api_version: ApiVersion,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: DEFAULT_IP.to_string(),
            port: DEFAULT_PORT,
            api_version: ApiVersion::default(),
        }
    }
}

impl ServerConfig {
    /// Flags to repeat in follow-up command hints, empty for defaults
    pub fn cli_parameters(&self) -> String {
        let mut params = String::new();
        if self.ip != DEFAULT_IP {
            params.push_str(&format!(" --ip {}", self.ip));
        }
        if self.port != DEFAULT_PORT {
            params.push_str(&format!(" --port {}", self.port));
        }
        if self.api_version != ApiVersion::default() {
            params.push_str(&format!(" --api-version {}", self.api_version));
        }
        params
    }
}

/// Bundle resolution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Directory downloaded bundles are cached in
    pub cache_dir: PathBuf,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Show full bundle ids instead of abbreviated ones
    pub long_ids: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.ip, "127.0.0.1");
        assert_eq!(config.server.port, 9005);
        assert_eq!(config.server.api_version, ApiVersion::V2);
        assert!(!config.output.long_ids);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [server]
            ip = "10.0.0.5"
            api_version = "1"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.ip, "10.0.0.5");
        assert_eq!(config.server.port, 9005);
        assert_eq!(config.server.api_version, ApiVersion::V1);
    }

    #[test]
    fn test_cli_parameters() {
        assert_eq!(ServerConfig::default().cli_parameters(), "");

        let server = ServerConfig {
            ip: "10.0.0.5".to_string(),
            port: 9006,
            api_version: ApiVersion::V1,
        };
        assert_eq!(
            server.cli_parameters(),
            " --ip 10.0.0.5 --port 9006 --api-version 1"
        );
    }
}
