//! Unified error types for conductr
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from reading or validating a bundle
    #[error("{0}")]
    Bundle(#[from] BundleError),

    /// Error talking to the ConductR control API
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Error locating a bundle or configuration archive
    #[error("{0}")]
    Resolve(#[from] ResolveError),

    /// No bundle matched the requested id or name
    #[error("Bundle not found: {0}")]
    BundleNotFound(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from configuration parsing and lookup
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Key absent from the configuration tree(s) consulted
    #[error("No configuration setting found for key {0}")]
    KeyNotFound(String),

    /// Key present but holding a value of another shape
    #[error("Configuration key {key} is not a {expected}")]
    WrongType { key: String, expected: &'static str },

    /// Configuration text is not valid UTF-8
    #[error("Configuration is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// HOCON parsing error in a `bundle.conf` document
    #[error("HOCON parse error: {0}")]
    HoconError(#[from] hocon::Error),
}

/// Errors from bundle archives and payload assembly
#[derive(Error, Debug)]
pub enum BundleError {
    /// A required entry or setting is missing from the bundle
    #[error("Malformed bundle: {0}")]
    Malformed(String),

    /// Bundle configuration could not be parsed
    #[error("Invalid bundle configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Archive is not a readable zip file
    #[error("Bad zip file {path}: {source}")]
    BadZip {
        path: String,
        #[source]
        source: zip::result::ZipError,
    },

    /// IO error while reading an archive
    #[error("Unable to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the ConductR control API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, TLS)
    #[error("Unable to contact ConductR at {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("{status} {reason}\n{body}")]
    Status {
        status: u16,
        reason: String,
        body: String,
    },

    /// Response body is not the expected JSON
    #[error("Unexpected response from ConductR: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// A payload file could not be opened for upload
    #[error("Unable to open {path} for upload: {source}")]
    Upload {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from bundle and configuration resolution
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Argument is neither an existing file nor a downloadable URL
    #[error("Bundle not found: {0}")]
    NotFound(String),

    /// Download of a remote bundle failed
    #[error("Unable to download {uri}: {message}")]
    Download { uri: String, message: String },

    /// Cache directory could not be used
    #[error("Unable to use resolve cache {path}: {source}")]
    Cache {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// Whether this error stems from failing to reach the server
    pub fn is_connection_error(&self) -> bool {
        matches!(self, ApiError::Connection { .. })
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_bundle_display() {
        let err = BundleError::Malformed("Unable to find bundle.conf within the bundle file".into());
        assert_eq!(
            err.to_string(),
            "Malformed bundle: Unable to find bundle.conf within the bundle file"
        );
    }

    #[test]
    fn test_key_not_found_display() {
        let err = ConfigError::KeyNotFound("nrOfCpus".to_string());
        assert!(err.to_string().contains("nrOfCpus"));
    }

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 404,
            reason: "Not Found".to_string(),
            body: "no such bundle".to_string(),
        };
        assert!(err.to_string().starts_with("404 Not Found"));
        assert!(!err.is_connection_error());
    }

    #[test]
    fn test_error_conversion() {
        let bundle_err = BundleError::Malformed("missing".to_string());
        let app_err: AppError = bundle_err.into();
        assert!(matches!(app_err, AppError::Bundle(_)));

        let config_err = ConfigError::FileNotFound("/etc/conductr/config.toml".to_string());
        let app_err: AppError = config_err.into();
        assert!(matches!(app_err, AppError::Config(ConfigError::FileNotFound(_))));
    }
}
