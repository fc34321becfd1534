//! ConductR HTTP client
//!
//! Thin blocking wrapper around `reqwest` for the bundle endpoints.

use crate::config::ServerConfig;
use crate::domain::{ApiVersion, BundleRecord};
use crate::error::ApiError;
use crate::services::{FieldValue, LoadPayload};

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use std::time::Duration;

/// Timeout for plain API requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for bundle uploads
pub const LOAD_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Response to a successful bundle upload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadResponse {
    pub bundle_id: String,
}

/// Client for the ConductR control API
pub struct ConductrClient {
    http: Client,
    ip: String,
    port: u16,
    api_version: ApiVersion,
}

impl ConductrClient {
    /// Create a client for the configured server
    pub fn new(server: &ServerConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|source| ApiError::Connection {
                url: format!("{}:{}", server.ip, server.port),
                source,
            })?;

        Ok(Self {
            http,
            ip: server.ip.clone(),
            port: server.port,
            api_version: server.api_version,
        })
    }

    /// Protocol version used for requests
    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Full URL of an API resource
    pub fn url(&self, path: &str) -> String {
        format!(
            "http://{}:{}/{}{}",
            self.ip,
            self.port,
            self.api_version.path_prefix(),
            path
        )
    }

    /// Fetch all bundles known to the cluster
    pub fn bundles(&self) -> Result<Vec<BundleRecord>, ApiError> {
        let url = self.url("bundles");
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|source| ApiError::Connection {
                url: url.clone(),
                source,
            })?;
        let body = successful_body(response, &url)?;

        Ok(serde_json::from_str(&body)?)
    }

    /// Upload a bundle
    pub fn load(&self, payload: LoadPayload) -> Result<LoadResponse, ApiError> {
        let url = self.url("bundles");
        let form = to_form(payload)?;
        log::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .timeout(LOAD_HTTP_TIMEOUT)
            .send()
            .map_err(|source| ApiError::Connection {
                url: url.clone(),
                source,
            })?;
        let body = successful_body(response, &url)?;

        Ok(serde_json::from_str(&body)?)
    }
}

/// Read the body of a response, rejecting redirects and failures
fn successful_body(response: Response, url: &str) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().map_err(|source| ApiError::Connection {
        url: url.to_string(),
        source,
    })?;

    if status.as_u16() >= 300 {
        return Err(ApiError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        });
    }

    if log::log_enabled!(log::Level::Debug) {
        log::debug!("{}", pretty_json(&body));
    }

    Ok(body)
}

/// Convert a payload into a multipart form, opening file parts
fn to_form(payload: LoadPayload) -> Result<Form, ApiError> {
    payload
        .into_iter()
        .try_fold(Form::new(), |form, field| match field.value {
            FieldValue::Text(value) => Ok(form.text(field.name, value)),
            FieldValue::Blob { file_name, bytes } => {
                Ok(form.part(field.name, Part::bytes(bytes).file_name(file_name)))
            }
            FieldValue::File(file) => {
                let part = Part::file(&file.path).map_err(|source| ApiError::Upload {
                    path: file.path.display().to_string(),
                    source,
                })?;
                Ok(form.part(field.name, part.file_name(file.name)))
            }
        })
}

/// Pretty-print a JSON document, falling back to the raw text
pub fn pretty_json(text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| text.to_string())
}
