//! Control API protocol versions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Version of the ConductR control protocol spoken by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ApiVersion {
    /// Bundle settings are extracted locally and sent as individual fields
    #[serde(rename = "1")]
    V1,
    /// Raw `bundle.conf` documents are sent and merged by the server
    #[default]
    #[serde(rename = "2")]
    V2,
}

impl ApiVersion {
    /// Path segment inserted before API resources
    pub fn path_prefix(self) -> &'static str {
        match self {
            ApiVersion::V1 => "",
            ApiVersion::V2 => "v2/",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V1 => write!(f, "1"),
            ApiVersion::V2 => write!(f, "2"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(ApiVersion::V1),
            "2" => Ok(ApiVersion::V2),
            other => Err(format!("unsupported API version '{other}' (expected 1 or 2)")),
        }
    }
}
