//! Bundle domain types
//!
//! Typed view of the bundle records returned by `GET /bundles`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Number of characters kept per identifier part in short form
pub const SHORT_ID_LENGTH: usize = 7;

/// Marker shown in front of ids of bundles reporting an error
pub const ERROR_MARKER: &str = "! ";

/// A bundle as reported by the ConductR control API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleRecord {
    /// Bundle id, either a plain digest or `<bundleDigest>-<configDigest>`
    pub bundle_id: String,
    /// Whether the bundle reported an error
    #[serde(default)]
    pub has_error: bool,
    /// Declared bundle attributes
    pub attributes: BundleAttributes,
    /// Nodes the bundle is installed on
    #[serde(default)]
    pub bundle_installations: Vec<serde_json::Value>,
    /// Running or starting executions
    #[serde(default)]
    pub bundle_executions: Vec<BundleExecution>,
}

/// Bundle attributes declared in `bundle.conf`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleAttributes {
    /// Bundle name
    pub bundle_name: String,
    /// Compatibility version, sent as either a string or a number
    #[serde(default, deserialize_with = "string_or_number")]
    pub compatibility_version: String,
    /// Roles the bundle requires
    #[serde(default)]
    pub roles: Vec<String>,
}

/// A single bundle execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleExecution {
    #[serde(default)]
    pub is_started: bool,
}

impl BundleRecord {
    /// Bundle name
    pub fn name(&self) -> &str {
        &self.attributes.bundle_name
    }

    /// Number of nodes the bundle is installed on
    pub fn replications(&self) -> usize {
        self.bundle_installations.len()
    }

    /// Number of executions still starting
    pub fn starting(&self) -> usize {
        self.bundle_executions.iter().filter(|e| !e.is_started).count()
    }

    /// Number of started executions
    pub fn running(&self) -> usize {
        self.bundle_executions.iter().filter(|e| e.is_started).count()
    }

    /// Roles sorted alphabetically
    pub fn sorted_roles(&self) -> Vec<&str> {
        let mut roles: Vec<&str> = self.attributes.roles.iter().map(String::as_str).collect();
        roles.sort_unstable();
        roles
    }

    /// Id as shown to the user, with the error marker when applicable
    pub fn display_id(&self, long_ids: bool) -> DisplayId<'_> {
        DisplayId {
            bundle_id: &self.bundle_id,
            long: long_ids,
            has_error: self.has_error,
        }
    }
}

/// Printable bundle id in long or short form
#[derive(Debug, Clone, Copy)]
pub struct DisplayId<'a> {
    bundle_id: &'a str,
    long: bool,
    has_error: bool,
}

impl fmt::Display for DisplayId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_error {
            f.write_str(ERROR_MARKER)?;
        }
        if self.long {
            f.write_str(self.bundle_id)
        } else {
            f.write_str(&short_id(self.bundle_id))
        }
    }
}

/// Abbreviate every `-` separated part of an id to [`SHORT_ID_LENGTH`] characters
pub fn short_id(bundle_id: &str) -> String {
    bundle_id
        .split('-')
        .map(|part| match part.char_indices().nth(SHORT_ID_LENGTH) {
            Some((end, _)) => &part[..end],
            None => part,
        })
        .collect::<Vec<_>>()
        .join("-")
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
