//! Bundle configuration trees
//!
//! `bundle.conf` documents are HOCON. They are parsed into a [`ConfigTree`]
//! whose typed accessors report a missing key as `Ok(None)` rather than an
//! error.

use crate::error::ConfigError;
use hocon::{Hocon, HoconLoader};
use std::str::FromStr;

/// Name of the configuration entry inside bundle and configuration archives
pub const BUNDLE_CONF: &str = "bundle.conf";

/// Typed lookup applied to a tree at a dotted key
///
/// `Ok(None)` means the key is absent, `Err` that it holds the wrong shape.
pub type Accessor<T> = fn(&ConfigTree, &str) -> Result<Option<T>, ConfigError>;

/// Parsed HOCON document addressed by dotted key paths
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigTree {
    root: Hocon,
}

impl ConfigTree {
    /// Wrap an already parsed document
    pub fn new(root: Hocon) -> Self {
        Self { root }
    }

    /// Parse configuration bytes read from an archive entry
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let text = String::from_utf8(bytes.to_vec())?;
        text.parse()
    }

    /// Look up the raw value at a dotted key path
    ///
    /// Absent keys, explicit `null` and unresolved values all read as `None`.
    pub fn get(&self, key: &str) -> Option<&Hocon> {
        key.split('.')
            .try_fold(&self.root, |value, segment| match value {
                Hocon::Hash(entries) => entries.get(segment),
                _ => None,
            })
            .filter(|value| !matches!(value, Hocon::Null | Hocon::BadValue(_)))
    }

    /// Scalar at `key` rendered as text
    pub fn get_string(&self, key: &str) -> Result<Option<String>, ConfigError> {
        self.get(key)
            .map(|value| {
                scalar_text(value).ok_or_else(|| ConfigError::WrongType {
                    key: key.to_string(),
                    expected: "string",
                })
            })
            .transpose()
    }

    /// List of scalars at `key`, each rendered as text
    pub fn get_list(&self, key: &str) -> Result<Option<Vec<String>>, ConfigError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };

        let wrong_type = || ConfigError::WrongType {
            key: key.to_string(),
            expected: "list of strings",
        };

        let Hocon::Array(items) = value else {
            return Err(wrong_type());
        };

        items
            .iter()
            .map(|item| scalar_text(item).ok_or_else(wrong_type))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

impl Default for ConfigTree {
    fn default() -> Self {
        Self::new(Hocon::Hash(Default::default()))
    }
}

impl FromStr for ConfigTree {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(HoconLoader::new().load_str(s)?.hocon()?))
    }
}

fn scalar_text(value: &Hocon) -> Option<String> {
    match value {
        Hocon::String(s) => Some(s.clone()),
        Hocon::Integer(i) => Some(i.to_string()),
        Hocon::Real(f) => Some(format!("{f:?}")),
        Hocon::Boolean(b) => Some(b.to_string()),
        Hocon::Array(_) | Hocon::Hash(_) | Hocon::Null | Hocon::BadValue(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONF: &str = r#"
        version = "1"
        name = "visualizer"
        system = visualizer
        nrOfCpus = 0.1
        memory = 402653184
        diskSpace = 200000000
        roles = ["web", "frontend"]

        components = {
          visualizer = {
            description = "visualizer"
            file-system-type = "universal"
            start-command = ["visualizer/bin/visualizer", "-J-Xms134217728"]
            endpoints = {
              "visualizer" = {
                bind-protocol = "http"
                bind-port = 0
                services = ["http://:9999/visualizer"]
              }
            }
          }
        }
    "#;

    fn tree() -> ConfigTree {
        CONF.parse().unwrap()
    }

    #[test]
    fn test_get_string_renders_scalars() {
        let tree = tree();
        assert_eq!(tree.get_string("name").unwrap().as_deref(), Some("visualizer"));
        assert_eq!(tree.get_string("nrOfCpus").unwrap().as_deref(), Some("0.1"));
        assert_eq!(tree.get_string("memory").unwrap().as_deref(), Some("402653184"));
    }

    #[test]
    fn test_missing_key_is_none() {
        assert!(tree().get_string("absent").unwrap().is_none());
        assert!(tree().get_list("absent").unwrap().is_none());
        assert!(tree().get_string("name.nested").unwrap().is_none());
    }

    #[test]
    fn test_dotted_path() {
        let tree = tree();
        assert_eq!(
            tree.get_string("components.visualizer.description").unwrap().as_deref(),
            Some("visualizer")
        );
        assert_eq!(
            tree.get_list("components.visualizer.start-command").unwrap().map(|l| l.len()),
            Some(2)
        );
    }

    #[test]
    fn test_unquoted_values_and_nested_objects() {
        let tree = tree();
        assert_eq!(tree.get_string("system").unwrap().as_deref(), Some("visualizer"));
        assert_eq!(
            tree.get_string("components.visualizer.endpoints.visualizer.bind-port")
                .unwrap()
                .as_deref(),
            Some("0")
        );
    }

    #[test]
    fn test_null_is_missing() {
        let tree: ConfigTree = "system = null".parse().unwrap();
        assert!(tree.get_string("system").unwrap().is_none());
    }

    #[test]
    fn test_invalid_document() {
        assert!(matches!(
            "components = {".parse::<ConfigTree>(),
            Err(ConfigError::HoconError(_))
        ));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(ConfigTree::default().get_string("name").unwrap().is_none());
    }

    #[test]
    fn test_get_list() {
        assert_eq!(
            tree().get_list("roles").unwrap(),
            Some(vec!["web".to_string(), "frontend".to_string()])
        );
    }

    #[test]
    fn test_wrong_type() {
        let tree = tree();
        assert!(matches!(
            tree.get_string("roles"),
            Err(ConfigError::WrongType { .. })
        ));
        assert!(matches!(
            tree.get_list("name"),
            Err(ConfigError::WrongType { .. })
        ));
    }

    #[test]
    fn test_from_bytes_rejects_invalid_utf8() {
        assert!(matches!(
            ConfigTree::from_bytes(&[0xff, 0xfe]),
            Err(ConfigError::Encoding(_))
        ));
    }
}
