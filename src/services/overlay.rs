//! Configuration overlay resolution
//!
//! Values are looked up in the overlay first and fall back to the bundle's
//! own configuration, one key at a time. Nested tables are not merged.

use crate::domain::{Accessor, ConfigTree};
use crate::error::ConfigError;

/// Resolves settings against a base tree and an optional overlay tree
#[derive(Debug, Clone, Copy)]
pub struct OverlayResolver<'a> {
    base: &'a ConfigTree,
    overlay: Option<&'a ConfigTree>,
}

impl<'a> OverlayResolver<'a> {
    /// Create a resolver over `base`, optionally overridden by `overlay`
    pub fn new(base: &'a ConfigTree, overlay: Option<&'a ConfigTree>) -> Self {
        Self { base, overlay }
    }

    /// Resolve `key` with `accessor`, preferring the overlay
    ///
    /// Only a missing key in the overlay falls through to the base; a type
    /// mismatch in the overlay is returned as-is. A key missing from every
    /// consulted tree yields [`ConfigError::KeyNotFound`].
    pub fn resolve<T>(&self, accessor: Accessor<T>, key: &str) -> Result<T, ConfigError> {
        let found = match self.overlay {
            Some(overlay) => match accessor(overlay, key)? {
                Some(value) => Some(value),
                None => {
                    log::trace!("{} not overridden, using bundle configuration", key);
                    accessor(self.base, key)?
                }
            },
            None => accessor(self.base, key)?,
        };

        found.ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))
    }
}
