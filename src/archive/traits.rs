//! Trait definitions for archive access
//!
//! Payload assembly only ever needs "read this entry, if present", which
//! keeps the zip format out of the load logic and lets tests use mocks.

use crate::domain::BundleFile;
use crate::error::BundleError;

/// Read access to named entries of a bundle archive
pub trait ArchiveReader {
    /// Read the first entry whose file name is `name`
    ///
    /// An entry matches when its path is exactly `name` or ends with
    /// `/name`, so bundles that wrap their content in a top-level directory
    /// are handled. Returns `Ok(None)` when no entry matches.
    fn read_entry(&self, archive: &BundleFile, name: &str) -> Result<Option<Vec<u8>>, BundleError>;
}

/// Whether an archive entry path designates a file called `name`
pub fn entry_matches(entry_path: &str, name: &str) -> bool {
    entry_path == name
        || entry_path
            .strip_suffix(name)
            .is_some_and(|dir| dir.ends_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_matches() {
        assert!(entry_matches("bundle.conf", "bundle.conf"));
        assert!(entry_matches("visualizer-v1-023f9da/bundle.conf", "bundle.conf"));
        assert!(!entry_matches("visualizer/my-bundle.conf", "bundle.conf"));
        assert!(!entry_matches("bundle.conf.bak", "bundle.conf"));
    }
}
