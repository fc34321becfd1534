//! Mock implementations for testing
//!
//! Provides an in-memory archive reader so payload assembly can be tested
//! without zip files on disk.

use crate::archive::ArchiveReader;
use crate::domain::BundleFile;
use crate::error::BundleError;

use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory archive reader keyed by archive path and entry name
#[derive(Debug, Default, Clone)]
pub struct MockArchiveReader {
    entries: HashMap<(PathBuf, String), Vec<u8>>,
}

impl MockArchiveReader {
    /// Create a reader with no archives
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add an entry to an archive
    pub fn with_entry(
        mut self,
        archive: &BundleFile,
        name: impl Into<String>,
        content: impl AsRef<[u8]>,
    ) -> Self {
        self.entries.insert(
            (archive.path.clone(), name.into()),
            content.as_ref().to_vec(),
        );
        self
    }
}

impl ArchiveReader for MockArchiveReader {
    fn read_entry(&self, archive: &BundleFile, name: &str) -> Result<Option<Vec<u8>>, BundleError> {
        Ok(self
            .entries
            .get(&(archive.path.clone(), name.to_string()))
            .cloned())
    }
}
