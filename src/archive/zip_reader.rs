//! Zip archive reader
//!
//! Reads entries from bundle archives on disk with the `zip` crate.

use crate::archive::traits::{entry_matches, ArchiveReader};
use crate::domain::BundleFile;
use crate::error::BundleError;

use std::fs::File;
use std::io::Read;
use zip::ZipArchive;

/// Upper bound on the buffer reserved from an entry's declared size
const MAX_PREALLOCATION: u64 = 1024 * 1024;

/// Reads entries from zip files on the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipArchiveReader;

impl ZipArchiveReader {
    /// Create a new reader
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveReader for ZipArchiveReader {
    fn read_entry(&self, archive: &BundleFile, name: &str) -> Result<Option<Vec<u8>>, BundleError> {
        let path = archive.path.display().to_string();
        let io_error = |source| BundleError::Io {
            path: path.clone(),
            source,
        };
        let zip_error = |source| BundleError::BadZip {
            path: path.clone(),
            source,
        };

        let file = File::open(&archive.path).map_err(io_error)?;
        let mut zip = ZipArchive::new(file).map_err(zip_error)?;

        for i in 0..zip.len() {
            let mut entry = zip.by_index(i).map_err(zip_error)?;
            if !entry.is_file() || !entry_matches(entry.name(), name) {
                continue;
            }

            log::debug!("Reading {} from {}", entry.name(), path);
            let mut bytes = Vec::with_capacity(initial_capacity(entry.size()));
            entry.read_to_end(&mut bytes).map_err(io_error)?;
            return Ok(Some(bytes));
        }

        log::debug!("No {} entry in {}", name, path);
        Ok(None)
    }
}

/// Buffer capacity for an entry, capped whatever size it declares
fn initial_capacity(declared_size: u64) -> usize {
    declared_size.min(MAX_PREALLOCATION) as usize
}
