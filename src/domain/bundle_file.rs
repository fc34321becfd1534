//! Resolved bundle and configuration archives

use std::fmt;
use std::path::{Path, PathBuf};

/// An archive on the local filesystem, ready to be read or uploaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleFile {
    /// File name sent to the server
    pub name: String,
    /// Location on disk
    pub path: PathBuf,
}

impl BundleFile {
    /// Create a new bundle file reference
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Reference a local file, named after its final path component
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(name, path)
    }
}

impl fmt::Display for BundleFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
