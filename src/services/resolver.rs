//! Bundle resolution
//!
//! Turns the bundle and configuration arguments of `conduct load` into
//! archives on the local filesystem, downloading remote ones into a cache.

use crate::domain::BundleFile;
use crate::error::ResolveError;

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Resolves bundle arguments to local archives
pub struct BundleResolver {
    cache_dir: PathBuf,
}

impl BundleResolver {
    /// Create a resolver caching downloads in `cache_dir`
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// Resolve a local path or an http(s) URL to a local archive
    pub fn resolve(&self, uri: &str) -> Result<BundleFile, ResolveError> {
        let local = Path::new(uri);
        if local.is_file() {
            log::debug!("Resolved {} to a local file", uri);
            return Ok(BundleFile::from_path(local));
        }

        if uri.starts_with("http://") || uri.starts_with("https://") {
            return self.resolve_url(uri);
        }

        Err(ResolveError::NotFound(uri.to_string()))
    }

    fn resolve_url(&self, url: &str) -> Result<BundleFile, ResolveError> {
        let name = url_file_name(url).ok_or_else(|| ResolveError::NotFound(url.to_string()))?;
        let cached = self.cache_dir.join(name);

        if cached.is_file() {
            log::info!("Using cached {}", cached.display());
            return Ok(BundleFile::new(name, cached));
        }

        let cache_error = |source| ResolveError::Cache {
            path: self.cache_dir.display().to_string(),
            source,
        };
        fs::create_dir_all(&self.cache_dir).map_err(cache_error)?;

        log::info!("Downloading {}", url);
        let download_error = |message: String| ResolveError::Download {
            uri: url.to_string(),
            message,
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(DOWNLOAD_TIMEOUT)
            .build()
            .map_err(|e| download_error(e.to_string()))?;
        let mut response = client
            .get(url)
            .send()
            .map_err(|e| download_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(download_error(format!("server responded {}", response.status())));
        }

        // Partial downloads never appear under the cached name
        let partial = self.cache_dir.join(format!("{name}.part"));
        let mut file = File::create(&partial).map_err(cache_error)?;
        let copied = response.copy_to(&mut file);
        drop(file);

        if let Err(e) = copied {
            let _ = fs::remove_file(&partial);
            return Err(download_error(e.to_string()));
        }

        fs::rename(&partial, &cached).map_err(cache_error)?;
        log::debug!("Cached {} as {}", url, cached.display());

        Ok(BundleFile::new(name, cached))
    }
}

/// Default cache directory for downloaded bundles
pub fn default_cache_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".conductr")
        .join("cache")
}

/// Last path segment of a URL, ignoring query and fragment
fn url_file_name(url: &str) -> Option<&str> {
    let without_suffix = url.split(['?', '#']).next().unwrap_or(url);
    let (_, path) = without_suffix.split_once("://")?;
    let (_, path) = path.split_once('/')?;
    path.rsplit('/').next().filter(|segment| !segment.is_empty())
}
