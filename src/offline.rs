//! Versioned offline cache for the site bundle.
//!
//! A fixed allow-list of pages and assets is copied into a version-tagged
//! directory under the app data dir. Reads are cache-first with a source
//! fallback; activating a new version purges every older one. There is no
//! revalidation beyond the version tag.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::state::{PRECACHE_PATHS, SITE_CACHE_VERSION};

/// Cache directory name within app data
const CACHE_DIR_NAME: &str = "site_cache";

/// App data directory name
const APP_DIR_NAME: &str = "farmsite";

const USER_AGENT: &str = concat!("FarmSite/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur during cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    /// Cache directory not found
    #[error("Cache directory not available")]
    NoCacheDir,

    /// Failed to create cache directory
    #[error("Failed to create cache directory: {0}")]
    CreateDir(String),

    /// Asset path escapes the cache root
    #[error("Refusing asset path '{0}'")]
    BadPath(String),

    /// Failed to write a cached asset
    #[error("Failed to cache asset '{path}': {reason}")]
    Write { path: String, reason: String },

    /// The asset is in neither the cache nor the source
    #[error("Asset '{path}' unavailable from cache and source")]
    Unavailable { path: String },

    /// Nothing in the allow-list could be cached
    #[error("No assets could be cached")]
    InstallFailed,
}

// ============================================================================
// Asset sources
// ============================================================================

/// Where assets come from when the cache cannot serve them.
pub trait AssetSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, String>;
}

/// Serves assets from a local site bundle directory.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl AssetSource for DirSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, String> {
        let full = self.root.join(path.trim_start_matches('/'));
        fs::read(&full).map_err(|e| format!("{}: {}", full.display(), e))
    }
}

/// Serves assets from the published site over HTTP.
pub struct HttpSource {
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl AssetSource for HttpSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, String> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        let response = ureq::get(&url)
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| format!("GET {}: {}", url, e))?;

        let mut bytes = Vec::new();
        response
            .into_body()
            .into_reader()
            .read_to_end(&mut bytes)
            .map_err(|e| format!("reading {}: {}", url, e))?;
        Ok(bytes)
    }
}

// ============================================================================
// Offline cache
// ============================================================================

/// Report from one install pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrecacheReport {
    pub cached: usize,
    pub failed: usize,
}

/// The versioned cache: one directory per version tag under a common base.
pub struct OfflineCache {
    base: PathBuf,
    version: String,
}

impl OfflineCache {
    /// Open the cache at the default platform location with the current
    /// version tag.
    pub fn open() -> Result<Self, CacheError> {
        let base = dirs::data_dir()
            .map(|p| p.join(APP_DIR_NAME).join(CACHE_DIR_NAME))
            .ok_or(CacheError::NoCacheDir)?;
        Ok(Self::at(base, SITE_CACHE_VERSION))
    }

    /// Open a cache rooted at an explicit base directory. Tests use this.
    pub fn at(base: PathBuf, version: &str) -> Self {
        Self {
            base,
            version: version.to_string(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Directory holding this version's assets.
    pub fn root(&self) -> PathBuf {
        self.base.join(&self.version)
    }

    fn asset_path(&self, path: &str) -> Result<PathBuf, CacheError> {
        let trimmed = path.trim_start_matches('/');
        let escapes = Path::new(trimmed)
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir));
        if trimmed.is_empty() || escapes {
            return Err(CacheError::BadPath(path.to_string()));
        }
        Ok(self.root().join(trimmed))
    }

    pub fn is_cached(&self, path: &str) -> bool {
        self.asset_path(path).map(|p| p.exists()).unwrap_or(false)
    }

    /// Pre-cache the allow-list from the source. Individual failures are
    /// logged and tallied; an install that caches nothing at all is an
    /// error.
    pub fn install(&self, source: &dyn AssetSource) -> Result<PrecacheReport, CacheError> {
        fs::create_dir_all(self.root())
            .map_err(|e| CacheError::CreateDir(e.to_string()))?;

        let mut report = PrecacheReport::default();
        for &path in PRECACHE_PATHS {
            match self.store(path, source) {
                Ok(()) => report.cached += 1,
                Err(e) => {
                    warn!(path, error = %e, "Failed to pre-cache asset");
                    report.failed += 1;
                }
            }
        }

        if report.cached == 0 {
            return Err(CacheError::InstallFailed);
        }
        info!(
            version = %self.version,
            cached = report.cached,
            failed = report.failed,
            "Offline cache installed"
        );
        Ok(report)
    }

    fn store(&self, path: &str, source: &dyn AssetSource) -> Result<(), CacheError> {
        let bytes = source.fetch(path).map_err(|reason| CacheError::Write {
            path: path.to_string(),
            reason,
        })?;
        let target = self.asset_path(path)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| CacheError::CreateDir(e.to_string()))?;
        }
        fs::write(&target, bytes).map_err(|e| CacheError::Write {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// Serve an asset cache-first, falling back to the source. Fallback
    /// bytes are returned without being written back, mirroring the
    /// pass-through fetch of the original cache worker.
    pub fn fetch(&self, path: &str, source: &dyn AssetSource) -> Result<Vec<u8>, CacheError> {
        let target = self.asset_path(path)?;
        if target.exists() {
            match fs::read(&target) {
                Ok(bytes) => return Ok(bytes),
                Err(e) => warn!(path, error = %e, "Cached asset unreadable, trying source"),
            }
        }

        debug!(path, "Cache miss, fetching from source");
        source
            .fetch(path)
            .map_err(|_| CacheError::Unavailable {
                path: path.to_string(),
            })
    }

    /// Purge every version directory except the current one. Returns the
    /// number of purged versions.
    pub fn activate(&self) -> Result<usize, CacheError> {
        let entries = match fs::read_dir(&self.base) {
            Ok(entries) => entries,
            // Nothing installed yet, nothing to purge.
            Err(_) => return Ok(0),
        };

        let mut purged = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            if entry.file_name().to_string_lossy() == self.version.as_str() {
                continue;
            }
            match fs::remove_dir_all(&path) {
                Ok(()) => {
                    info!(stale = %path.display(), "Deleted old cache version");
                    purged += 1;
                }
                Err(e) => warn!(stale = %path.display(), error = %e, "Failed to delete old cache"),
            }
        }
        Ok(purged)
    }
}
