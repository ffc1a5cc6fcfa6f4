//! Tests for the offline site cache
//!
//! Tests cover:
//! - Installing the allow-list from a source
//! - Cache-first fetch with source fallback and no write-back
//! - Purging stale version directories on activation
//! - Path hygiene

use std::collections::HashMap;

use farmsite::offline::{AssetSource, CacheError, DirSource, OfflineCache};
use farmsite::state::PRECACHE_PATHS;

/// In-memory source for tests.
#[derive(Default)]
struct MapSource {
    assets: HashMap<String, Vec<u8>>,
}

impl MapSource {
    fn with_full_allow_list() -> Self {
        let mut source = Self::default();
        for path in PRECACHE_PATHS {
            source
                .assets
                .insert(path.to_string(), format!("content of {}", path).into_bytes());
        }
        source
    }
}

impl AssetSource for MapSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, String> {
        self.assets
            .get(path)
            .cloned()
            .ok_or_else(|| format!("{} not in source", path))
    }
}

// ============================================
// Install Tests
// ============================================

#[test]
fn test_install_precaches_the_allow_list() {
    let dir = tempfile::tempdir().unwrap();
    let cache = OfflineCache::at(dir.path().to_path_buf(), "farm-fresh-v1");

    let report = cache.install(&MapSource::with_full_allow_list()).unwrap();

    assert_eq!(report.cached, PRECACHE_PATHS.len());
    assert_eq!(report.failed, 0);
    for path in PRECACHE_PATHS {
        assert!(cache.is_cached(path), "{} not cached", path);
    }
}

#[test]
fn test_install_tallies_individual_failures() {
    let dir = tempfile::tempdir().unwrap();
    let cache = OfflineCache::at(dir.path().to_path_buf(), "farm-fresh-v1");

    let mut source = MapSource::with_full_allow_list();
    source.assets.remove("manifest.json");

    let report = cache.install(&source).unwrap();

    assert_eq!(report.cached, PRECACHE_PATHS.len() - 1);
    assert_eq!(report.failed, 1);
    assert!(!cache.is_cached("manifest.json"));
}

#[test]
fn test_install_with_nothing_cacheable_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let cache = OfflineCache::at(dir.path().to_path_buf(), "farm-fresh-v1");

    let result = cache.install(&MapSource::default());
    assert!(matches!(result, Err(CacheError::InstallFailed)));
}

// ============================================
// Fetch Tests
// ============================================

#[test]
fn test_fetch_prefers_the_cache() {
    let dir = tempfile::tempdir().unwrap();
    let cache = OfflineCache::at(dir.path().to_path_buf(), "farm-fresh-v1");
    cache.install(&MapSource::with_full_allow_list()).unwrap();

    // A source with different bytes must not be consulted on a hit.
    let mut changed = MapSource::with_full_allow_list();
    changed
        .assets
        .insert("index.html".to_string(), b"changed upstream".to_vec());

    let bytes = cache.fetch("index.html", &changed).unwrap();
    assert_eq!(bytes, b"content of index.html");
}

#[test]
fn test_fetch_falls_back_to_the_source_without_write_back() {
    let dir = tempfile::tempdir().unwrap();
    let cache = OfflineCache::at(dir.path().to_path_buf(), "farm-fresh-v1");
    cache.install(&MapSource::with_full_allow_list()).unwrap();

    let mut source = MapSource::with_full_allow_list();
    source
        .assets
        .insert("img/cows.jpg".to_string(), b"moo".to_vec());

    let bytes = cache.fetch("img/cows.jpg", &source).unwrap();
    assert_eq!(bytes, b"moo");
    // Pass-through only: the miss is not added to the cache.
    assert!(!cache.is_cached("img/cows.jpg"));
}

#[test]
fn test_fetch_unavailable_everywhere_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let cache = OfflineCache::at(dir.path().to_path_buf(), "farm-fresh-v1");

    let result = cache.fetch("nope.html", &MapSource::default());
    assert!(matches!(result, Err(CacheError::Unavailable { .. })));
}

#[test]
fn test_fetch_rejects_escaping_paths() {
    let dir = tempfile::tempdir().unwrap();
    let cache = OfflineCache::at(dir.path().to_path_buf(), "farm-fresh-v1");

    let result = cache.fetch("../outside.html", &MapSource::default());
    assert!(matches!(result, Err(CacheError::BadPath(_))));
}

// ============================================
// Activation Tests
// ============================================

#[test]
fn test_activate_purges_only_stale_versions() {
    let dir = tempfile::tempdir().unwrap();

    let old = OfflineCache::at(dir.path().to_path_buf(), "farm-fresh-v0");
    old.install(&MapSource::with_full_allow_list()).unwrap();

    let current = OfflineCache::at(dir.path().to_path_buf(), "farm-fresh-v1");
    current.install(&MapSource::with_full_allow_list()).unwrap();

    let purged = current.activate().unwrap();

    assert_eq!(purged, 1);
    assert!(!old.root().exists());
    assert!(current.root().exists());
    assert!(current.is_cached("index.html"));
}

#[test]
fn test_activate_with_no_cache_dir_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let cache = OfflineCache::at(dir.path().join("never-created"), "farm-fresh-v1");

    assert_eq!(cache.activate().unwrap(), 0);
}

// ============================================
// Directory Source Tests
// ============================================

#[test]
fn test_dir_source_serves_a_local_bundle() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("css")).unwrap();
    std::fs::write(dir.path().join("css/style.css"), b"body{}").unwrap();

    let source = DirSource::new(dir.path().to_path_buf());
    assert_eq!(source.fetch("css/style.css").unwrap(), b"body{}");
    assert!(source.fetch("missing.css").is_err());
}
