//! On-disk cache of package icons and banners, keyed by package name.
//!
//! `versions.json` records which package version the cached files belong to,
//! so a package whose version has not changed is not downloaded again.

use crate::error::StoreError;

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const VERSION_FILE: &str = "versions.json";

pub struct ImageCache {
    pub cache_path: PathBuf,
    pub version_cache: HashMap<String, String>,
}

impl ImageCache {
    /// Open the cache rooted at `cache_path`, reading any saved version map.
    /// A missing or unreadable map starts empty.
    pub fn new(cache_path: &Path) -> Self {
        let version_cache = match Self::read_versions(&cache_path.join(VERSION_FILE)) {
            Ok(versions) => versions,
            Err(StoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                log::warn!("Discarding image version cache: {}", e);
                HashMap::new()
            }
        };

        Self {
            cache_path: cache_path.to_path_buf(),
            version_cache,
        }
    }

    fn read_versions(path: &Path) -> Result<HashMap<String, String>, StoreError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// True if the cached files for `pkg_name` were downloaded for `version`
    pub fn is_current(&self, pkg_name: &str, version: &str) -> bool {
        self.version_cache.get(pkg_name).is_some_and(|cached| cached == version)
    }

    pub fn set_version(&mut self, pkg_name: &str, version: &str) {
        self.version_cache
            .insert(pkg_name.to_string(), version.to_string());
    }

    /// Directory holding the cached files of one package
    pub fn package_dir(&self, pkg_name: &str) -> PathBuf {
        self.cache_path.join(pkg_name)
    }

    pub fn write_version_cache(&self) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.cache_path)?;
        let file = File::create(self.cache_path.join(VERSION_FILE))?;
        serde_json::to_writer_pretty(file, &self.version_cache)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_match_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = ImageCache::new(dir.path());
        assert!(cache.version_cache.is_empty());

        cache.set_version("app", "1.2");
        assert!(cache.is_current("app", "1.2"));
        assert!(!cache.is_current("app", "1.2.1"));
        assert!(!cache.is_current("other", "1.2"));
    }

    #[test]
    fn test_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("cache");
        let mut cache = ImageCache::new(&root);
        cache.set_version("app", "3");
        cache.write_version_cache().unwrap();

        let reopened = ImageCache::new(&root);
        assert!(reopened.is_current("app", "3"));
        assert_eq!(reopened.package_dir("app"), root.join("app"));
    }

    #[test]
    fn test_corrupt_version_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(VERSION_FILE), "[1,2").unwrap();
        assert!(ImageCache::new(dir.path()).version_cache.is_empty());
    }
}
