use crate::config::types::StoreConfig;
use crate::paths::PATH_STORE;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load_cfg() -> StoreConfig {
    load_cfg_from(&PATH_STORE.join("settings.json"))
}

pub fn load_cfg_from(path: &Path) -> StoreConfig {
    if let Ok(file) = File::open(path) {
        match serde_json::from_reader::<_, StoreConfig>(BufReader::new(file)) {
            Ok(mut config) => {
                if config.max_concurrent_downloads == 0 {
                    config.max_concurrent_downloads = 1;
                }
                return config;
            }
            Err(e) => log::warn!("Ignoring unreadable {}: {}", path.display(), e),
        }
    }

    // Return default settings if file doesn't exist or has error
    StoreConfig::default()
}

pub fn save_cfg(config: &StoreConfig) -> Result<(), Box<dyn Error>> {
    save_cfg_to(config, &PATH_STORE.join("settings.json"))
}

pub fn save_cfg_to(config: &StoreConfig, path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{Platform, SortMode};

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_cfg_from(&dir.path().join("settings.json"));
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.max_concurrent_downloads, 8);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "platform": "WiiU", "max_concurrent_downloads": 0 }"#).unwrap();

        let config = load_cfg_from(&path);
        assert_eq!(config.platform, Platform::WiiU);
        assert_eq!(config.max_concurrent_downloads, 1);
        assert_eq!(config.default_sort, SortMode::Repository);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let config = StoreConfig {
            fullscreen: true,
            default_sort: SortMode::Alphabetical,
            ..Default::default()
        };
        save_cfg_to(&config, &path).unwrap();
        assert_eq!(load_cfg_from(&path), config);
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_cfg_from(&path), StoreConfig::default());
    }
}
