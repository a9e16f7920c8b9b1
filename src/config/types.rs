use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

/// Console target the store is themed and configured for
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Switch,
    WiiU,
    Pc,
}

impl Platform {
    /// Human-readable name used in troubleshooting text
    pub fn name(self) -> &'static str {
        match self {
            Platform::Switch => "Switch",
            Platform::WiiU => "Wii U",
            Platform::Pc => "Console",
        }
    }

    /// Wii U has no banner art on the repositories
    pub fn supports_banners(self) -> bool {
        self != Platform::WiiU
    }

    pub fn background(self) -> Color32 {
        match self {
            Platform::WiiU => Color32::from_rgb(0x54, 0x55, 0x6e),
            _ => Color32::from_rgb(0x42, 0x45, 0x48),
        }
    }

    pub fn default_repo_url(self) -> &'static str {
        match self {
            Platform::WiiU => "https://wiiu.cdn.fortheusers.org",
            _ => "https://switch.cdn.fortheusers.org",
        }
    }

    pub fn parse(name: &str) -> Option<Platform> {
        match name.to_ascii_lowercase().as_str() {
            "switch" => Some(Platform::Switch),
            "wiiu" | "wii-u" => Some(Platform::WiiU),
            "pc" => Some(Platform::Pc),
            _ => None,
        }
    }
}

/// Ordering of the app grid
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Repository,
    Alphabetical,
}

impl SortMode {
    pub fn next(self) -> SortMode {
        match self {
            SortMode::Repository => SortMode::Alphabetical,
            SortMode::Alphabetical => SortMode::Repository,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Repository => "by repository",
            SortMode::Alphabetical => "by name",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StoreConfig {
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub fullscreen: bool,
    /// Number of worker threads used for icon/banner prefetch
    #[serde(default = "default_max_concurrent_downloads")]
    pub max_concurrent_downloads: usize,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub default_sort: SortMode,
}

fn default_max_concurrent_downloads() -> usize {
    8
}

fn default_user_agent() -> String {
    format!("hbstore/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            platform: Platform::default(),
            fullscreen: false,
            max_concurrent_downloads: default_max_concurrent_downloads(),
            user_agent: default_user_agent(),
            default_sort: SortMode::default(),
        }
    }
}
