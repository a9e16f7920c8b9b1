mod app;
mod config;
mod download;
mod error;
mod image_cache;
mod input;
mod paths;
mod repo;
mod ui;
mod util;

use crate::app::{DisplaySettings, MainDisplay, StoreApp};
use crate::config::{Platform, load_cfg, save_cfg};
use crate::download::{Fetch, HttpFetcher};
use crate::image_cache::ImageCache;
use crate::input::scan_gamepads;
use crate::paths::{PATH_CACHE, PATH_RES, PATH_STORE};
use crate::repo::load_get;
use crate::util::mkpath;

use std::sync::Arc;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    if let Err(e) = mkpath(&PATH_CACHE) {
        log::error!("Failed to create {}: {}", PATH_CACHE.display(), e);
    }

    let first_run = !PATH_STORE.join("settings.json").exists();
    let mut cfg = load_cfg();
    if first_run && let Err(e) = save_cfg(&cfg) {
        log::warn!("Failed to write default settings: {}", e);
    }

    if args.iter().any(|arg| arg == "--fullscreen") {
        cfg.fullscreen = true;
    }
    if let Some(index) = args.iter().position(|arg| arg == "--platform") {
        match args.get(index + 1).and_then(|name| Platform::parse(name)) {
            Some(platform) => cfg.platform = platform,
            None => {
                eprintln!("{}", USAGE_TEXT);
                std::process::exit(1);
            }
        }
    }

    if !PATH_RES.exists() {
        log::warn!("Resource directory {} not found, images will be missing", PATH_RES.display());
    }

    log::info!("Loading repositories for {}", cfg.platform.name());
    let fetcher: Arc<dyn Fetch> = Arc::new(HttpFetcher::new(&cfg.user_agent));
    let get = load_get(&PATH_STORE, cfg.platform, fetcher.as_ref());
    let image_cache = ImageCache::new(&PATH_CACHE);

    let input_devices = scan_gamepads();
    if input_devices.is_empty() {
        log::warn!("No gamepads found, using keyboard and mouse only");
    }

    let settings = DisplaySettings {
        platform: cfg.platform,
        res_dir: PATH_RES.clone(),
        max_concurrent_downloads: cfg.max_concurrent_downloads,
        default_sort: cfg.default_sort,
    };

    let mut viewport = eframe::egui::ViewportBuilder::default()
        .with_title("Homebrew App Store")
        .with_inner_size([1280.0, 720.0])
        .with_min_inner_size([640.0, 360.0])
        .with_fullscreen(cfg.fullscreen);
    match std::fs::read(PATH_RES.join("icon.png")).map(|bytes| eframe::icon_data::from_png_bytes(&bytes)) {
        Ok(Ok(icon)) => viewport = viewport.with_icon(icon),
        Ok(Err(e)) => log::warn!("Failed to decode window icon: {}", e),
        Err(e) => log::warn!("Failed to read window icon: {}", e),
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    log::info!("Starting eframe app...");

    let result = eframe::run_native(
        "hbstore",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let display = MainDisplay::new(get, image_cache, fetcher, settings);
            Ok(Box::new(StoreApp::new(display, input_devices)))
        }),
    );

    if let Err(e) = &result {
        log::error!("Window failed: {}", e);
    }
    result
}

static USAGE_TEXT: &str = r#"
Usage: hbstore [OPTIONS]

Options:
    --fullscreen              Start in fullscreen mode
    --platform <PLATFORM>     Theme and repository defaults: switch, wiiu or pc
    --help                    Show this help
"#;
