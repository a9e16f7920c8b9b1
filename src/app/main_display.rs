//! Root of the element tree: connectivity error screen, splash with icon
//! prefetch, then the store page.

use crate::app::app_card::refresh_icon;
use crate::app::storefront::Storefront;
use crate::config::{Platform, SortMode};
use crate::download::{DownloadOperation, DownloadQueue, DownloadStatus, Fetch};
use crate::image_cache::ImageCache;
use crate::repo::{Get, Package};
use crate::ui::context::AppContext;
use crate::ui::element::{Element, process_children, render_children};
use crate::ui::input::{Button, InputEvents};
use crate::ui::render::Renderer;
use crate::ui::widgets::{ButtonElement, ImageElement, ProgressBar, TextElement};
use crate::util::{cp, mkpath};

use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// No usable repository; only Quit works
    Error,
    /// Prefetching icons and banners
    Splashing,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Icon,
    Banner,
}

impl AssetKind {
    pub fn file_name(self) -> &'static str {
        match self {
            AssetKind::Icon => "icon.png",
            AssetKind::Banner => "screen.png",
        }
    }
}

/// Payload of an icon/banner download
#[derive(Debug)]
pub struct AssetRequest {
    pub package: Rc<Package>,
    pub kind: AssetKind,
}

#[derive(Debug, Clone)]
pub struct DisplaySettings {
    pub platform: Platform,
    /// Bundled images (logo, default icon, category icons, button glyphs)
    pub res_dir: PathBuf,
    pub max_concurrent_downloads: usize,
    pub default_sort: SortMode,
}

pub struct MainDisplay {
    state: DisplayState,
    get: Get,
    image_cache: ImageCache,
    settings: DisplaySettings,
    queue: Option<DownloadQueue<AssetRequest>>,
    pbar: ProgressBar,
    notice: Option<TextElement>,
    elements: Vec<Box<dyn Element>>,
    total_downloads: usize,
    complete_downloads: usize,
    ctx: AppContext,
}

impl MainDisplay {
    pub fn new(get: Get, image_cache: ImageCache, fetcher: Arc<dyn Fetch>, settings: DisplaySettings) -> Self {
        let any_enabled = get.any_enabled();
        let error = !get.all_loaded() || !any_enabled;

        let mut display = Self {
            state: if error {
                DisplayState::Error
            } else {
                DisplayState::Splashing
            },
            get,
            image_cache,
            settings,
            queue: None,
            pbar: ProgressBar::new(),
            notice: None,
            elements: Vec::new(),
            total_downloads: 0,
            complete_downloads: 0,
            ctx: AppContext::default(),
        };

        display.build_header(error);

        if error {
            display.build_error(any_enabled);
            return display;
        }

        if display.image_cache.version_cache.is_empty() {
            let mut notice = TextElement::new("Still doing initial load-- next time will be faster!", 20.0);
            notice.position(410, 460);
            notice.set_hidden(true);
            display.notice = Some(notice);
        }

        display.seed_downloads(fetcher);
        display
    }

    /// Logo and title: large and centred on the splash, small and at the
    /// top on the error screen
    fn build_header(&mut self, error: bool) {
        let e = error as i32;

        self.pbar.position(401, 380 - e * 290);

        let mut icon = ImageElement::new(self.settings.res_dir.join("icon.png"));
        icon.position(330 + e * 140, 255 - e * 230);
        icon.resize(70 - e * 35, 70 - e * 35);
        self.elements.push(Box::new(icon));

        let mut title = TextElement::new("Homebrew App Store", (50 - e * 25) as f32);
        title.position(415 + e * 100, 255 - e * 230);
        self.elements.push(Box::new(title));
    }

    fn build_error(&mut self, any_enabled: bool) {
        let troubleshooting = match self.get.repos.first() {
            Some(repo) if any_enabled => format!(
                "Perform a connection test in the {} System Settings\nEnsure DNS isn't blocking: {}",
                self.settings.platform.name(),
                repo.url
            ),
            _ => "No enabled repos found, check ./get/repos.json\nMake sure repo has at least one package".to_string(),
        };
        log::error!("No usable repository: {}", troubleshooting.replace('\n', "; "));

        self.pbar.percent = -1.0;

        let mut headline = TextElement::new("Couldn't connect to the Internet!", 40.0);
        headline.position(345, 305);
        self.elements.push(Box::new(headline));

        let mut help = TextElement::wrapped(&format!("Troubleshooting:\n{troubleshooting}"), 20.0, 600);
        help.position(380, 585);
        self.elements.push(Box::new(help));

        let mut quit = ButtonElement::new("Quit", Button::Minus, false, 15.0, &self.settings.res_dir)
            .on_press(|ctx| ctx.request_quit());
        quit.position(1130, 630);
        self.elements.push(Box::new(quit));
    }

    /// Queue icon (and banner) downloads for every package whose cached
    /// assets are missing or belong to another version
    fn seed_downloads(&mut self, fetcher: Arc<dyn Fetch>) {
        let mut operations = Vec::new();

        for package in &self.get.packages {
            if self.image_cache.is_current(&package.pkg_name, &package.version) {
                let dir = self.image_cache.package_dir(&package.pkg_name);
                refresh_icon(&dir, &self.settings.res_dir, &mut self.ctx);
                continue;
            }

            let mut kinds = vec![AssetKind::Icon];
            if self.settings.platform.supports_banners() {
                kinds.push(AssetKind::Banner);
            }
            for kind in kinds {
                let request = AssetRequest {
                    package: Rc::clone(package),
                    kind,
                };
                operations.push(DownloadOperation::new(package.asset_url(kind.file_name()), request));
            }
        }

        self.total_downloads = operations.len();
        if operations.is_empty() {
            return;
        }

        log::info!(
            "Fetching {} images for {} packages",
            operations.len(),
            self.get.packages.len()
        );
        let mut queue = DownloadQueue::new(fetcher, self.settings.max_concurrent_downloads);
        for operation in operations {
            queue.download_add(operation);
        }
        self.queue = Some(queue);
    }

    /// Handle one event (or idle tick). Returns true if it was consumed.
    pub fn process(&mut self, event: &mut InputEvents) -> bool {
        if self.state == DisplayState::Splashing && event.noop {
            self.splash_tick();
            return true;
        }

        if let Some(mut screen) = self.ctx.take_subscreen() {
            let consumed = screen.process(event, &mut self.ctx);
            self.ctx.restore_subscreen(screen);
            return consumed;
        }

        process_children(&mut self.elements, event, &mut self.ctx)
    }

    fn splash_tick(&mut self) {
        if self.get.packages.is_empty() {
            self.pbar.percent = -1.0;
            self.enter_running();
            return;
        }

        let Self {
            queue,
            image_cache,
            settings,
            ctx,
            complete_downloads,
            ..
        } = self;

        let progressed = match queue.as_mut() {
            Some(queue) => queue.process(|operation| {
                asset_complete(operation, image_cache, &settings.res_dir, ctx);
                *complete_downloads += 1;
            }),
            None => false,
        };

        if progressed && self.complete_downloads < self.total_downloads {
            self.pbar.percent = self.complete_downloads as f32 / self.total_downloads as f32;
            if let Some(notice) = self.notice.as_mut()
                && self.pbar.percent > 0.5
            {
                notice.set_hidden(false);
            }
            return;
        }

        if let Err(e) = self.image_cache.write_version_cache() {
            log::warn!("Failed to write image version cache: {}", e);
        }
        self.queue = None;
        self.enter_running();
    }

    /// Swap the splash for the store page
    fn enter_running(&mut self) {
        self.elements.clear();
        self.notice = None;

        let store = Storefront::new(
            self.get.packages.clone(),
            self.settings.default_sort,
            &self.image_cache.cache_path,
            &self.settings.res_dir,
        );
        self.elements.push(Box::new(store));

        log::info!(
            "Store ready: {} packages, {}/{} images fetched",
            self.get.packages.len(),
            self.complete_downloads,
            self.total_downloads
        );
        self.state = DisplayState::Running;
        self.ctx.needs_redraw = true;
    }

    pub fn render(&self, r: &mut dyn Renderer) {
        r.clear(self.settings.platform.background());

        if let Some(screen) = self.ctx.subscreen() {
            screen.render(r, (0, 0));
            r.present();
            return;
        }

        if self.state != DisplayState::Running {
            self.pbar.render(r, (0, 0));
        }
        render_children(&self.elements, r, (0, 0));
        if let Some(notice) = self.notice.as_ref().filter(|n| !n.is_hidden()) {
            notice.render(r, (0, 0));
        }

        r.present();
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn progress(&self) -> f32 {
        self.pbar.percent
    }

    pub fn total_downloads(&self) -> usize {
        self.total_downloads
    }

    pub fn complete_downloads(&self) -> usize {
        self.complete_downloads
    }

    pub fn notice_visible(&self) -> bool {
        self.notice.as_ref().is_some_and(|n| !n.is_hidden())
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut AppContext {
        &mut self.ctx
    }
}

/// Store one finished download in the image cache. A failed icon is
/// replaced by the bundled default; a failed banner leaves nothing behind.
fn asset_complete(
    operation: DownloadOperation<AssetRequest>,
    image_cache: &mut ImageCache,
    res_dir: &Path,
    ctx: &mut AppContext,
) {
    let AssetRequest { package, kind } = &operation.data;
    let dir = image_cache.package_dir(&package.pkg_name);
    if let Err(e) = mkpath(&dir) {
        log::warn!("Failed to create {}: {}", dir.display(), e);
    }
    let dest = dir.join(kind.file_name());

    match operation.status {
        DownloadStatus::Complete => match std::fs::write(&dest, &operation.buffer) {
            Ok(()) => image_cache.set_version(&package.pkg_name, &package.version),
            Err(e) => log::warn!("Failed to write {}: {}", dest.display(), e),
        },
        DownloadStatus::Failed if *kind == AssetKind::Icon => {
            if let Err(e) = cp(&res_dir.join("default.png"), &dest) {
                log::warn!("Failed to install default icon for {}: {}", package.pkg_name, e);
            }
        }
        _ => {}
    }

    refresh_icon(&dir, res_dir, ctx);
}
