//! One tile of the app grid

use crate::repo::Package;
use crate::ui::context::AppContext;
use crate::ui::element::{Element, Frame};
use crate::ui::render::{Rect, Renderer};
use crate::ui::theme;

use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const CARD_WIDTH: i32 = 256;
pub const CARD_HEIGHT: i32 = 195;
const ICON_HEIGHT: i32 = 150;

/// Cached icon of a package if it decodes, otherwise the bundled default
pub fn resolve_icon(package_dir: &Path, res_dir: &Path) -> PathBuf {
    let cached = package_dir.join("icon.png");
    match image::image_dimensions(&cached) {
        Ok(_) => cached,
        Err(_) => res_dir.join("default.png"),
    }
}

/// Refresh the visual cache of a package: resolve its icon and have the
/// renderer drop any texture it holds for it
pub fn refresh_icon(package_dir: &Path, res_dir: &Path, ctx: &mut AppContext) -> PathBuf {
    let icon = resolve_icon(package_dir, res_dir);
    ctx.invalidate_image(&icon);
    ctx.invalidate_image(&package_dir.join("screen.png"));
    icon
}

pub struct AppCard {
    frame: Frame,
    pub package: Rc<Package>,
    package_dir: PathBuf,
    res_dir: PathBuf,
    icon: PathBuf,
}

impl AppCard {
    pub fn new(package: Rc<Package>, cache_path: &Path, res_dir: &Path) -> Self {
        let package_dir = cache_path.join(&package.pkg_name);
        let icon = resolve_icon(&package_dir, res_dir);
        Self {
            frame: Frame {
                width: CARD_WIDTH,
                height: CARD_HEIGHT,
                ..Default::default()
            },
            package,
            package_dir,
            res_dir: res_dir.to_path_buf(),
            icon,
        }
    }

    pub fn icon(&self) -> &Path {
        &self.icon
    }

    pub fn update(&mut self, ctx: &mut AppContext) {
        self.icon = refresh_icon(&self.package_dir, &self.res_dir, ctx);
    }
}

impl Element for AppCard {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn render(&self, r: &mut dyn Renderer, origin: (i32, i32)) {
        let rect = self.frame.rect().offset(origin.0, origin.1);
        r.fill_rect(rect, theme::CARD_BG);
        r.image(Rect { h: ICON_HEIGHT, ..rect }, &self.icon);

        r.text(
            rect.x + 10,
            rect.y + ICON_HEIGHT + 4,
            self.package.display_title(),
            17.0,
            theme::TEXT_PRIMARY,
            Some(CARD_WIDTH - 20),
        );
        r.text(
            rect.x + 10,
            rect.y + ICON_HEIGHT + 24,
            &self.package.author,
            14.0,
            theme::TEXT_MUTED,
            None,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render::recording::{DrawOp, RecordingRenderer};

    fn write_png(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        image::RgbImage::new(4, 4).save(path).unwrap();
    }

    #[test]
    fn test_missing_icon_uses_default() {
        let cache = tempfile::tempdir().unwrap();
        let icon = resolve_icon(&cache.path().join("pkg"), Path::new("res"));
        assert_eq!(icon, Path::new("res/default.png"));
    }

    #[test]
    fn test_undecodable_icon_uses_default() {
        let cache = tempfile::tempdir().unwrap();
        let dir = cache.path().join("pkg");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("icon.png"), b"<html>404</html>").unwrap();
        assert_eq!(resolve_icon(&dir, Path::new("res")), Path::new("res/default.png"));
    }

    #[test]
    fn test_update_picks_up_downloaded_icon() {
        let cache = tempfile::tempdir().unwrap();
        let package = Rc::new(Package::new("pkg", "1.0", "https://repo"));
        let mut card = AppCard::new(package, cache.path(), Path::new("res"));
        assert_eq!(card.icon(), Path::new("res/default.png"));

        let icon = cache.path().join("pkg/icon.png");
        write_png(&icon);

        let mut ctx = AppContext::default();
        card.update(&mut ctx);
        assert_eq!(card.icon(), icon.as_path());
        assert!(ctx.take_stale_images().contains(&icon));
    }

    #[test]
    fn test_render_shows_title_and_author() {
        let mut package = Package::new("pkg", "1.0", "https://repo");
        package.title = "Cool Game".to_string();
        package.author = "someone".to_string();
        let mut card = AppCard::new(Rc::new(package), Path::new("/nonexistent"), Path::new("res"));
        card.position(10, 20);

        let mut r = RecordingRenderer::default();
        card.render(&mut r, (0, 0));
        assert_eq!(r.ops[0], DrawOp::Fill(Rect::new(10, 20, CARD_WIDTH, CARD_HEIGHT), theme::CARD_BG));
        assert!(r.has_text("Cool Game"));
        assert!(r.has_text("someone"));
    }
}
