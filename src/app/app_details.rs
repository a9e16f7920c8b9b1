//! Modal screen with the details of one package

use crate::repo::Package;
use crate::ui::context::AppContext;
use crate::ui::element::{Element, Frame, process_children, render_children};
use crate::ui::input::{Button, InputEvents};
use crate::ui::render::{Renderer, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::ui::theme;
use crate::ui::widgets::{ButtonElement, ImageElement, TextElement};

use std::path::Path;
use std::rc::Rc;

const LEFT: i32 = 60;

pub struct AppDetails {
    frame: Frame,
    pub package: Rc<Package>,
    elements: Vec<Box<dyn Element>>,
}

impl AppDetails {
    pub fn new(package: Rc<Package>, icon: &Path, cache_path: &Path, res_dir: &Path) -> Self {
        let mut elements: Vec<Box<dyn Element>> = Vec::new();

        let mut title = TextElement::new(package.display_title(), 35.0);
        title.position(LEFT, 40);
        elements.push(Box::new(title));

        let byline = format!("v{} by {}", package.version, package.author);
        let mut byline = TextElement::new(&byline, 20.0).with_color(theme::TEXT_MUTED);
        byline.position(LEFT, 90);
        elements.push(Box::new(byline));

        // Banner if one was cached, the card icon otherwise
        let banner = cache_path.join(&package.pkg_name).join("screen.png");
        let mut art = if banner.exists() {
            let mut art = ImageElement::new(&banner);
            art.resize(640, 360);
            art
        } else {
            let mut art = ImageElement::new(icon);
            art.resize(256, 150);
            art
        };
        art.position(LEFT, 140);
        elements.push(Box::new(art));

        let mut description = TextElement::wrapped(&package.description, 18.0, 1100);
        description.position(LEFT, 520);
        elements.push(Box::new(description));

        let mut back = ButtonElement::new("Back", Button::B, true, 20.0, res_dir)
            .on_press(|ctx| ctx.pop_subscreen());
        back.position(1100, 630);
        elements.push(Box::new(back));

        Self {
            frame: Frame {
                width: SCREEN_WIDTH,
                height: SCREEN_HEIGHT,
                ..Default::default()
            },
            package,
            elements,
        }
    }
}

impl Element for AppDetails {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn process(&mut self, event: &mut InputEvents, ctx: &mut AppContext) -> bool {
        process_children(&mut self.elements, event, ctx)
    }

    fn render(&self, r: &mut dyn Renderer, origin: (i32, i32)) {
        r.fill_rect(self.frame.rect().offset(origin.0, origin.1), theme::POPUP_BG);
        render_children(&self.elements, r, origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render::recording::{DrawOp, RecordingRenderer};

    fn package() -> Rc<Package> {
        let mut package = Package::new("pkg", "2.1", "https://repo");
        package.title = "Pkg".to_string();
        package.author = "dev".to_string();
        package.description = "Does things".to_string();
        Rc::new(package)
    }

    #[test]
    fn test_back_pops_subscreen() {
        let cache = tempfile::tempdir().unwrap();
        let mut ctx = AppContext::default();
        ctx.push_subscreen(Box::new(TextElement::new("placeholder", 10.0)));

        let mut details = AppDetails::new(package(), Path::new("res/default.png"), cache.path(), Path::new("res"));
        assert!(!details.process(&mut InputEvents::key_down(&[Button::A]), &mut ctx));
        assert!(ctx.has_subscreen());

        assert!(details.process(&mut InputEvents::key_down(&[Button::B]), &mut ctx));
        assert!(!ctx.has_subscreen());
    }

    #[test]
    fn test_banner_preferred_when_cached() {
        let cache = tempfile::tempdir().unwrap();
        let banner = cache.path().join("pkg/screen.png");
        std::fs::create_dir_all(banner.parent().unwrap()).unwrap();
        std::fs::write(&banner, b"png").unwrap();

        let details = AppDetails::new(package(), Path::new("res/default.png"), cache.path(), Path::new("res"));
        let mut r = RecordingRenderer::default();
        details.render(&mut r, (0, 0));

        assert!(r.ops.iter().any(|op| matches!(op, DrawOp::Image(_, p) if *p == banner)));
        assert!(r.has_text("v2.1 by dev"));
        assert!(r.has_text("Does things"));
    }
}
