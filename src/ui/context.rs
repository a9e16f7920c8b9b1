//! Application-wide state shared with every element during `process`

use super::element::Element;
use std::path::{Path, PathBuf};

/// Owned by the root display and passed down by `&mut`.
///
/// Holds the single modal subscreen slot: while a subscreen is set it alone
/// receives input and is drawn in place of the normal tree.
#[derive(Default)]
pub struct AppContext {
    subscreen: Option<Box<dyn Element>>,
    pop_requested: bool,
    pub needs_redraw: bool,
    quit_requested: bool,
    stale_images: Vec<PathBuf>,
}

impl AppContext {
    /// Show `screen` modally. Replaces any subscreen already shown.
    pub fn push_subscreen(&mut self, screen: Box<dyn Element>) {
        if self.subscreen.is_some() {
            log::warn!("Replacing the active subscreen");
        }
        self.subscreen = Some(screen);
        self.pop_requested = false;
        self.needs_redraw = true;
    }

    /// Close the current subscreen. Safe to call from the subscreen's own
    /// `process`.
    pub fn pop_subscreen(&mut self) {
        self.subscreen = None;
        self.pop_requested = true;
        self.needs_redraw = true;
    }

    pub fn has_subscreen(&self) -> bool {
        self.subscreen.is_some()
    }

    pub fn subscreen(&self) -> Option<&dyn Element> {
        self.subscreen.as_deref()
    }

    /// Take the subscreen out of its slot while it processes input
    pub(crate) fn take_subscreen(&mut self) -> Option<Box<dyn Element>> {
        self.pop_requested = false;
        self.subscreen.take()
    }

    /// Put a taken subscreen back, unless it was popped or replaced meanwhile
    pub(crate) fn restore_subscreen(&mut self, screen: Box<dyn Element>) {
        if self.pop_requested {
            self.pop_requested = false;
            return;
        }
        if self.subscreen.is_none() {
            self.subscreen = Some(screen);
        }
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Mark an image file as changed on disk so the renderer reloads it
    pub fn invalidate_image(&mut self, path: &Path) {
        if !self.stale_images.iter().any(|p| p == path) {
            self.stale_images.push(path.to_path_buf());
        }
    }

    pub fn take_stale_images(&mut self) -> Vec<PathBuf> {
        std::mem::take(&mut self.stale_images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::TextElement;

    fn screen() -> Box<dyn Element> {
        Box::new(TextElement::new("modal", 20.0))
    }

    #[test]
    fn test_pop_while_taken_drops_screen() {
        let mut ctx = AppContext::default();
        ctx.push_subscreen(screen());

        let taken = ctx.take_subscreen().unwrap();
        ctx.pop_subscreen();
        ctx.restore_subscreen(taken);
        assert!(!ctx.has_subscreen());
    }

    #[test]
    fn test_restore_keeps_replacement() {
        let mut ctx = AppContext::default();
        ctx.push_subscreen(screen());

        let taken = ctx.take_subscreen().unwrap();
        ctx.push_subscreen(Box::new(TextElement::new("other", 20.0)));
        ctx.restore_subscreen(taken);
        assert!(ctx.has_subscreen());
    }

    #[test]
    fn test_stale_images_deduplicated() {
        let mut ctx = AppContext::default();
        ctx.invalidate_image(Path::new("/c/a/icon.png"));
        ctx.invalidate_image(Path::new("/c/a/icon.png"));
        assert_eq!(ctx.take_stale_images().len(), 1);
        assert!(ctx.take_stale_images().is_empty());
    }
}
