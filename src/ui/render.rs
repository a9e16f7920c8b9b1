//! Drawing surface used by elements.
//!
//! Elements draw in a fixed 1280x720 layout space; the surface maps that onto
//! the real window.

pub mod egui_painter;
#[cfg(test)]
pub mod recording;

pub use egui_painter::EguiRenderer;

use eframe::egui::Color32;
use std::path::Path;

pub const SCREEN_WIDTH: i32 = 1280;
pub const SCREEN_HEIGHT: i32 = 720;

/// Integer rectangle in layout space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn expand(self, by: i32) -> Self {
        Self::new(self.x - by, self.y - by, self.w + 2 * by, self.h + 2 * by)
    }
}

pub trait Renderer {
    /// Fill the whole surface
    fn clear(&mut self, color: Color32);
    fn fill_rect(&mut self, rect: Rect, color: Color32);
    fn stroke_rect(&mut self, rect: Rect, color: Color32);
    /// Draw text with its top-left corner at `(x, y)`, wrapping at
    /// `wrap_width` when given
    fn text(&mut self, x: i32, y: i32, text: &str, size: f32, color: Color32, wrap_width: Option<i32>);
    fn image(&mut self, rect: Rect, path: &Path);
    /// Hand the finished frame to the display
    fn present(&mut self);
}
