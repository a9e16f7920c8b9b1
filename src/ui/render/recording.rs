//! Renderer that records draw calls, for headless tests

use super::{Rect, Renderer};
use eframe::egui::Color32;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Color32),
    Fill(Rect, Color32),
    Stroke(Rect, Color32),
    Text { x: i32, y: i32, text: String },
    Image(Rect, PathBuf),
    Present,
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub ops: Vec<DrawOp>,
}

impl RecordingRenderer {
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, color: Color32) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.ops.push(DrawOp::Fill(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color32) {
        self.ops.push(DrawOp::Stroke(rect, color));
    }

    fn text(&mut self, x: i32, y: i32, text: &str, _size: f32, _color: Color32, _wrap: Option<i32>) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn image(&mut self, rect: Rect, path: &Path) {
        self.ops.push(DrawOp::Image(rect, path.to_path_buf()));
    }

    fn present(&mut self) {
        self.ops.push(DrawOp::Present);
    }
}
