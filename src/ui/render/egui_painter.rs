//! Renderer backed by an egui painter

use super::{Rect, Renderer, SCREEN_HEIGHT, SCREEN_WIDTH};
use eframe::egui::{self, Color32, FontId, Pos2, Stroke, StrokeKind, Ui, Vec2};
use std::path::Path;

/// Scale factor that fits the layout space inside `size`, keeping aspect
pub fn layout_scale(size: Vec2) -> f32 {
    (size.x / SCREEN_WIDTH as f32).min(size.y / SCREEN_HEIGHT as f32)
}

/// Top-left corner of the letterboxed layout area inside `area`
pub fn layout_origin(area: egui::Rect) -> Pos2 {
    let scale = layout_scale(area.size());
    let used = egui::vec2(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32) * scale;
    area.min + (area.size() - used) / 2.0
}

/// Convert a window position back into layout coordinates
pub fn to_layout(pos: Pos2, area: egui::Rect) -> (i32, i32) {
    let scale = layout_scale(area.size()).max(f32::EPSILON);
    let local = (pos - layout_origin(area)) / scale;
    (local.x.round() as i32, local.y.round() as i32)
}

pub struct EguiRenderer<'a> {
    ui: &'a Ui,
    painter: egui::Painter,
    origin: Pos2,
    scale: f32,
}

impl<'a> EguiRenderer<'a> {
    pub fn new(ui: &'a Ui) -> Self {
        let area = ui.max_rect();
        Self {
            ui,
            painter: ui.painter().clone(),
            origin: layout_origin(area),
            scale: layout_scale(area.size()),
        }
    }

    fn to_screen(&self, rect: Rect) -> egui::Rect {
        egui::Rect::from_min_size(
            self.origin + egui::vec2(rect.x as f32, rect.y as f32) * self.scale,
            egui::vec2(rect.w as f32, rect.h as f32) * self.scale,
        )
    }
}

impl Renderer for EguiRenderer<'_> {
    fn clear(&mut self, color: Color32) {
        self.painter
            .rect_filled(self.ui.ctx().screen_rect(), 0.0, color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.painter.rect_filled(self.to_screen(rect), 0.0, color);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color32) {
        self.painter.rect_stroke(
            self.to_screen(rect),
            0.0,
            Stroke::new(2.0 * self.scale, color),
            StrokeKind::Inside,
        );
    }

    fn text(&mut self, x: i32, y: i32, text: &str, size: f32, color: Color32, wrap_width: Option<i32>) {
        let font = FontId::proportional(size * self.scale);
        let galley = match wrap_width {
            Some(width) => self
                .painter
                .layout(text.to_string(), font, color, width as f32 * self.scale),
            None => self.painter.layout_no_wrap(text.to_string(), font, color),
        };
        let pos = self.origin + egui::vec2(x as f32, y as f32) * self.scale;
        self.painter.galley(pos, galley, color);
    }

    fn image(&mut self, rect: Rect, path: &Path) {
        egui::Image::new(format!("file://{}", path.display())).paint_at(self.ui, self.to_screen(rect));
    }

    fn present(&mut self) {
        // Keep frames coming so idle ticks keep polling downloads
        self.ui.ctx().request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letterboxed_round_trip() {
        let area = egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(1920.0, 1200.0));
        assert!((layout_scale(area.size()) - 1.5).abs() < 1e-6);

        // 1920x1080 used, 60pt bars above and below
        let origin = layout_origin(area);
        assert!((origin.y - 60.0).abs() < 1e-4);

        assert_eq!(to_layout(egui::pos2(600.0, 285.0), area), (400, 150));
    }
}
