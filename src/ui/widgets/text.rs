use crate::ui::element::{Element, Frame};
use crate::ui::render::Renderer;
use crate::ui::theme;
use eframe::egui::Color32;

pub struct TextElement {
    frame: Frame,
    pub text: String,
    pub size: f32,
    pub color: Color32,
    /// Wrap width in layout pixels; `None` keeps the text on its lines
    pub wrap_width: Option<i32>,
}

impl TextElement {
    pub fn new(text: &str, size: f32) -> Self {
        let mut element = Self {
            frame: Frame::default(),
            text: text.to_string(),
            size,
            color: theme::TEXT_PRIMARY,
            wrap_width: None,
        };
        element.measure();
        element
    }

    pub fn wrapped(text: &str, size: f32, wrap_width: i32) -> Self {
        let mut element = Self::new(text, size);
        element.wrap_width = Some(wrap_width);
        element.measure();
        element
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.measure();
    }

    /// Approximate extent, used for layout next to the text
    fn measure(&mut self) {
        let char_width = self.size * 0.5;
        let longest = self.text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut width = (longest as f32 * char_width) as i32;
        let mut lines = self.text.lines().count().max(1) as i32;
        if let Some(wrap) = self.wrap_width
            && wrap > 0
            && width > wrap
        {
            lines += width / wrap;
            width = wrap;
        }
        self.frame.width = width;
        self.frame.height = (lines as f32 * self.size * 1.3) as i32;
    }
}

impl Element for TextElement {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn render(&self, r: &mut dyn Renderer, origin: (i32, i32)) {
        r.text(
            origin.0 + self.frame.x,
            origin.1 + self.frame.y,
            &self.text,
            self.size,
            self.color,
            self.wrap_width,
        );
    }
}
