use crate::ui::element::{Element, Frame};
use crate::ui::render::{Rect, Renderer};
use crate::ui::theme;

const BAR_HEIGHT: i32 = 9;

pub struct ProgressBar {
    frame: Frame,
    /// Filled fraction in `[0, 1]`; negative hides the bar
    pub percent: f32,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressBar {
    pub fn new() -> Self {
        Self {
            frame: Frame {
                width: 450,
                height: BAR_HEIGHT,
                ..Default::default()
            },
            percent: 0.0,
        }
    }
}

impl Element for ProgressBar {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn render(&self, r: &mut dyn Renderer, origin: (i32, i32)) {
        if self.percent < 0.0 || self.percent.is_nan() {
            return;
        }
        let track = self.frame.rect().offset(origin.0, origin.1);
        r.fill_rect(track, theme::PROGRESS_TRACK);

        let filled = (track.w as f32 * self.percent.min(1.0)) as i32;
        if filled > 0 {
            r.fill_rect(Rect { w: filled, ..track }, theme::PROGRESS_FILL);
        }
    }
}
