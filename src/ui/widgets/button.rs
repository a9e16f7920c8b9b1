use crate::ui::context::AppContext;
use crate::ui::element::{Element, Frame};
use crate::ui::input::{Button, InputEvents};
use crate::ui::render::{Rect, Renderer};
use crate::ui::theme;
use std::path::{Path, PathBuf};

const PADDING: i32 = 10;

type Action = Box<dyn FnMut(&mut AppContext)>;

/// Pressable label bound to a controller button; also fires on touch
pub struct ButtonElement {
    frame: Frame,
    text: String,
    size: f32,
    pub button: Button,
    pub dark: bool,
    glyph: PathBuf,
    action: Option<Action>,
}

impl ButtonElement {
    pub fn new(text: &str, button: Button, dark: bool, size: f32, res_dir: &Path) -> Self {
        let glyph_size = size as i32 + 5;
        let text_width = (text.chars().count() as f32 * size * 0.5) as i32;
        Self {
            frame: Frame {
                width: PADDING * 3 + glyph_size + text_width,
                height: PADDING * 2 + glyph_size,
                ..Default::default()
            },
            text: text.to_string(),
            size,
            button,
            dark,
            glyph: res_dir.join(format!("{}.png", button.glyph())),
            action: None,
        }
    }

    pub fn on_press(mut self, action: impl FnMut(&mut AppContext) + 'static) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    fn fire(&mut self, ctx: &mut AppContext) -> bool {
        match self.action.as_mut() {
            Some(action) => {
                action(ctx);
                true
            }
            None => false,
        }
    }
}

impl Element for ButtonElement {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn process(&mut self, event: &mut InputEvents, ctx: &mut AppContext) -> bool {
        if event.is_key_down() && event.held(self.button) {
            return self.fire(ctx);
        }

        let f = &self.frame;
        if event.is_touch_up() && event.touch_in(f.x, f.y, f.width, f.height) {
            return self.fire(ctx);
        }

        false
    }

    fn render(&self, r: &mut dyn Renderer, origin: (i32, i32)) {
        let rect = self.frame.rect().offset(origin.0, origin.1);
        let (bg, fg) = if self.dark {
            (theme::BUTTON_BG, theme::TEXT_PRIMARY)
        } else {
            (theme::BUTTON_BG_LIGHT, theme::BUTTON_BG)
        };
        r.fill_rect(rect, bg);

        let glyph_size = self.size as i32 + 5;
        r.image(
            Rect::new(rect.x + PADDING, rect.y + PADDING, glyph_size, glyph_size),
            &self.glyph,
        );
        r.text(
            rect.x + PADDING * 2 + glyph_size,
            rect.y + PADDING + 2,
            &self.text,
            self.size,
            fg,
            None,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quit_button() -> ButtonElement {
        let mut button = ButtonElement::new("Quit", Button::Minus, false, 15.0, Path::new("res"))
            .on_press(|ctx| ctx.request_quit());
        button.position(1130, 630);
        button
    }

    #[test]
    fn test_bound_button_fires() {
        let mut button = quit_button();
        let mut ctx = AppContext::default();

        assert!(!button.process(&mut InputEvents::key_down(&[Button::A]), &mut ctx));
        assert!(!ctx.quit_requested());

        assert!(button.process(&mut InputEvents::key_down(&[Button::Minus]), &mut ctx));
        assert!(ctx.quit_requested());
    }

    #[test]
    fn test_touch_inside_fires() {
        let mut button = quit_button();
        let mut ctx = AppContext::default();

        assert!(!button.process(&mut InputEvents::touch_up(10, 10), &mut ctx));
        assert!(button.process(&mut InputEvents::touch_up(1140, 640), &mut ctx));
        assert!(ctx.quit_requested());
    }
}
