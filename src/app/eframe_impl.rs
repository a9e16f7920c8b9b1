//! eframe::App implementation for the store

use crate::app::main_display::MainDisplay;
use crate::input::InputDevice;
use crate::ui::focus::pure::map_pad_button;
use crate::ui::input::{Button, InputEvents};
use crate::ui::render::EguiRenderer;
use crate::ui::render::egui_painter::to_layout;
use eframe::egui::{self, Key, PointerButton};

pub struct StoreApp {
    display: MainDisplay,
    input_devices: Vec<InputDevice>,
    /// Events collected by the input hook, consumed by the next update
    pending: Vec<InputEvents>,
    /// Last pointer y while the primary button is down
    touch_y: Option<i32>,
}

impl StoreApp {
    pub fn new(display: MainDisplay, input_devices: Vec<InputDevice>) -> Self {
        Self {
            display,
            input_devices,
            pending: Vec::new(),
            touch_y: None,
        }
    }

    fn poll_gamepads(&mut self) {
        for pad in self.input_devices.iter_mut() {
            for btn in pad.poll() {
                if let Some(button) = map_pad_button(btn) {
                    self.pending.push(InputEvents::key_down(&[button]));
                }
            }
        }
    }

    fn translate(&mut self, event: &egui::Event, area: egui::Rect) {
        match event {
            egui::Event::Key { key, pressed, .. } => {
                let Some(button) = map_key(*key) else {
                    return;
                };
                self.pending.push(if *pressed {
                    InputEvents::key_down(&[button])
                } else {
                    InputEvents::key_up(&[button])
                });
            }
            egui::Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                ..
            } => {
                let (x, y) = to_layout(*pos, area);
                if *pressed {
                    self.touch_y = Some(y);
                    self.pending.push(InputEvents::touch_down(x, y));
                } else {
                    self.touch_y = None;
                    self.pending.push(InputEvents::touch_up(x, y));
                }
            }
            egui::Event::PointerMoved(pos) => {
                if let Some(last_y) = self.touch_y {
                    let (x, y) = to_layout(*pos, area);
                    self.touch_y = Some(y);
                    self.pending.push(InputEvents::touch_motion(x, y, y - last_y));
                }
            }
            _ => {}
        }
    }
}

/// Keyboard stand-ins for the console buttons
fn map_key(key: Key) -> Option<Button> {
    match key {
        Key::ArrowUp => Some(Button::Up),
        Key::ArrowDown => Some(Button::Down),
        Key::ArrowLeft => Some(Button::Left),
        Key::ArrowRight => Some(Button::Right),
        Key::Enter | Key::Space => Some(Button::A),
        Key::Escape | Key::Backspace => Some(Button::B),
        Key::X => Some(Button::X),
        Key::Y => Some(Button::Y),
        Key::Q => Some(Button::L),
        Key::E => Some(Button::R),
        Key::Plus | Key::Equals => Some(Button::Plus),
        Key::Minus => Some(Button::Minus),
        _ => None,
    }
}

impl eframe::App for StoreApp {
    fn raw_input_hook(&mut self, ctx: &egui::Context, raw_input: &mut egui::RawInput) {
        self.poll_gamepads();

        if !raw_input.focused {
            return;
        }
        let area = ctx.screen_rect();
        for event in &raw_input.events {
            self.translate(event, area);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = std::mem::take(&mut self.pending);
        if events.is_empty() {
            events.push(InputEvents::noop());
        }
        for mut event in events {
            self.display.process(&mut event);
        }

        let app_ctx = self.display.context_mut();
        for path in app_ctx.take_stale_images() {
            ctx.forget_image(&format!("file://{}", path.display()));
        }
        if app_ctx.quit_requested() {
            log::info!("Quit requested");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        app_ctx.needs_redraw = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let mut renderer = EguiRenderer::new(ui);
                self.display.render(&mut renderer);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_mapping() {
        assert_eq!(map_key(Key::Enter), Some(Button::A));
        assert_eq!(map_key(Key::Escape), Some(Button::B));
        assert_eq!(map_key(Key::Minus), Some(Button::Minus));
        assert_eq!(map_key(Key::Q), Some(Button::L));
        assert_eq!(map_key(Key::F1), None);
    }
}
