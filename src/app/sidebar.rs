//! Category navigator on the left of the store page

use crate::ui::element::{Element, Frame, render_children};
use crate::ui::focus::Focus;
use crate::ui::focus::pure::apply_index_delta;
use crate::ui::input::{Button, InputEvents};
use crate::ui::render::{Rect, Renderer};
use crate::ui::theme;
use crate::ui::widgets::{ImageElement, TextElement};

use std::path::Path;

pub const TOTAL_CATS: usize = 8;

pub const CAT_NAMES: [&str; TOTAL_CATS] = [
    "All Apps",
    "Games",
    "Emulators",
    "Tools",
    "Advanced",
    "Themes",
    "Legacy",
    "Misc",
];

/// Category keys as used in repository indexes; `_all` matches everything
pub const CAT_VALUES: [&str; TOTAL_CATS] = [
    "_all", "game", "emu", "tool", "advanced", "theme", "legacy", "misc",
];

const BAND_WIDTH: i32 = 400;
const BAND_HEIGHT: i32 = 60;

/// Top of category `i`'s label row
fn category_y(i: usize) -> i32 {
    150 + i as i32 * 70
}

/// Selection/hit band of category `i`
pub fn category_band(i: usize) -> Rect {
    Rect::new(0, category_y(i) - 15, BAND_WIDTH, BAND_HEIGHT)
}

/// What the sidebar did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    Ignored,
    Consumed,
    /// Focus was handed to the app list
    HandOff,
    /// A category was committed
    Select(usize),
}

pub struct Sidebar {
    frame: Frame,
    elements: Vec<Box<dyn Element>>,
    cur_category: usize,
    dragging: bool,
}

impl Sidebar {
    pub fn new(res_dir: &Path) -> Self {
        let mut elements: Vec<Box<dyn Element>> = Vec::new();

        let mut logo = ImageElement::new(res_dir.join("icon.png"));
        logo.resize(40, 40);
        logo.position(30, 50);
        elements.push(Box::new(logo));

        let mut title = TextElement::new("Homebrew App Store", 22.0);
        title.position(105, 45);
        elements.push(Box::new(title));

        let mut subtitle = TextElement::new("GPLv3 License", 18.0);
        subtitle.position(105, 75);
        elements.push(Box::new(subtitle));

        for (i, (name, value)) in CAT_NAMES.iter().zip(CAT_VALUES).enumerate() {
            let mut icon = ImageElement::new(res_dir.join(format!("{value}.png")));
            icon.resize(40, 40);
            icon.position(30, category_y(i) - 5);
            elements.push(Box::new(icon));

            let mut category = TextElement::new(name, 25.0);
            category.position(105, category_y(i));
            elements.push(Box::new(category));
        }

        // L hides the sidebar
        let mut hider = ImageElement::new(res_dir.join(format!("{}.png", Button::L.glyph())));
        hider.resize(20, 20);
        hider.position(270, 685);
        let hint_x = hider.frame().x + hider.frame().width + 5;
        elements.push(Box::new(hider));

        let mut hint = TextElement::new("Hide", 15.0);
        hint.position(hint_x, 685);
        elements.push(Box::new(hint));

        Self {
            frame: Frame {
                width: BAND_WIDTH,
                height: 720,
                ..Default::default()
            },
            elements,
            cur_category: 0,
            dragging: false,
        }
    }

    pub fn cur_category(&self) -> usize {
        self.cur_category
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn current_cat_name(&self) -> &'static str {
        CAT_NAMES.get(self.cur_category).copied().unwrap_or("?")
    }

    pub fn current_cat_value(&self) -> &'static str {
        CAT_VALUES.get(self.cur_category).copied().unwrap_or("?")
    }

    /// Handle one event. The highlight lives in `focus`; the sidebar never
    /// takes focus on its own, the app list hands it over.
    pub fn process(&mut self, event: &mut InputEvents, focus: &mut Focus) -> SidebarAction {
        if event.is_key_down() {
            let Some(highlighted) = focus.sidebar() else {
                return SidebarAction::Ignored;
            };

            if event.held(Button::Right) {
                *focus = Focus::AppList(0);
                event.acknowledge();
                return SidebarAction::HandOff;
            }

            let delta = event.held(Button::Down) as i32 - event.held(Button::Up) as i32;
            *focus = Focus::Sidebar(apply_index_delta(highlighted, delta, TOTAL_CATS));
        }

        if event.is_touch_down() {
            self.dragging = true;
            *focus = Focus::None;
            return SidebarAction::Consumed;
        }

        let touch_commit = event.is_touch_up() && self.dragging;
        let button_commit = event.is_key_down() && event.held(Button::A);
        if touch_commit || button_commit {
            self.dragging = false;
            let highlighted = focus.sidebar();

            let mut selected = None;
            for i in 0..TOTAL_CATS {
                let band = category_band(i);
                let touched = touch_commit && event.touch_in(band.x, band.y, band.w, band.h);
                if touched || (button_commit && highlighted == Some(i)) {
                    self.cur_category = i;
                    selected = Some(i);
                }
            }

            return match selected {
                Some(i) => SidebarAction::Select(i),
                None => SidebarAction::Consumed,
            };
        }

        SidebarAction::Ignored
    }

    /// Selected band filled, focused band outlined, then the labels
    pub fn render(&self, r: &mut dyn Renderer, origin: (i32, i32), focus: Focus) {
        if self.frame.hidden {
            return;
        }
        let origin = (origin.0 + self.frame.x, origin.1 + self.frame.y);

        r.fill_rect(
            category_band(self.cur_category).offset(origin.0, origin.1),
            theme::SELECTION_BG,
        );

        if let Some(highlighted) = focus.sidebar() {
            r.stroke_rect(
                category_band(highlighted).offset(origin.0, origin.1),
                theme::FOCUS_STROKE,
            );
        }

        render_children(&self.elements, r, origin);
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render::recording::{DrawOp, RecordingRenderer};

    fn sidebar() -> Sidebar {
        Sidebar::new(Path::new("res"))
    }

    fn key(button: Button) -> InputEvents {
        InputEvents::key_down(&[button])
    }

    #[test]
    fn test_touch_commit_selects_every_band() {
        for i in 0..TOTAL_CATS {
            let mut sidebar = sidebar();
            let mut focus = Focus::None;
            let band = category_band(i);

            assert_eq!(
                sidebar.process(&mut InputEvents::touch_down(band.x + 10, band.y + 10), &mut focus),
                SidebarAction::Consumed
            );
            let mut up = InputEvents::touch_up(band.x + band.w / 2, band.y + band.h / 2);
            assert_eq!(sidebar.process(&mut up, &mut focus), SidebarAction::Select(i));
            assert_eq!(sidebar.cur_category(), i);
        }
    }

    #[test]
    fn test_touch_up_without_drag_is_ignored() {
        let mut sidebar = sidebar();
        let mut focus = Focus::None;
        let band = category_band(3);
        let mut up = InputEvents::touch_up(band.x + 5, band.y + 5);
        assert_eq!(sidebar.process(&mut up, &mut focus), SidebarAction::Ignored);
        assert_eq!(sidebar.cur_category(), 0);
    }

    #[test]
    fn test_highlight_stays_clamped() {
        let mut sidebar = sidebar();
        let mut focus = Focus::Sidebar(0);

        sidebar.process(&mut key(Button::Up), &mut focus);
        assert_eq!(focus, Focus::Sidebar(0));

        for _ in 0..20 {
            sidebar.process(&mut key(Button::Down), &mut focus);
            let h = focus.sidebar().unwrap();
            assert!(h < TOTAL_CATS);
        }
        assert_eq!(focus, Focus::Sidebar(TOTAL_CATS - 1));

        sidebar.process(&mut key(Button::Up), &mut focus);
        assert_eq!(focus, Focus::Sidebar(TOTAL_CATS - 2));
    }

    #[test]
    fn test_cursor_moves_fall_through() {
        let mut sidebar = sidebar();
        let mut focus = Focus::Sidebar(3);

        let mut down = key(Button::Down);
        assert_eq!(sidebar.process(&mut down, &mut focus), SidebarAction::Ignored);
        assert_eq!(focus, Focus::Sidebar(4));
        assert!(!down.is_handled());

        assert_eq!(sidebar.process(&mut key(Button::Up), &mut focus), SidebarAction::Ignored);
        assert_eq!(focus, Focus::Sidebar(3));
        assert_eq!(sidebar.process(&mut key(Button::X), &mut focus), SidebarAction::Ignored);
        assert_eq!(sidebar.cur_category(), 0);
    }

    #[test]
    fn test_keys_ignored_without_highlight() {
        let mut sidebar = sidebar();
        let mut focus = Focus::AppList(2);
        assert_eq!(sidebar.process(&mut key(Button::Down), &mut focus), SidebarAction::Ignored);
        assert_eq!(sidebar.process(&mut key(Button::A), &mut focus), SidebarAction::Ignored);
        assert_eq!(focus, Focus::AppList(2));
    }

    #[test]
    fn test_right_hands_off_and_acknowledges() {
        let mut sidebar = sidebar();
        let mut focus = Focus::Sidebar(4);
        let mut event = key(Button::Right);

        assert_eq!(sidebar.process(&mut event, &mut focus), SidebarAction::HandOff);
        assert_eq!(focus, Focus::AppList(0));
        assert!(event.is_handled());
    }

    #[test]
    fn test_touch_down_clears_highlight() {
        let mut sidebar = sidebar();
        for start in [Focus::None, Focus::Sidebar(5), Focus::AppList(1)] {
            let mut focus = start;
            sidebar.process(&mut InputEvents::touch_down(900, 500), &mut focus);
            assert!(sidebar.is_dragging());
            assert_eq!(focus.sidebar(), None);
        }
    }

    #[test]
    fn test_a_commits_highlighted() {
        let mut sidebar = sidebar();
        let mut focus = Focus::Sidebar(2);
        assert_eq!(sidebar.process(&mut key(Button::A), &mut focus), SidebarAction::Select(2));
        assert_eq!(sidebar.current_cat_name(), "Emulators");
        assert_eq!(sidebar.current_cat_value(), "emu");
    }

    #[test]
    fn test_render_selected_and_highlighted() {
        let mut sidebar = sidebar();
        let mut focus = Focus::Sidebar(1);
        sidebar.process(&mut key(Button::A), &mut focus);
        sidebar.process(&mut key(Button::Down), &mut focus);

        let mut r = RecordingRenderer::default();
        sidebar.render(&mut r, (0, 0), focus);

        assert_eq!(r.ops[0], DrawOp::Fill(Rect::new(0, 205, 400, 60), theme::SELECTION_BG));
        assert_eq!(r.ops[1], DrawOp::Stroke(Rect::new(0, 275, 400, 60), theme::FOCUS_STROKE));
        assert!(r.has_text("Homebrew App Store"));
        assert!(r.has_text("Misc"));
    }
}
