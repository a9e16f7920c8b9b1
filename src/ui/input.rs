//! Per-tick input snapshot handed to `Element::process`

/// Controller buttons, named after the console layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    A,
    B,
    X,
    Y,
    Up,
    Down,
    Left,
    Right,
    L,
    R,
    Plus,
    Minus,
}

impl Button {
    const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Resource name of the on-screen glyph for this button
    pub fn glyph(self) -> &'static str {
        match self {
            Button::A => "button-a",
            Button::B => "button-b",
            Button::X => "button-x",
            Button::Y => "button-y",
            Button::Up | Button::Down | Button::Left | Button::Right => "button-dpad",
            Button::L => "button-l-outline",
            Button::R => "button-r-outline",
            Button::Plus => "button-plus",
            Button::Minus => "button-minus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventKind {
    #[default]
    None,
    KeyDown,
    KeyUp,
    TouchDown,
    TouchMotion,
    TouchUp,
}

/// One input event, or an idle tick when `noop` is set.
///
/// Coordinates are in the 1280x720 layout space. Once a consumer calls
/// `acknowledge`, every query reports nothing so the event is not handled
/// twice in the same tick.
#[derive(Debug, Clone, Default)]
pub struct InputEvents {
    pub noop: bool,
    kind: EventKind,
    held: u16,
    pub x: i32,
    pub y: i32,
    /// Vertical movement since the previous touch event
    pub yrel: i32,
    handled: bool,
}

impl InputEvents {
    pub fn noop() -> Self {
        Self {
            noop: true,
            ..Default::default()
        }
    }

    pub fn key_down(buttons: &[Button]) -> Self {
        Self {
            kind: EventKind::KeyDown,
            held: buttons.iter().fold(0, |mask, b| mask | b.bit()),
            ..Default::default()
        }
    }

    pub fn key_up(buttons: &[Button]) -> Self {
        Self {
            kind: EventKind::KeyUp,
            held: buttons.iter().fold(0, |mask, b| mask | b.bit()),
            ..Default::default()
        }
    }

    pub fn touch_down(x: i32, y: i32) -> Self {
        Self::touch(EventKind::TouchDown, x, y, 0)
    }

    pub fn touch_motion(x: i32, y: i32, yrel: i32) -> Self {
        Self::touch(EventKind::TouchMotion, x, y, yrel)
    }

    pub fn touch_up(x: i32, y: i32) -> Self {
        Self::touch(EventKind::TouchUp, x, y, 0)
    }

    fn touch(kind: EventKind, x: i32, y: i32, yrel: i32) -> Self {
        Self {
            kind,
            x,
            y,
            yrel,
            ..Default::default()
        }
    }

    pub fn kind(&self) -> EventKind {
        if self.handled { EventKind::None } else { self.kind }
    }

    pub fn is_key_down(&self) -> bool {
        self.kind() == EventKind::KeyDown
    }

    pub fn is_key_up(&self) -> bool {
        self.kind() == EventKind::KeyUp
    }

    pub fn is_touch_down(&self) -> bool {
        self.kind() == EventKind::TouchDown
    }

    pub fn is_touch_motion(&self) -> bool {
        self.kind() == EventKind::TouchMotion
    }

    pub fn is_touch_up(&self) -> bool {
        self.kind() == EventKind::TouchUp
    }

    pub fn held(&self, button: Button) -> bool {
        !self.handled && self.held & button.bit() != 0
    }

    /// Whether the touch point lies inside the rectangle (edges included)
    pub fn touch_in(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        self.x >= x && self.x <= x + width && self.y >= y && self.y <= y + height
    }

    /// Mark the event as consumed
    pub fn acknowledge(&mut self) {
        self.handled = true;
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_buttons() {
        let event = InputEvents::key_down(&[Button::A, Button::Down]);
        assert!(event.is_key_down());
        assert!(event.held(Button::A));
        assert!(event.held(Button::Down));
        assert!(!event.held(Button::Up));
        assert!(!event.noop);
    }

    #[test]
    fn test_acknowledge_hides_event() {
        let mut event = InputEvents::key_down(&[Button::Right]);
        event.acknowledge();
        assert!(!event.is_key_down());
        assert!(!event.held(Button::Right));
        assert_eq!(event.kind(), EventKind::None);
    }

    #[test]
    fn test_touch_in_includes_edges() {
        let event = InputEvents::touch_up(400, 135);
        assert!(event.is_touch_up());
        assert!(event.touch_in(0, 135, 400, 60));
        assert!(!event.touch_in(0, 136, 400, 60));
    }

    #[test]
    fn test_noop_has_no_input() {
        let event = InputEvents::noop();
        assert!(event.noop);
        assert!(!event.is_key_down() && !event.is_touch_down() && !event.is_touch_up());
    }
}
