//! Gamepad input through evdev

use evdev::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadButton {
    Left,
    Right,
    Up,
    Down,
    ABtn,
    BBtn,
    XBtn,
    YBtn,
    StartBtn,
    SelectBtn,
    LB, // Left bumper (BTN_TL)
    RB, // Right bumper (BTN_TR)
    LT, // Left trigger (BTN_TL2)
    RT, // Right trigger (BTN_TR2)
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum StickDirection {
    Up,
    Down,
    Left,
    Right,
}

// Hold-to-repeat timing for the left stick
const INITIAL_DELAY_MS: u128 = 300;
const REPEAT_RATE_MS: u128 = 80;

pub struct InputDevice {
    path: String,
    dev: Device,
    // Current stick positions (updated by events, persisted between polls)
    stick_x: i32,
    stick_y: i32,
    stick_hold_start: Option<std::time::Instant>,
    stick_hold_direction: Option<StickDirection>,
    stick_last_repeat: std::time::Instant,
    stick_center: i32,
    stick_threshold: i32,
}

impl InputDevice {
    pub fn name(&self) -> &str {
        self.dev.name().unwrap_or("")
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Drain pending events and return the buttons pressed since last poll
    pub fn poll(&mut self) -> Vec<PadButton> {
        let mut pressed = Vec::new();

        if let Ok(events) = self.dev.fetch_events() {
            for event in events {
                let btn = match event.destructure() {
                    EventSummary::Key(_, KeyCode::BTN_SOUTH, 1) => Some(PadButton::ABtn),
                    EventSummary::Key(_, KeyCode::BTN_EAST, 1) => Some(PadButton::BBtn),
                    EventSummary::Key(_, KeyCode::BTN_NORTH, 1) => Some(PadButton::XBtn),
                    EventSummary::Key(_, KeyCode::BTN_WEST, 1) => Some(PadButton::YBtn),
                    EventSummary::Key(_, KeyCode::BTN_START, 1) => Some(PadButton::StartBtn),
                    EventSummary::Key(_, KeyCode::BTN_SELECT, 1) => Some(PadButton::SelectBtn),
                    EventSummary::Key(_, KeyCode::BTN_TL, 1) => Some(PadButton::LB),
                    EventSummary::Key(_, KeyCode::BTN_TR, 1) => Some(PadButton::RB),
                    EventSummary::Key(_, KeyCode::BTN_TL2, 1) => Some(PadButton::LT),
                    EventSummary::Key(_, KeyCode::BTN_TR2, 1) => Some(PadButton::RT),
                    EventSummary::Key(_, KeyCode::BTN_DPAD_UP, 1) => Some(PadButton::Up),
                    EventSummary::Key(_, KeyCode::BTN_DPAD_DOWN, 1) => Some(PadButton::Down),
                    EventSummary::Key(_, KeyCode::BTN_DPAD_LEFT, 1) => Some(PadButton::Left),
                    EventSummary::Key(_, KeyCode::BTN_DPAD_RIGHT, 1) => Some(PadButton::Right),
                    // D-pad reported as a hat
                    EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_HAT0X, -1) => Some(PadButton::Left),
                    EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_HAT0X, 1) => Some(PadButton::Right),
                    EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_HAT0Y, -1) => Some(PadButton::Up),
                    EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_HAT0Y, 1) => Some(PadButton::Down),
                    EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_X, val) => {
                        self.stick_x = val;
                        None
                    }
                    EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_Y, val) => {
                        self.stick_y = val;
                        None
                    }
                    _ => None,
                };
                pressed.extend(btn);
            }
        }

        let direction = stick_direction(self.stick_x, self.stick_y, self.stick_center, self.stick_threshold);
        if let Some(btn) = self.handle_stick_direction(direction) {
            pressed.push(btn);
        }

        pressed
    }

    /// Handle stick direction with hold-to-repeat behavior
    fn handle_stick_direction(&mut self, new_dir: Option<StickDirection>) -> Option<PadButton> {
        let now = std::time::Instant::now();

        match (new_dir, self.stick_hold_direction) {
            // Released stick (back to center)
            (None, _) => {
                self.stick_hold_start = None;
                self.stick_hold_direction = None;
                None
            }
            // Still holding the same direction - check for repeat
            (Some(dir), Some(held)) if dir == held => {
                let hold_start = self.stick_hold_start?;
                let hold_duration = now.duration_since(hold_start).as_millis();
                let since_last_repeat = now.duration_since(self.stick_last_repeat).as_millis();

                if hold_duration > INITIAL_DELAY_MS && since_last_repeat > REPEAT_RATE_MS {
                    self.stick_last_repeat = now;
                    Some(direction_to_button(dir))
                } else {
                    None
                }
            }
            // Started holding a new direction
            (Some(dir), _) => {
                self.stick_hold_start = Some(now);
                self.stick_hold_direction = Some(dir);
                self.stick_last_repeat = now;
                Some(direction_to_button(dir))
            }
        }
    }
}

fn direction_to_button(dir: StickDirection) -> PadButton {
    match dir {
        StickDirection::Up => PadButton::Up,
        StickDirection::Down => PadButton::Down,
        StickDirection::Left => PadButton::Left,
        StickDirection::Right => PadButton::Right,
    }
}

/// Stick position to a direction, vertical axis winning ties
pub fn stick_direction(x: i32, y: i32, center: i32, threshold: i32) -> Option<StickDirection> {
    if y < center - threshold {
        Some(StickDirection::Up)
    } else if y > center + threshold {
        Some(StickDirection::Down)
    } else if x < center - threshold {
        Some(StickDirection::Left)
    } else if x > center + threshold {
        Some(StickDirection::Right)
    } else {
        None
    }
}

/// Open every readable gamepad. Devices that cannot be switched to
/// non-blocking mode are skipped.
pub fn scan_gamepads() -> Vec<InputDevice> {
    let mut pads: Vec<InputDevice> = Vec::new();
    for (path, dev) in evdev::enumerate() {
        let is_gamepad = dev
            .supported_keys()
            .is_some_and(|keys| keys.contains(KeyCode::BTN_SOUTH));
        if !is_gamepad {
            continue;
        }

        if dev.set_nonblocking(true).is_err() {
            log::warn!("evdev: Failed to set non-blocking mode for {}", path.display());
            continue;
        }

        // Detect stick axis range from device info
        let (stick_center, stick_threshold) = match dev.get_abs_state() {
            Ok(abs_info) => match abs_info.get(AbsoluteAxisCode::ABS_X.0 as usize) {
                Some(x_info) if x_info.maximum > x_info.minimum => {
                    let center = (x_info.minimum + x_info.maximum) / 2;
                    // 25% deadzone
                    (center, (x_info.maximum - x_info.minimum) / 4)
                }
                _ => (0, 8000),
            },
            Err(_) => (0, 8000),
        };

        log::info!(
            "evdev: using gamepad {} ({})",
            dev.name().unwrap_or("unknown"),
            path.display()
        );

        pads.push(InputDevice {
            path: path.display().to_string(),
            dev,
            stick_x: stick_center,
            stick_y: stick_center,
            stick_hold_start: None,
            stick_hold_direction: None,
            stick_last_repeat: std::time::Instant::now(),
            stick_center,
            stick_threshold,
        });
    }
    pads.sort_by(|a, b| a.path.cmp(&b.path));
    pads
}
