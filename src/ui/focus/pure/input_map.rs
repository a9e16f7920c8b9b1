//! Input mapping from PadButton to store buttons

use crate::input::PadButton;
use crate::ui::focus::types::NavDirection;
use crate::ui::input::Button;

/// Map a gamepad button to the store's console-style button
pub fn map_pad_button(button: PadButton) -> Option<Button> {
    match button {
        // D-pad
        PadButton::Up => Some(Button::Up),
        PadButton::Down => Some(Button::Down),
        PadButton::Left => Some(Button::Left),
        PadButton::Right => Some(Button::Right),

        // Face buttons
        PadButton::ABtn => Some(Button::A),
        PadButton::BBtn => Some(Button::B),
        PadButton::XBtn => Some(Button::X),
        PadButton::YBtn => Some(Button::Y),

        // Shoulders and menu buttons
        PadButton::LB => Some(Button::L),
        PadButton::RB => Some(Button::R),
        PadButton::StartBtn => Some(Button::Plus),
        PadButton::SelectBtn => Some(Button::Minus),

        // Triggers are unused
        PadButton::LT | PadButton::RT => None,
    }
}

/// Direction a button navigates in, if it is a direction at all
pub fn direction_of(button: Button) -> Option<NavDirection> {
    match button {
        Button::Up => Some(NavDirection::Up),
        Button::Down => Some(NavDirection::Down),
        Button::Left => Some(NavDirection::Left),
        Button::Right => Some(NavDirection::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpad_mapping() {
        assert_eq!(map_pad_button(PadButton::Up), Some(Button::Up));
        assert_eq!(map_pad_button(PadButton::Down), Some(Button::Down));
    }

    #[test]
    fn test_menu_buttons() {
        assert_eq!(map_pad_button(PadButton::StartBtn), Some(Button::Plus));
        assert_eq!(map_pad_button(PadButton::SelectBtn), Some(Button::Minus));
        assert_eq!(map_pad_button(PadButton::LT), None);
    }

    #[test]
    fn test_direction_of() {
        assert_eq!(direction_of(Button::Left), Some(NavDirection::Left));
        assert_eq!(direction_of(Button::A), None);
    }
}
