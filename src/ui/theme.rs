//! Store colour palette

use eframe::egui::Color32;

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xb0, 0xb4, 0xb8);

/// Band behind the selected sidebar category
pub const SELECTION_BG: Color32 = Color32::from_rgb(0x67, 0x6a, 0x6d);
/// Outline of the controller focus cursor
pub const FOCUS_STROKE: Color32 = Color32::from_rgb(0xff, 0x00, 0xff);

pub const CARD_BG: Color32 = Color32::from_rgb(0x4e, 0x51, 0x55);
pub const ACCENT: Color32 = Color32::from_rgb(0x56, 0xc1, 0xdf);

pub const PROGRESS_TRACK: Color32 = Color32::from_rgb(0x5f, 0x62, 0x66);
pub const PROGRESS_FILL: Color32 = ACCENT;

pub const BUTTON_BG: Color32 = Color32::from_rgb(0x33, 0x35, 0x38);
pub const BUTTON_BG_LIGHT: Color32 = Color32::from_rgb(0xe6, 0xe6, 0xe6);

pub const POPUP_BG: Color32 = Color32::from_rgb(0x2d, 0x2f, 0x32);
