//! Focus and navigation types for controller navigation

/// Which component owns the controller cursor on the store page.
///
/// Touch input clears it; the sidebar and the app list only ever move it
/// through the value they are handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    None,
    /// Highlighted sidebar category
    Sidebar(usize),
    /// Highlighted card in the app list
    AppList(usize),
}

impl Focus {
    pub fn sidebar(self) -> Option<usize> {
        match self {
            Focus::Sidebar(i) => Some(i),
            _ => None,
        }
    }

    pub fn app_list(self) -> Option<usize> {
        match self {
            Focus::AppList(i) => Some(i),
            _ => None,
        }
    }
}

/// Direction of navigation input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
    Left,
    Right,
}
