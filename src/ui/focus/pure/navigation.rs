//! Grid and list navigation logic (pure functions)

use crate::ui::focus::types::NavDirection;

/// Result of moving the cursor inside a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridNav {
    /// Move the cursor to this index
    MoveTo(usize),
    /// Cursor is in the first column and moved left, out of the grid
    LeaveLeft,
    /// No navigation (at boundary)
    None,
}

/// Navigate a row-major grid of `len` items laid out in `columns` columns
///
/// Returns the navigation result without mutating state (pure function)
pub fn navigate_grid(index: usize, len: usize, columns: usize, direction: NavDirection) -> GridNav {
    if len == 0 || columns == 0 {
        return match direction {
            NavDirection::Left => GridNav::LeaveLeft,
            _ => GridNav::None,
        };
    }
    let index = index.min(len - 1);

    match direction {
        NavDirection::Left => {
            if index % columns == 0 {
                GridNav::LeaveLeft
            } else {
                GridNav::MoveTo(index - 1)
            }
        }
        NavDirection::Right => {
            if (index + 1) % columns != 0 && index + 1 < len {
                GridNav::MoveTo(index + 1)
            } else {
                GridNav::None
            }
        }
        NavDirection::Up => {
            if index >= columns {
                GridNav::MoveTo(index - columns)
            } else {
                GridNav::None
            }
        }
        NavDirection::Down => {
            let row = index / columns;
            let last_row = (len - 1) / columns;
            if row < last_row {
                // Partial last row: land on its last item
                GridNav::MoveTo((index + columns).min(len - 1))
            } else {
                GridNav::None
            }
        }
    }
}

/// Clamp an index after applying a delta
pub fn apply_index_delta(current: usize, delta: i32, max: usize) -> usize {
    if delta < 0 {
        current.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        (current + delta as usize).min(max.saturating_sub(1))
    }
}
