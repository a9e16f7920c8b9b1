pub mod input_map;
pub mod navigation;

// Re-exports
pub use input_map::{direction_of, map_pad_button};
pub use navigation::{apply_index_delta, navigate_grid, GridNav};
