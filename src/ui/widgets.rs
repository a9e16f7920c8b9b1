//! Leaf elements

pub mod button;
pub mod image;
pub mod progress_bar;
pub mod text;

pub use button::ButtonElement;
pub use image::ImageElement;
pub use progress_bar::ProgressBar;
pub use text::TextElement;
