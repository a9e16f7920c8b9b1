pub mod context;
pub mod element;
pub mod focus;
pub mod input;
pub mod render;
pub mod theme;
pub mod widgets;
