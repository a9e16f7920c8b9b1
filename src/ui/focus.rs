pub mod pure;
pub mod types;

// Re-exports
pub use types::{Focus, NavDirection};
