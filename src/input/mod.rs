//! Input events and their mapping onto viewer operations.

pub mod events;
pub mod handler;

pub use events::{InputEvent, KeyCode, MouseButton, ScrollDirection};
pub use handler::InputHandler;
