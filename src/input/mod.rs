//! Input handling: platform-agnostic event types and keyboard actions.

/// Platform-agnostic input events.
pub mod event;
/// Engine-level keyboard actions.
pub mod keyboard;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
