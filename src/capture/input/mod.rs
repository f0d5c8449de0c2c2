//! Input tracking (mouse) capture
//!
//! Registers a global pointer hook and forwards every move and click,
//! untimestamped, to an [`InputHandler`] for serialization.

pub mod channel;
pub mod hook;
pub mod types;

pub use channel::InputTrackingChannel;
pub use hook::{InputHandler, SessionEnd};
pub use types::{InputEvent, RawInput};
