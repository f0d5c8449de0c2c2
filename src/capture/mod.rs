//! Capture sources
//!
//! Pointer input is the only source; the OS hook comes from `monio`, which
//! covers X11/evdev, Windows and macOS from one code path.

pub mod input;

// Re-export input channel
pub use input::InputTrackingChannel;
