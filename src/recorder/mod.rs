//! Timestamping and output of captured events

pub mod channel;
pub mod clock;
pub mod emitter;

pub use channel::{RecordingChannel, RecordingError, RecordingResult};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use emitter::EventEmitter;
