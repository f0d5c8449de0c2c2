//! Recording channel trait
//!
//! Defines the lifecycle interface for capture sources and the error
//! taxonomy shared by the tracker.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while tracking input
#[derive(Error, Debug)]
pub enum RecordingError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Already recording")]
    AlreadyRecording,

    #[error("Input hook error: {0}")]
    Hook(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for recording operations
pub type RecordingResult<T> = Result<T, RecordingError>;

/// Trait for recording channels
///
/// A channel owns one capture source. `start` acquires it and `stop`
/// releases it; implementations must also release on drop.
#[async_trait]
pub trait RecordingChannel: Send + Sync {
    /// Start recording
    async fn start(&mut self) -> RecordingResult<()>;

    /// Stop recording
    async fn stop(&mut self) -> RecordingResult<()>;

    /// Check if the channel is currently recording
    fn is_recording(&self) -> bool;
}
