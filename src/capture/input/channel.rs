use crate::capture::input::hook::{self, InputHandler, SessionEnd};
use crate::recorder::channel::{RecordingChannel, RecordingError, RecordingResult};
use async_trait::async_trait;
use monio::Hook;
use parking_lot::Mutex as ParkingMutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Scoped registration of the global pointer hook.
///
/// While started, every pointer event reaches `handler`. Stopping or
/// dropping the channel stops forwarding and removes the OS hook.
pub struct InputTrackingChannel {
    is_recording: Arc<AtomicBool>,
    hook: Arc<Hook>,
    handler: Arc<dyn InputHandler>,
    session_end: SessionEnd,
    thread_handle: ParkingMutex<Option<std::thread::JoinHandle<()>>>,
}

impl InputTrackingChannel {
    pub fn new(handler: Arc<dyn InputHandler>, session_end: SessionEnd) -> Self {
        Self {
            is_recording: Arc::new(AtomicBool::new(false)),
            hook: Arc::new(Hook::new()),
            handler,
            session_end,
            thread_handle: ParkingMutex::new(None),
        }
    }

    fn release(&self) {
        let was_recording = self.is_recording.swap(false, Ordering::SeqCst);

        let Some(handle) = self.thread_handle.lock().take() else {
            return;
        };

        match self.hook.stop() {
            Ok(()) => {
                let _ = handle.join();
            }
            // Hook already exited, or its thread has not installed it yet
            Err(monio::Error::NotRunning) if handle.is_finished() => {
                let _ = handle.join();
            }
            Err(monio::Error::NotRunning) => {
                tracing::debug!("Input hook not yet installed, detaching its thread");
            }
            Err(e) => tracing::warn!("Failed to remove input hook: {}", e),
        }

        if was_recording {
            tracing::info!(
                "Input tracking stopped (events={})",
                self.handler.events_handled()
            );
        }
    }
}

#[async_trait]
impl RecordingChannel for InputTrackingChannel {
    async fn start(&mut self) -> RecordingResult<()> {
        if self.is_recording.load(Ordering::SeqCst) {
            return Err(RecordingError::AlreadyRecording);
        }

        // Reap the thread of a hook that ended on its own
        self.release();

        self.is_recording.store(true, Ordering::SeqCst);

        match hook::start_input_tracking(
            self.hook.clone(),
            self.is_recording.clone(),
            self.handler.clone(),
            self.session_end.clone(),
        ) {
            Ok(handle) => {
                *self.thread_handle.lock() = Some(handle);
                tracing::info!("Input tracking started");
                Ok(())
            }
            Err(e) => {
                self.is_recording.store(false, Ordering::SeqCst);
                Err(e)
            }
        }
    }

    async fn stop(&mut self) -> RecordingResult<()> {
        self.release();
        Ok(())
    }

    fn is_recording(&self) -> bool {
        self.is_recording.load(Ordering::SeqCst)
    }
}

impl Drop for InputTrackingChannel {
    fn drop(&mut self) {
        self.release();
    }
}
