//! Global pointer hook built on `monio`
//!
//! `monio::Hook::run` installs the OS-level hook (XRecord or evdev on Linux,
//! a low-level mouse hook on Windows, a CGEventTap on macOS) and blocks its
//! thread, invoking the handler for every input event in delivery order.
//! Moves made while a button is held arrive as `MouseDragged`.

use crate::capture::input::types::RawInput;
use crate::recorder::channel::{RecordingError, RecordingResult};
use monio::{Button, Event, EventHandler, EventType, Hook};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use tokio::sync::mpsc;

/// Consumer of raw pointer payloads. Errors returned here are fatal to the
/// tracking session.
pub trait InputHandler: Send + Sync + 'static {
    fn handle(&self, raw: RawInput) -> RecordingResult<()>;

    /// Number of events successfully handled so far.
    fn events_handled(&self) -> u64;
}

/// Sender for the end-of-session signal: `Ok(())` when the OS hook shuts
/// down, `Err` on an initialization or sink failure.
pub type SessionEnd = mpsc::UnboundedSender<RecordingResult<()>>;

/// Name a button the way downstream consumers expect (`Button.left`, ...).
pub fn button_name(button: &Button) -> String {
    match button {
        Button::Left => "Button.left".to_string(),
        Button::Right => "Button.right".to_string(),
        Button::Middle => "Button.middle".to_string(),
        Button::Button4 => "Button.x1".to_string(),
        Button::Button5 => "Button.x2".to_string(),
        Button::Unknown(code) => format!("Button.button{}", code),
    }
}

/// Convert a hook event into a [`RawInput`] payload.
///
/// Plain and dragged moves both become `Move`; press and release become
/// `Click` at the position the OS reported with the button event.
/// Synthesized `MouseClicked`, wheel and keyboard events are dropped.
pub fn translate(event: &Event) -> Option<RawInput> {
    let mouse = event.mouse.as_ref()?;
    let (x, y) = (mouse.x.round() as i64, mouse.y.round() as i64);

    match event.event_type {
        EventType::MouseMoved | EventType::MouseDragged => Some(RawInput::Move { x, y }),
        EventType::MousePressed | EventType::MouseReleased => {
            let Some(button) = mouse.button.as_ref() else {
                tracing::warn!("Button event without a button: {:?}", event);
                return None;
            };
            Some(RawInput::Click {
                x,
                y,
                button: button_name(button),
                pressed: event.event_type == EventType::MousePressed,
            })
        }
        _ => None,
    }
}

/// Map the result of a finished hook run to the end-of-session signal.
pub fn hook_outcome(result: monio::Result<()>) -> RecordingResult<()> {
    match result {
        Ok(()) => Ok(()),
        Err(monio::Error::PermissionDenied(detail)) => {
            Err(RecordingError::PermissionDenied(detail))
        }
        Err(e) => Err(RecordingError::Hook(e.to_string())),
    }
}

/// Per-event logic run on the hook thread.
struct HookCallback {
    is_recording: Arc<AtomicBool>,
    handler: Arc<dyn InputHandler>,
    session_end: SessionEnd,
}

impl EventHandler for HookCallback {
    fn handle_event(&self, event: &Event) {
        if !self.is_recording.load(Ordering::SeqCst) {
            return;
        }

        let Some(raw) = translate(event) else {
            return;
        };

        if let Err(e) = self.handler.handle(raw) {
            // Refuse everything after the first failed write
            self.is_recording.store(false, Ordering::SeqCst);
            tracing::error!("Failed to emit input event: {}", e);
            let _ = self.session_end.send(Err(e));
        }
    }
}

/// Start the hook thread.
///
/// The thread runs until `hook.stop()` is called or the OS hook fails;
/// `is_recording` gates whether events are forwarded to `handler`.
pub fn start_input_tracking(
    hook: Arc<Hook>,
    is_recording: Arc<AtomicBool>,
    handler: Arc<dyn InputHandler>,
    session_end: SessionEnd,
) -> RecordingResult<JoinHandle<()>> {
    let handle = std::thread::Builder::new()
        .name("input-hook".to_string())
        .spawn(move || {
            tracing::info!("Input hook thread started");

            let callback = HookCallback {
                is_recording: is_recording.clone(),
                handler,
                session_end: session_end.clone(),
            };

            let outcome = hook_outcome(hook.run(callback));

            is_recording.store(false, Ordering::SeqCst);
            match &outcome {
                Ok(()) => tracing::info!("Input hook closed"),
                Err(e) => tracing::error!("Input hook error: {}", e),
            }
            let _ = session_end.send(outcome);
        })?;

    Ok(handle)
}
