//! Event emitter
//!
//! Turns raw pointer callbacks into timestamped JSON lines. Every record is
//! written and flushed before the call returns, so the sink never lags the
//! hook and a failed write surfaces on the event that caused it.

use crate::capture::input::hook::InputHandler;
use crate::capture::input::types::RawInput;
use crate::recorder::channel::RecordingResult;
use crate::recorder::clock::Clock;
use parking_lot::Mutex as ParkingMutex;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

pub struct EventEmitter<W, C> {
    sink: ParkingMutex<W>,
    clock: C,
    emitted: AtomicU64,
}

impl<C: Clock> EventEmitter<io::Stdout, C> {
    /// Emitter over standard output.
    pub fn stdout(clock: C) -> Self {
        Self::new(io::stdout(), clock)
    }
}

impl<W: Write + Send, C: Clock> EventEmitter<W, C> {
    pub fn new(sink: W, clock: C) -> Self {
        Self {
            sink: ParkingMutex::new(sink),
            clock,
            emitted: AtomicU64::new(0),
        }
    }

    pub fn on_move(&self, x: i64, y: i64) -> RecordingResult<()> {
        self.emit(RawInput::Move { x, y })
    }

    pub fn on_click(&self, x: i64, y: i64, button: &str, pressed: bool) -> RecordingResult<()> {
        self.emit(RawInput::Click {
            x,
            y,
            button: button.to_string(),
            pressed,
        })
    }

    /// Timestamp, serialize, write and flush one record.
    ///
    /// The sink lock is held across the clock read so records land in
    /// timestamp order and never interleave.
    pub fn emit(&self, raw: RawInput) -> RecordingResult<()> {
        let mut sink = self.sink.lock();

        let event = raw.stamp(self.clock.elapsed_ms());
        let mut line = serde_json::to_vec(&event)?;
        line.push(b'\n');

        sink.write_all(&line)?;
        sink.flush()?;

        self.emitted.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(?event, "Emitted input event");
        Ok(())
    }

    /// Number of records that reached the sink.
    pub fn events_emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}

impl<W: Write + Send + 'static, C: Clock + 'static> InputHandler for EventEmitter<W, C> {
    fn handle(&self, raw: RawInput) -> RecordingResult<()> {
        self.emit(raw)
    }

    fn events_handled(&self) -> u64 {
        self.events_emitted()
    }
}
