//! Elapsed-time source for event timestamps
//!
//! All timestamps in the event stream are milliseconds since a single
//! reference instant captured when tracking starts.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Something that can report elapsed milliseconds since its reference instant.
pub trait Clock: Send + Sync {
    fn elapsed_ms(&self) -> u64;
}

/// Monotonic clock anchored at the instant it was started.
///
/// Backed by [`Instant`], so wall-clock adjustments (NTP, manual changes)
/// never produce negative or jumping deltas.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    reference: Instant,
}

impl MonotonicClock {
    /// Capture the current instant as the reference.
    pub fn start() -> Self {
        Self {
            reference: Instant::now(),
        }
    }

    #[cfg(test)]
    pub fn reference(&self) -> Instant {
        self.reference
    }
}

impl Clock for MonotonicClock {
    fn elapsed_ms(&self) -> u64 {
        (self.reference.elapsed().as_secs_f64() * 1000.0).round() as u64
    }
}

/// Clock whose current reading is set by hand.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: AtomicU64,
}

impl ManualClock {
    pub fn new(now_ms: u64) -> Self {
        Self {
            now_ms: AtomicU64::new(now_ms),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now_ms.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn elapsed_ms(&self) -> u64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn elapsed_ms(&self) -> u64 {
        (**self).elapsed_ms()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn elapsed_ms(&self) -> u64 {
        (**self).elapsed_ms()
    }
}
