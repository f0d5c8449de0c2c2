//! Pointer Tracker - global mouse events as a timestamped JSON-lines stream.
//!
//! Every move and click seen by the OS input hook is written to stdout as one
//! JSON object per line, stamped with milliseconds since the tracker started.
//! Diagnostics go to stderr so stdout stays a clean event stream.

pub mod capture;
pub mod recorder;

use anyhow::Context;
use capture::InputTrackingChannel;
use recorder::{EventEmitter, MonotonicClock, RecordingChannel, RecordingResult};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run the tracker until the input hook shuts down, a write fails, or the
/// process is interrupted.
pub fn run() -> anyhow::Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pointer_tracker_lib=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        "Starting Pointer Tracker v{} at {}",
        env!("CARGO_PKG_VERSION"),
        chrono::Local::now().to_rfc3339()
    );

    // Only waits on the interrupt signal and the session-end channel
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async {
        // Reference instant for every timestamp in the stream
        let clock = MonotonicClock::start();
        let emitter = Arc::new(EventEmitter::stdout(clock));

        let (session_end, mut ended) = mpsc::unbounded_channel();
        let mut channel = InputTrackingChannel::new(emitter, session_end);

        track(&mut channel, &mut ended).await
    })
}

/// Start `channel` and hold it until Ctrl-C or the first session-end signal.
///
/// A session-end `Err` (hook failure, sink failure) fails the run.
pub async fn track<C: RecordingChannel>(
    channel: &mut C,
    ended: &mut mpsc::UnboundedReceiver<RecordingResult<()>>,
) -> anyhow::Result<()> {
    channel
        .start()
        .await
        .context("failed to register global input hook")?;

    let outcome = tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for interrupt")?;
            tracing::info!("Interrupted, shutting down");
            Ok(())
        }
        end = ended.recv() => end.unwrap_or(Ok(())),
    };

    if channel.is_recording() {
        channel.stop().await?;
    }
    outcome.context("input tracking failed")
}
