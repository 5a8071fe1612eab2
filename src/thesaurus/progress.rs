//! Progress events and cooperative cancellation for long-running loads.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;
use serde::{Deserialize, Serialize};

/// A progress notification emitted during lexical-resource loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadProgress {
    /// Human-readable phase message.
    pub message: String,
    /// Monotonically increasing completion fraction in `[0.0, 1.0]`.
    pub fraction_complete: f64,
}

/// Rate-bounded progress reporter.
///
/// Subscribers receive periodic updates, not per-item ones: an event is
/// emitted at most once per `MIN_INTERVAL` and the completion fraction never
/// decreases. The final event at 1.0 is always sent.
#[derive(Debug)]
pub struct ProgressReporter {
    sender: Option<Sender<LoadProgress>>,
    last_emit: Instant,
    last_fraction: f64,
}

/// Minimum wall-clock spacing between intermediate progress events.
const MIN_INTERVAL: Duration = Duration::from_millis(100);

impl ProgressReporter {
    /// Create a reporter; with no sender every emission is a no-op.
    pub fn new(sender: Option<Sender<LoadProgress>>) -> ProgressReporter {
        ProgressReporter {
            sender,
            // Allow the first tick through immediately.
            last_emit: Instant::now() - MIN_INTERVAL,
            last_fraction: 0.0,
        }
    }

    /// Report progress; dropped unless the rate bound has elapsed.
    pub fn tick(&mut self, message: &str, fraction: f64) {
        let fraction = fraction.clamp(self.last_fraction, 1.0);
        self.last_fraction = fraction;
        if self.last_emit.elapsed() < MIN_INTERVAL {
            return;
        }
        self.emit(message, fraction);
    }

    /// Report completion; always emitted, at fraction 1.0.
    pub fn finish(&mut self, message: &str) {
        self.last_fraction = 1.0;
        self.emit(message, 1.0);
    }

    fn emit(&mut self, message: &str, fraction: f64) {
        self.last_emit = Instant::now();
        if let Some(sender) = &self.sender {
            // A dropped receiver is not the loader's problem.
            let _ = sender.send(LoadProgress {
                message: message.to_string(),
                fraction_complete: fraction,
            });
        }
    }
}

/// Shared cooperative cancellation token.
///
/// Loading checks the token between discrete units of work (per progress
/// tick), never mid-parse.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state.
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Has cancellation been requested?
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
