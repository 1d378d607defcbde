//! Cancellable delayed delivery of the latest value.

use std::time::Duration;

use tokio::time::{sleep_until, Instant};

/// Holds at most one pending value and its deadline.
///
/// Scheduling a new value replaces the pending one and restarts the quiet
/// period. [`Debouncer::ready`] is cancel-safe: dropping it before the
/// deadline keeps the value pending.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending value and restart the quiet period.
    pub fn schedule(&mut self, value: T) {
        self.pending = Some((Instant::now() + self.delay, value));
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Resolve with the pending value once its quiet period has elapsed.
    /// Never resolves while nothing is pending.
    pub async fn ready(&mut self) -> T {
        loop {
            let Some((deadline, _)) = &self.pending else {
                return std::future::pending().await;
            };
            sleep_until(*deadline).await;

            if let Some((_, value)) = self.pending.take() {
                return value;
            }
        }
    }
}
