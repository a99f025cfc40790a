//! Debouncing for rapid repeated triggers
//!
//! Search keystrokes arrive faster than a filter recomputation is worth
//! running; the debouncer coalesces a burst into the single trailing call.

use std::time::Duration;
use tokio::task::AbortHandle;

/// Coalesces rapid [`Debouncer::schedule`] calls: each call cancels the
/// pending invocation and arms a new one, so only the last call in a burst
/// executes, after the configured delay.
///
/// Must be used inside a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<AbortHandle>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Arm `action` to run after the delay, cancelling any pending action
    pub fn schedule<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let delay = self.delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        });
        self.pending = Some(task.abort_handle());
    }

    /// Drop any pending action without running it
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
