//! Debounce timer
//!
//! A single-shot timer owned by the editor session. At most one timer is
//! armed at a time: arming a new one cancels the previous one first, and
//! `cancel` disarms without firing. The armed action runs on the Tokio
//! runtime after the delay elapses.

use std::future::Future;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::AbortHandle;

/// Single-shot debounce timer with a single-active-timer invariant
#[derive(Debug, Default)]
pub struct DebounceTimer {
    armed: Mutex<Option<AbortHandle>>,
}

impl DebounceTimer {
    /// Create a disarmed timer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer, cancelling any previously armed one
    ///
    /// The action runs once `delay` has elapsed without another `schedule`
    /// or `cancel` call in between.
    pub fn schedule<F>(&self, delay: Duration, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut slot = self.armed.lock();
        if let Some(previous) = slot.take() {
            previous.abort();
        }
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });
        *slot = Some(handle.abort_handle());
    }

    /// Disarm the timer without firing
    pub fn cancel(&self) {
        if let Some(previous) = self.armed.lock().take() {
            previous.abort();
        }
    }
}
