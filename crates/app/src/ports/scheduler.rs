//! Scheduler port — one-shot delayed callbacks with explicit cancellation.

use std::time::Duration;

/// Runs a callback once after a delay.
pub trait Scheduler {
    /// Handle returned for every scheduled callback.
    type Task: ScheduledTask;

    /// Run `callback` once, `delay` from now, unless the returned task is
    /// cancelled first.
    fn schedule<F>(&self, delay: Duration, callback: F) -> Self::Task
    where
        F: FnOnce() + 'static;
}

/// Handle to a pending callback.
///
/// Owners must call [`cancel`](Self::cancel) on teardown; implementations
/// are not required to cancel on drop.
pub trait ScheduledTask {
    /// Prevent the callback from running. No-op if it already ran.
    fn cancel(self);
}
