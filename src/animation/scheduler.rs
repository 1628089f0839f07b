//! The timer seam between the animator and its host event loop.

use std::time::Duration;

/// Token for one pending scheduled callback.
///
/// Handles are opaque and single-use: once the callback fires or the
/// handle is passed to [`TickScheduler::cancel`], it is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

impl TickHandle {
    /// Build a handle from a raw id. Scheduler implementations own the
    /// id space; ids must not be reused while a handle is pending.
    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id this handle wraps.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Non-blocking one-shot timer interface.
///
/// `schedule` registers a callback due after `delay` and returns its
/// handle; `cancel` revokes a pending callback. The host delivers due
/// callbacks on the event-loop thread by calling back into the widget
/// ([`CircleWidget::on_tick`](crate::widget::CircleWidget::on_tick)).
/// Cancelling a handle that already fired is a no-op.
pub trait TickScheduler {
    /// Register a callback due after `delay`.
    fn schedule(&mut self, delay: Duration) -> TickHandle;

    /// Revoke a pending callback. Unknown or spent handles are ignored.
    fn cancel(&mut self, handle: TickHandle);
}

/// Deterministic scheduler for tests and headless hosts.
///
/// Pending callbacks queue in schedule order and fire only when the
/// driver asks for them, so a test can single-step an animation without
/// any real clock.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: Vec<(TickHandle, Duration)>,
    next_id: u64,
}

impl ManualScheduler {
    /// Empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks currently pending.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Delay of the oldest pending callback, if any.
    #[must_use]
    pub fn next_delay(&self) -> Option<Duration> {
        self.pending.first().map(|&(_, delay)| delay)
    }

    /// Fire the oldest pending callback, removing it from the queue.
    ///
    /// Returns the spent handle so the driver can route the callback.
    pub fn fire_next(&mut self) -> Option<TickHandle> {
        if self.pending.is_empty() {
            None
        } else {
            let (handle, _) = self.pending.remove(0);
            Some(handle)
        }
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle::from_raw(self.next_id);
        self.pending.push((handle, delay));
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.pending.retain(|&(h, _)| h != handle);
    }
}
