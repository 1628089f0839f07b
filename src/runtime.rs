//! Cooperative single-threaded timer loop.
//!
//! [`EventLoop`] realizes the [`TickScheduler`] contract with a
//! due-time queue over [`Instant`]. A host pumps it on one thread:
//! sleep until [`next_due`](EventLoop::next_due), pop with
//! [`pop_due`](EventLoop::pop_due), and route each popped callback back
//! into the widget. GUI hosts with their own timer API (an `after()`
//! equivalent) implement [`TickScheduler`] directly instead.

use std::time::{Duration, Instant};

use crate::animation::{TickHandle, TickScheduler};

/// Due-time queue implementing the scheduler seam.
#[derive(Debug, Default)]
pub struct EventLoop {
    pending: Vec<(TickHandle, Instant)>,
    next_id: u64,
}

impl EventLoop {
    /// Empty loop.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing is scheduled.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest due time among pending callbacks.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|&(_, due)| due).min()
    }

    /// Pop the earliest callback that is due at `now`, if any.
    ///
    /// Callbacks fire strictly in due-time order; a popped handle is
    /// spent and will not be returned again.
    pub fn pop_due(&mut self, now: Instant) -> Option<TickHandle> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .min_by_key(|&(_, &(_, due))| due)
            .map(|(idx, _)| idx)?;
        if self.pending[idx].1 <= now {
            let (handle, _) = self.pending.remove(idx);
            Some(handle)
        } else {
            None
        }
    }
}

impl TickScheduler for EventLoop {
    fn schedule(&mut self, delay: Duration) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle::from_raw(self.next_id);
        self.pending.push((handle, Instant::now() + delay));
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.pending.retain(|&(h, _)| h != handle);
    }
}
