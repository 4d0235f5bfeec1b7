//! Last-user-activity tracking.
//!
//! A single instant, stamped by input listeners and read by the auto-refresh
//! poller. Clones share the same cell; the last writer wins. Everything runs on
//! the page's event loop, so a `Cell` is enough.

#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

use std::cell::Cell;
use std::rc::Rc;

/// DOM events that count as operator activity.
pub const ACTIVITY_EVENTS: [&str; 4] = ["mousedown", "keydown", "scroll", "touchstart"];

#[derive(Clone, Debug)]
pub struct ActivityTracker {
    last_ms: Rc<Cell<f64>>,
}

impl ActivityTracker {
    /// Create a tracker seeded with `now_ms`, so a page nobody touches counts
    /// as idle from load.
    #[must_use]
    pub fn new(now_ms: f64) -> Self {
        Self { last_ms: Rc::new(Cell::new(now_ms)) }
    }

    pub fn record(&self, now_ms: f64) {
        self.last_ms.set(now_ms);
    }

    #[must_use]
    pub fn last_activity_ms(&self) -> f64 {
        self.last_ms.get()
    }

    /// Milliseconds since the last recorded activity, never negative.
    #[must_use]
    pub fn idle_ms(&self, now_ms: f64) -> f64 {
        (now_ms - self.last_ms.get()).max(0.0)
    }
}
