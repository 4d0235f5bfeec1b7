//! Ownership of every listener and timer an enhancer registers.
//!
//! Dropping a `gloo_timers` handle cancels the timer and dropping a
//! [`Listener`] unregisters its callback. Timeouts scheduled with
//! [`Scope::settle_after`] undo a temporary change, so closing runs them early
//! rather than leaving a button disabled or a card hidden. Cloning a `Scope`
//! shares it, which lets callbacks schedule follow-up timers (e.g. the
//! busy-state revert).

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Event, EventTarget};

use crate::error::EnhancerError;
use crate::pending::{OnClose, PendingTasks};

/// An installed event listener, removed from its target on drop.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("ticket-enhancer: failed to remove {} listener: {err:?}", self.event);
        }
    }
}

#[derive(Default)]
struct ScopeInner {
    listeners: Vec<Listener>,
    timeouts: PendingTasks<Timeout>,
    intervals: Vec<Interval>,
    cleanups: Vec<Box<dyn FnOnce()>>,
    closed: bool,
}

#[derive(Clone, Default)]
pub struct Scope {
    inner: Rc<RefCell<ScopeInner>>,
}

impl Scope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handler` for `event` on `target` for the lifetime of the scope.
    ///
    /// # Errors
    ///
    /// Returns [`EnhancerError::Dom`] if the browser rejects the listener.
    pub fn listen<F>(&self, target: &EventTarget, event: &'static str, handler: F) -> Result<(), EnhancerError>
    where
        F: FnMut(Event) + 'static,
    {
        if self.is_closed() {
            return Ok(());
        }
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.inner.borrow_mut().listeners.push(Listener { target: target.clone(), event, callback });
        Ok(())
    }

    /// Run `f` once after `delay_ms`, unless the scope closes first.
    pub fn timeout<F>(&self, delay_ms: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        self.schedule(delay_ms, f, OnClose::Cancel);
    }

    /// Run `f` once after `delay_ms`, or immediately if the scope closes
    /// first. For reverting temporary page changes.
    pub fn settle_after<F>(&self, delay_ms: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        self.schedule(delay_ms, f, OnClose::Settle);
    }

    fn schedule<F>(&self, delay_ms: u32, f: F, on_close: OnClose)
    where
        F: FnOnce() + 'static,
    {
        if self.is_closed() {
            return;
        }
        self.inner.borrow_mut().timeouts.schedule(f, on_close, |trigger| {
            Timeout::new(delay_ms, move || trigger.fire())
        });
    }

    /// Run `f` every `period_ms` until the scope closes.
    pub fn interval<F>(&self, period_ms: u32, f: F)
    where
        F: FnMut() + 'static,
    {
        if self.is_closed() {
            return;
        }
        let handle = Interval::new(period_ms, f);
        self.inner.borrow_mut().intervals.push(handle);
    }

    /// Run `f` when the scope closes, for side effects that are not a
    /// listener or timer (injected elements).
    pub fn defer<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        if self.is_closed() {
            return;
        }
        self.inner.borrow_mut().cleanups.push(Box::new(f));
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.borrow().closed
    }

    /// Cancel timers, remove listeners, settle pending reverts, and run
    /// deferred cleanups. Idempotent.
    pub fn close(&self) {
        let (listeners, timeouts, intervals, cleanups) = {
            let mut inner = self.inner.borrow_mut();
            if inner.closed {
                return;
            }
            inner.closed = true;
            (
                std::mem::take(&mut inner.listeners),
                std::mem::take(&mut inner.timeouts),
                std::mem::take(&mut inner.intervals),
                std::mem::take(&mut inner.cleanups),
            )
        };
        drop(intervals);
        if timeouts.pending() > 0 {
            log::debug!("ticket-enhancer: closing scope with {} pending timeouts", timeouts.pending());
        }
        timeouts.close();
        drop(listeners);
        for cleanup in cleanups {
            cleanup();
        }
    }
}
