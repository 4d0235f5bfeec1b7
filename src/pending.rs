//! One-shot tasks waiting on a timer.
//!
//! Each task holds its callback in a shared slot; whichever comes first, the
//! timer firing or the owner closing, takes it. Tasks marked
//! [`OnClose::Settle`] undo a temporary page change (a disabled button, a
//! hidden card), so closing runs them early instead of dropping them.
//! Finished tasks are pruned whenever a new one is scheduled; a task whose
//! callback is still running is kept, since its timer closure is on the stack.

#[cfg(test)]
#[path = "pending_test.rs"]
mod pending_test;

use std::cell::RefCell;
use std::rc::Rc;

enum State {
    Armed(Box<dyn FnOnce()>),
    Running,
    Done,
}

type Slot = Rc<RefCell<State>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnClose {
    /// Drop the callback unrun.
    Cancel,
    /// Run the callback immediately.
    Settle,
}

/// Handed to the timer; firing runs the task at most once.
pub struct TaskTrigger {
    slot: Slot,
}

impl TaskTrigger {
    pub fn fire(&self) {
        let state = std::mem::replace(&mut *self.slot.borrow_mut(), State::Running);
        match state {
            State::Armed(callback) => {
                callback();
                *self.slot.borrow_mut() = State::Done;
            }
            other => *self.slot.borrow_mut() = other,
        }
    }

    fn disarm(&self) {
        let state = std::mem::replace(&mut *self.slot.borrow_mut(), State::Done);
        if let State::Running = state {
            *self.slot.borrow_mut() = State::Running;
        }
    }
}

struct Task<H> {
    handle: H,
    slot: Slot,
    on_close: OnClose,
}

impl<H> Task<H> {
    fn is_armed(&self) -> bool {
        matches!(*self.slot.borrow(), State::Armed(_))
    }

    fn is_done(&self) -> bool {
        matches!(*self.slot.borrow(), State::Done)
    }
}

/// Pending tasks plus the timer handle `H` keeping each one armed.
pub struct PendingTasks<H> {
    tasks: Vec<Task<H>>,
}

impl<H> Default for PendingTasks<H> {
    fn default() -> Self {
        Self { tasks: Vec::new() }
    }
}

impl<H> PendingTasks<H> {
    /// Register `f` and arm it with the handle `arm` builds from its trigger.
    pub fn schedule<F, A>(&mut self, f: F, on_close: OnClose, arm: A)
    where
        F: FnOnce() + 'static,
        A: FnOnce(TaskTrigger) -> H,
    {
        self.tasks.retain(|task| !task.is_done());
        let slot: Slot = Rc::new(RefCell::new(State::Armed(Box::new(f))));
        let handle = arm(TaskTrigger { slot: Rc::clone(&slot) });
        self.tasks.push(Task { handle, slot, on_close });
    }

    /// Tasks whose callback has not run yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_armed()).count()
    }

    /// Drop each timer handle, then run the task if it is a pending
    /// [`OnClose::Settle`] one and disarm it otherwise.
    pub fn close(self) {
        for Task { handle, slot, on_close } in self.tasks {
            drop(handle);
            let trigger = TaskTrigger { slot };
            match on_close {
                OnClose::Settle => trigger.fire(),
                OnClose::Cancel => trigger.disarm(),
            }
        }
    }
}
