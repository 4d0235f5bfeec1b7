use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

/// Schedule a task that bumps `counter`, keeping its trigger for the test to
/// fire in place of a timer.
fn counting(
    tasks: &mut PendingTasks<()>,
    counter: &Rc<Cell<u32>>,
    on_close: OnClose,
    triggers: &RefCell<Vec<TaskTrigger>>,
) {
    let counter = Rc::clone(counter);
    tasks.schedule(move || counter.set(counter.get() + 1), on_close, |trigger| {
        triggers.borrow_mut().push(trigger);
    });
}

#[test]
fn firing_runs_the_task_once() {
    let mut tasks = PendingTasks::default();
    let runs = Rc::new(Cell::new(0));
    let triggers = RefCell::new(Vec::new());
    counting(&mut tasks, &runs, OnClose::Cancel, &triggers);

    triggers.borrow()[0].fire();
    triggers.borrow()[0].fire();
    assert_eq!(runs.get(), 1);
    assert_eq!(tasks.pending(), 0);
}

#[test]
fn fired_tasks_are_pruned_when_new_ones_arrive() {
    let mut tasks = PendingTasks::default();
    let runs = Rc::new(Cell::new(0));
    let triggers = RefCell::new(Vec::new());
    for _ in 0..100 {
        counting(&mut tasks, &runs, OnClose::Settle, &triggers);
        if let Some(last) = triggers.borrow().last() {
            last.fire();
        }
    }
    assert_eq!(runs.get(), 100);
    assert!(tasks.tasks.len() <= 1, "kept {} fired tasks", tasks.tasks.len());
}

#[test]
fn close_settles_pending_restores() {
    let mut tasks = PendingTasks::default();
    let restored = Rc::new(Cell::new(0));
    let triggers = RefCell::new(Vec::new());
    counting(&mut tasks, &restored, OnClose::Settle, &triggers);
    counting(&mut tasks, &restored, OnClose::Settle, &triggers);

    tasks.close();
    assert_eq!(restored.get(), 2);
}

#[test]
fn close_drops_cancellable_tasks_unrun() {
    let mut tasks = PendingTasks::default();
    let runs = Rc::new(Cell::new(0));
    let triggers = RefCell::new(Vec::new());
    counting(&mut tasks, &runs, OnClose::Cancel, &triggers);

    tasks.close();
    assert_eq!(runs.get(), 0);
    triggers.borrow()[0].fire();
    assert_eq!(runs.get(), 0, "a task taken by close must not run later");
}

#[test]
fn close_does_not_rerun_fired_settle_tasks() {
    let mut tasks = PendingTasks::default();
    let runs = Rc::new(Cell::new(0));
    let triggers = RefCell::new(Vec::new());
    counting(&mut tasks, &runs, OnClose::Settle, &triggers);
    counting(&mut tasks, &runs, OnClose::Settle, &triggers);
    triggers.borrow()[0].fire();

    tasks.close();
    assert_eq!(runs.get(), 2);
}

#[test]
fn close_drops_timer_handles() {
    let dropped = Rc::new(Cell::new(0));
    struct Handle(Rc<Cell<u32>>);
    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    let mut tasks = PendingTasks::default();
    tasks.schedule(|| {}, OnClose::Cancel, |_| Handle(Rc::clone(&dropped)));
    tasks.schedule(|| {}, OnClose::Settle, |_| Handle(Rc::clone(&dropped)));
    tasks.close();
    assert_eq!(dropped.get(), 2);
}

#[test]
fn running_task_survives_pruning_from_inside_its_callback() {
    let tasks: Rc<RefCell<PendingTasks<()>>> = Rc::default();
    let armed: Rc<RefCell<Option<TaskTrigger>>> = Rc::default();
    let nested = Rc::clone(&tasks);
    tasks.borrow_mut().schedule(
        move || {
            nested.borrow_mut().schedule(|| {}, OnClose::Cancel, |_| ());
            assert_eq!(nested.borrow().tasks.len(), 2, "running task was pruned");
        },
        OnClose::Cancel,
        |trigger| {
            *armed.borrow_mut() = Some(trigger);
        },
    );

    let trigger = armed.borrow_mut().take();
    if let Some(trigger) = trigger {
        trigger.fire();
    }
    assert_eq!(tasks.borrow().pending(), 1);
}
