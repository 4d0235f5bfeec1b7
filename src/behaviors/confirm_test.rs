use std::cell::RefCell;

use super::*;

struct ScriptedDialogs {
    answer: bool,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedDialogs {
    fn answering(answer: bool) -> Self {
        Self { answer, prompts: RefCell::new(Vec::new()) }
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_owned());
        self.answer
    }

    fn alert(&self, message: &str) {
        self.prompts.borrow_mut().push(message.to_owned());
    }
}

#[test]
fn rejected_confirmation_cancels_submission() {
    let dialogs = ScriptedDialogs::answering(false);
    assert_eq!(guard_archive(&dialogs), SubmitOutcome::Cancel);
}

#[test]
fn affirmed_confirmation_lets_submission_through() {
    let dialogs = ScriptedDialogs::answering(true);
    assert_eq!(guard_archive(&dialogs), SubmitOutcome::Proceed);
}

#[test]
fn operator_sees_the_archive_prompt_exactly_once() {
    let dialogs = ScriptedDialogs::answering(false);
    guard_archive(&dialogs);
    assert_eq!(dialogs.prompts.borrow().as_slice(), [ARCHIVE_PROMPT.to_owned()]);
}

#[test]
fn repeated_rejections_never_proceed() {
    let dialogs = ScriptedDialogs::answering(false);
    for _ in 0..5 {
        assert!(guard_archive(&dialogs).is_cancelled());
    }
}
