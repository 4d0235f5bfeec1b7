//! Archive buttons ask before submitting.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use crate::consts::ARCHIVE_PROMPT;
use crate::dialogs::{Dialogs, SubmitOutcome};

/// Ask the operator to confirm an archive; anything but an explicit yes cancels.
pub fn guard_archive(dialogs: &dyn Dialogs) -> SubmitOutcome {
    if dialogs.confirm(ARCHIVE_PROMPT) {
        SubmitOutcome::Proceed
    } else {
        SubmitOutcome::Cancel
    }
}

#[cfg(feature = "hydrate")]
pub fn install(page: &crate::dom::Page) -> Result<(), crate::error::EnhancerError> {
    use crate::consts::ARCHIVE_SUBMIT_SELECTOR;
    use crate::dialogs::BrowserDialogs;

    for button in page.query_all(ARCHIVE_SUBMIT_SELECTOR)? {
        let dialogs = BrowserDialogs { window: page.window.clone() };
        page.scope.listen(&button, "click", move |event| {
            if guard_archive(&dialogs).is_cancelled() {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}
