//! Blocking confirm/alert prompts used by the submit guards.
//!
//! The guards decide through this trait so their outcome can be tested
//! without a browser.

/// Whether a guarded submission may continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Proceed,
    Cancel,
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_cancelled(self) -> bool {
        self == Self::Cancel
    }
}

pub trait Dialogs {
    /// Ask the operator to affirm `message`. `false` means rejected.
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}

/// `window.confirm` / `window.alert`.
#[cfg(feature = "hydrate")]
pub struct BrowserDialogs {
    pub window: web_sys::Window,
}

#[cfg(feature = "hydrate")]
impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        // A prompt the browser refuses to show counts as a rejection.
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::warn!("ticket-enhancer: alert failed: {err:?}");
        }
    }
}
