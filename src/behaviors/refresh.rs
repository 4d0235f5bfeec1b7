//! Idle-aware reload for the queue and dashboard views.
//!
//! A repeating check runs every `check_interval_ms`; it reloads only when the
//! operator has been idle for longer than `idle_threshold_ms`. The two periods
//! differ on purpose: an untouched page reloads on the first check after the
//! threshold passes, so about once per check interval, never mid-interaction.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use crate::activity::ActivityTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    pub check_interval_ms: u32,
    pub idle_threshold_ms: u32,
}

impl RefreshPolicy {
    /// Queue views (any path containing `/queue`) and the dashboard root.
    #[must_use]
    pub fn applies_to(path: &str) -> bool {
        path.contains("/queue") || path == "/"
    }

    /// Decide at a check tick whether to reload.
    #[must_use]
    pub fn should_reload(self, tracker: &ActivityTracker, now_ms: f64) -> bool {
        tracker.idle_ms(now_ms) > f64::from(self.idle_threshold_ms)
    }
}

#[cfg(feature = "hydrate")]
pub fn install(page: &crate::dom::Page) -> Result<(), crate::error::EnhancerError> {
    use crate::activity::ACTIVITY_EVENTS;

    let path = page.window.location().pathname()?;
    if !RefreshPolicy::applies_to(&path) {
        return Ok(());
    }

    for event in ACTIVITY_EVENTS {
        let tracker = page.tracker.clone();
        page.scope.listen(&page.document, event, move |_| tracker.record(js_sys::Date::now()))?;
    }

    let policy = RefreshPolicy {
        check_interval_ms: page.config.refresh_check_interval_ms,
        idle_threshold_ms: page.config.refresh_idle_threshold_ms,
    };
    let tracker = page.tracker.clone();
    let location = page.window.location();
    page.scope.interval(policy.check_interval_ms, move || {
        if policy.should_reload(&tracker, js_sys::Date::now()) {
            log::info!("Auto-refreshing page...");
            if let Err(err) = location.reload() {
                log::warn!("ticket-enhancer: reload failed: {err:?}");
            }
        }
    });
    Ok(())
}
