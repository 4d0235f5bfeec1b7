//! Flash alerts fade out and leave the page a few seconds after load.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

/// When an alert starts fading and when it is removed, relative to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissSchedule {
    pub delay_ms: u32,
    pub fade_ms: u32,
}

impl DismissSchedule {
    #[must_use]
    pub fn fade_at_ms(self) -> u32 {
        self.delay_ms
    }

    #[must_use]
    pub fn remove_at_ms(self) -> u32 {
        self.delay_ms.saturating_add(self.fade_ms)
    }

    /// CSS `transition` value for the fade.
    #[must_use]
    pub fn transition(self) -> String {
        format!("opacity {}s ease", f64::from(self.fade_ms) / 1000.0)
    }
}

#[cfg(feature = "hydrate")]
pub fn install(page: &crate::dom::Page) -> Result<(), crate::error::EnhancerError> {
    use crate::consts::ALERT_SELECTOR;
    use crate::dom::{report, set_style};

    let schedule = DismissSchedule { delay_ms: page.config.alert_delay_ms, fade_ms: page.config.alert_fade_ms };
    for alert in page.query_all(ALERT_SELECTOR)? {
        let fading = alert.clone();
        page.scope.timeout(schedule.fade_at_ms(), move || {
            report("alert fade", set_style(&fading, "opacity", "0"));
            report("alert fade", set_style(&fading, "transition", &schedule.transition()));
        });
        // Element::remove on a detached node is a no-op.
        page.scope.timeout(schedule.remove_at_ms(), move || alert.remove());
    }
    Ok(())
}
