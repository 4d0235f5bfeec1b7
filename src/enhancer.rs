//! The page enhancer: one instance per page, owning every behavior it installs.
//!
//! ARCHITECTURE
//! ============
//! `initialize` binds to the document and installs each [`Behavior`] into a
//! fresh [`crate::scope::Scope`]; `dispose` closes that scope, which cancels
//! timers, runs pending reverts, removes listeners, and drops injected styles. Behaviors are
//! independent, so one failing to install is logged and skipped rather than
//! aborting the rest.
//!
//! Native builds have no DOM; there every install is a no-op that still
//! records the behavior, keeping the lifecycle testable.

#[cfg(test)]
#[path = "enhancer_test.rs"]
mod enhancer_test;

use std::rc::Rc;

use crate::activity::ActivityTracker;
use crate::behaviors::Behavior;
use crate::config::EnhancerConfig;
use crate::error::EnhancerError;

pub struct Enhancer {
    config: Rc<EnhancerConfig>,
    tracker: ActivityTracker,
    installed: Vec<Behavior>,
    #[cfg(feature = "hydrate")]
    scope: Option<crate::scope::Scope>,
}

impl Enhancer {
    /// Build an enhancer for a page loaded at `now_ms` (epoch milliseconds).
    #[must_use]
    pub fn new(config: EnhancerConfig, now_ms: f64) -> Self {
        Self {
            config: Rc::new(config),
            tracker: ActivityTracker::new(now_ms),
            installed: Vec::new(),
            #[cfg(feature = "hydrate")]
            scope: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EnhancerConfig {
        &self.config
    }

    #[must_use]
    pub fn tracker(&self) -> &ActivityTracker {
        &self.tracker
    }

    #[must_use]
    pub fn installed(&self) -> &[Behavior] {
        &self.installed
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.installed.is_empty()
    }

    /// Install every behavior. A second call while active does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error when there is no window or document to bind to.
    /// Individual behavior failures are logged, not returned.
    pub fn initialize(&mut self) -> Result<(), EnhancerError> {
        if self.is_active() {
            return Ok(());
        }

        #[cfg(feature = "hydrate")]
        {
            let scope = crate::scope::Scope::new();
            let page = crate::dom::Page::current(scope.clone(), Rc::clone(&self.config), self.tracker.clone())?;
            for behavior in Behavior::ALL {
                match behavior.install(&page) {
                    Ok(()) => {
                        log::debug!("ticket-enhancer: installed {behavior}");
                        self.installed.push(behavior);
                    }
                    Err(err) => log::warn!("ticket-enhancer: skipping {behavior}: {err}"),
                }
            }
            self.scope = Some(scope);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.installed.extend(Behavior::ALL);
        }

        log::info!("Service Ticket System - Initialized ({} behaviors)", self.installed.len());
        Ok(())
    }

    /// Remove everything `initialize` installed. Safe to call repeatedly; the
    /// enhancer can be initialized again afterwards.
    pub fn dispose(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(scope) = self.scope.take() {
                scope.close();
            }
        }
        if !self.installed.is_empty() {
            log::debug!("ticket-enhancer: disposed {} behaviors", self.installed.len());
        }
        self.installed.clear();
    }
}

impl Drop for Enhancer {
    fn drop(&mut self) {
        self.dispose();
    }
}
