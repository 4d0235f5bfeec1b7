//! Enhancer configuration.
//!
//! Pages may override the default timings with a meta tag:
//!
//! ```html
//! <meta name="ticket-enhancer-config" content='{"alert_delay_ms": 8000}'>
//! ```
//!
//! Every field is optional. A missing tag yields [`EnhancerConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    AGE_TICK_MS, ALERT_DELAY_MS, ALERT_FADE_MS, BUSY_REVERT_MS, CARD_STAGGER_MS, REFRESH_CHECK_INTERVAL_MS,
    REFRESH_IDLE_THRESHOLD_MS,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be greater than zero")]
    ZeroInterval { field: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnhancerConfig {
    pub alert_delay_ms: u32,
    pub alert_fade_ms: u32,
    pub busy_revert_ms: u32,
    /// Poll period of the idle check. Deliberately separate from the idle
    /// threshold: a page idle since load reloads at the first check, not at
    /// the threshold.
    pub refresh_check_interval_ms: u32,
    pub refresh_idle_threshold_ms: u32,
    pub age_tick_ms: u32,
    pub card_stagger_ms: u32,
    /// Ignore keyboard shortcuts while focus is in an editable field.
    pub guard_editable_shortcuts: bool,
    /// Leave the submit button usable when another handler cancelled the
    /// submission (e.g. a blank required field).
    pub skip_busy_on_cancelled: bool,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            alert_delay_ms: ALERT_DELAY_MS,
            alert_fade_ms: ALERT_FADE_MS,
            busy_revert_ms: BUSY_REVERT_MS,
            refresh_check_interval_ms: REFRESH_CHECK_INTERVAL_MS,
            refresh_idle_threshold_ms: REFRESH_IDLE_THRESHOLD_MS,
            age_tick_ms: AGE_TICK_MS,
            card_stagger_ms: CARD_STAGGER_MS,
            guard_editable_shortcuts: false,
            skip_busy_on_cancelled: false,
        }
    }
}

impl EnhancerConfig {
    /// Parse and validate a JSON override document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and
    /// [`ConfigError::ZeroInterval`] when a repeating timer period is zero.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make a repeating timer spin.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroInterval`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_check_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval { field: "refresh_check_interval_ms" });
        }
        if self.age_tick_ms == 0 {
            return Err(ConfigError::ZeroInterval { field: "age_tick_ms" });
        }
        Ok(())
    }

    /// Read overrides from the page's config meta tag, if present.
    ///
    /// # Errors
    ///
    /// Propagates DOM query failures and [`ConfigError`] for a bad tag.
    #[cfg(feature = "hydrate")]
    pub fn load_from_document(doc: &web_sys::Document) -> Result<Self, crate::error::EnhancerError> {
        let Some(meta) = doc.query_selector(crate::consts::CONFIG_META_SELECTOR)? else {
            return Ok(Self::default());
        };
        match meta.get_attribute("content") {
            Some(raw) if !raw.trim().is_empty() => Ok(Self::from_json(&raw)?),
            _ => Ok(Self::default()),
        }
    }
}
