//! Selectors, user-facing strings, and default timings.

// ── Timing defaults (ms) ────────────────────────────────────────

/// Delay before an alert starts fading out.
pub const ALERT_DELAY_MS: u32 = 5_000;

/// Length of the alert fade; the element is removed when it ends.
pub const ALERT_FADE_MS: u32 = 500;

/// Time after which a busy submit button is restored.
pub const BUSY_REVERT_MS: u32 = 10_000;

/// How often the auto-refresh poller checks for idleness.
pub const REFRESH_CHECK_INTERVAL_MS: u32 = 60_000;

/// Idle time the poller must see before it reloads the page.
pub const REFRESH_IDLE_THRESHOLD_MS: u32 = 30_000;

/// How often ticket age labels are recomputed.
pub const AGE_TICK_MS: u32 = 60_000;

/// Per-index delay between summary card reveals.
pub const CARD_STAGGER_MS: u32 = 100;

// ── Selectors ───────────────────────────────────────────────────

pub const ALERT_SELECTOR: &str = ".alert";
pub const ARCHIVE_SUBMIT_SELECTOR: &str = "form[action*=\"/archive\"] button[type=\"submit\"]";
pub const FORM_SELECTOR: &str = "form";
pub const REQUIRED_FIELD_SELECTOR: &str = "[required]";
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
pub const PRIORITY_BADGE_SELECTOR: &str = ".badge-priority";
pub const URGENT_BADGE_CLASS: &str = "badge-urgent";
pub const TIMESTAMP_SELECTOR: &str = "[data-timestamp]";
pub const CREATED_AT_SELECTOR: &str = "[data-created-at]";
pub const STATS_ROW_SELECTOR: &str = ".stats-table tr";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const STAT_CARD_SELECTOR: &str = ".stat-card";
pub const CONFIG_META_SELECTOR: &str = "meta[name=\"ticket-enhancer-config\"]";

/// `data-*` attribute that opts a submit button out of the busy state.
pub const NO_LOADING_ATTR: &str = "data-no-loading";
pub const TIMESTAMP_ATTR: &str = "data-timestamp";
pub const CREATED_AT_ATTR: &str = "data-created-at";

// ── Messages ────────────────────────────────────────────────────

pub const ARCHIVE_PROMPT: &str =
    "Are you sure you want to archive this ticket? This action will remove it from active views.";
pub const REQUIRED_NOTICE: &str = "Please fill in all required fields.";
pub const BUSY_LABEL: &str = "Processing...";

// ── Styling ─────────────────────────────────────────────────────

pub const INVALID_BORDER_COLOR: &str = "#ef4444";
pub const BUSY_OPACITY: &str = "0.7";
pub const PULSE_STYLE_ID: &str = "ticket-enhancer-pulse";
pub const URGENT_ANIMATION: &str = "pulse 2s infinite";

/// Keyframes backing [`URGENT_ANIMATION`], injected once into `<head>`.
pub const PULSE_KEYFRAMES: &str = "
    @keyframes pulse {
        0%, 100% {
            opacity: 1;
            box-shadow: 0 0 0 0 rgba(220, 38, 38, 0.7);
        }
        50% {
            opacity: 0.9;
            box-shadow: 0 0 0 8px rgba(220, 38, 38, 0);
        }
    }
";
