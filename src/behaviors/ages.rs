//! Relative "created N ago" labels on ticket rows.
//!
//! Ages are whole minutes, floored, rendered in one of three bands: minutes
//! under an hour, hours under a day, days otherwise. Labels refresh on a
//! fixed tick while the page is open.

#[cfg(test)]
#[path = "ages_test.rs"]
mod ages_test;

use std::fmt;

use chrono::{DateTime, Utc};

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 1_440;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

impl AgeBand {
    #[must_use]
    pub fn from_minutes(minutes: i64) -> Self {
        if minutes < MINUTES_PER_HOUR {
            Self::Minutes(minutes)
        } else if minutes < MINUTES_PER_DAY {
            Self::Hours(minutes / MINUTES_PER_HOUR)
        } else {
            Self::Days(minutes / MINUTES_PER_DAY)
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes(n) => write!(f, "{n} min ago"),
            Self::Hours(n) => write!(f, "{n} hours ago"),
            Self::Days(n) => write!(f, "{n} days ago"),
        }
    }
}

/// Whole minutes from `created` to `now`. Creation instants in the future
/// (clock skew between server and viewer) read as zero.
#[must_use]
pub fn elapsed_minutes(created: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - created).num_minutes().max(0)
}

#[must_use]
pub fn age_label(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    AgeBand::from_minutes(elapsed_minutes(created, now)).to_string()
}

/// Rewrite every age label in the document against the current time.
#[cfg(feature = "hydrate")]
fn refresh_labels(doc: &web_sys::Document) -> Result<(), crate::error::EnhancerError> {
    use crate::consts::{CREATED_AT_ATTR, CREATED_AT_SELECTOR};
    use crate::timestamp::parse_instant;

    let now = Utc::now();
    for element in crate::dom::query_all(doc, CREATED_AT_SELECTOR)? {
        let raw = element.get_attribute(CREATED_AT_ATTR).unwrap_or_default();
        if let Some(created) = parse_instant(&raw) {
            element.set_text_content(Some(&age_label(created, now)));
        }
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
pub fn install(page: &crate::dom::Page) -> Result<(), crate::error::EnhancerError> {
    use crate::consts::CREATED_AT_SELECTOR;
    use crate::dom::report;

    if page.document.query_selector(CREATED_AT_SELECTOR)?.is_none() {
        return Ok(());
    }
    refresh_labels(&page.document)?;
    let doc = page.document.clone();
    page.scope.interval(page.config.age_tick_ms, move || report("ticket ages", refresh_labels(&doc)));
    Ok(())
}
