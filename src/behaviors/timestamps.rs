//! Hover tooltips with the full local date and time.

#[cfg(test)]
#[path = "timestamps_test.rs"]
mod timestamps_test;

use crate::timestamp::{parse_instant, tooltip_text};

/// Tooltip for a raw `data-timestamp` value; `None` if it does not parse.
#[must_use]
pub fn tooltip_for(raw: &str) -> Option<String> {
    parse_instant(raw).map(tooltip_text)
}

#[cfg(feature = "hydrate")]
pub fn install(page: &crate::dom::Page) -> Result<(), crate::error::EnhancerError> {
    use crate::consts::{TIMESTAMP_ATTR, TIMESTAMP_SELECTOR};

    for element in page.query_all(TIMESTAMP_SELECTOR)? {
        let raw = element.get_attribute(TIMESTAMP_ATTR).unwrap_or_default();
        match tooltip_for(&raw) {
            Some(title) => element.set_attribute("title", &title)?,
            None => log::debug!("ticket-enhancer: unparseable timestamp {raw:?}"),
        }
    }
    Ok(())
}
