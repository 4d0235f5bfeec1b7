//! In-page anchor links scroll smoothly instead of jumping.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

/// Selector for the element an `href="#id"` points at. A bare `#` has no
/// target; the click is still cancelled.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

#[cfg(feature = "hydrate")]
fn scroll_to(doc: &web_sys::Document, href: &str) -> Result<(), crate::error::EnhancerError> {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    let Some(selector) = anchor_target(href) else {
        return Ok(());
    };
    if let Some(target) = doc.query_selector(selector)? {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
pub fn install(page: &crate::dom::Page) -> Result<(), crate::error::EnhancerError> {
    use crate::consts::ANCHOR_SELECTOR;
    use crate::dom::report;

    for anchor in page.query_all(ANCHOR_SELECTOR)? {
        let doc = page.document.clone();
        let link = anchor.clone();
        page.scope.listen(&anchor, "click", move |event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            report("anchor scroll", scroll_to(&doc, &href));
        })?;
    }
    Ok(())
}
