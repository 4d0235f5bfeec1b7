//! Urgent priority badges pulse; other priority badges stay still.

#[cfg(test)]
#[path = "badges_test.rs"]
mod badges_test;

use crate::consts::URGENT_ANIMATION;

/// Inline `animation` value for a priority badge.
#[must_use]
pub fn badge_animation(is_urgent: bool) -> &'static str {
    if is_urgent { URGENT_ANIMATION } else { "none" }
}

/// Append the pulse keyframes to `<head>` unless already present. Returns the
/// injected element, or `None` when an earlier install left one in place.
#[cfg(feature = "hydrate")]
fn inject_keyframes(doc: &web_sys::Document) -> Result<Option<web_sys::Element>, crate::error::EnhancerError> {
    use crate::consts::{PULSE_KEYFRAMES, PULSE_STYLE_ID};
    use crate::error::EnhancerError;

    if doc.get_element_by_id(PULSE_STYLE_ID).is_some() {
        return Ok(None);
    }
    let head = doc.head().ok_or(EnhancerError::MissingHead)?;
    let style = doc.create_element("style")?;
    style.set_id(PULSE_STYLE_ID);
    style.set_text_content(Some(PULSE_KEYFRAMES));
    head.append_child(&style)?;
    Ok(Some(style))
}

#[cfg(feature = "hydrate")]
pub fn install(page: &crate::dom::Page) -> Result<(), crate::error::EnhancerError> {
    use crate::consts::{PRIORITY_BADGE_SELECTOR, URGENT_BADGE_CLASS};
    use crate::dom::set_style;

    if let Some(style) = inject_keyframes(&page.document)? {
        page.scope.defer(move || style.remove());
    }
    for badge in page.query_all(PRIORITY_BADGE_SELECTOR)? {
        let urgent = badge.class_list().contains(URGENT_BADGE_CLASS);
        set_style(&badge, "animation", badge_animation(urgent))?;
    }
    Ok(())
}
