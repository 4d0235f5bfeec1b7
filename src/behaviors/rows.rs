//! Stats table rows lift slightly under the pointer.

pub const HOVER_TRANSFORM: &str = "scale(1.01)";
pub const REST_TRANSFORM: &str = "scale(1)";
pub const HOVER_TRANSITION: &str = "transform 0.2s ease";

#[cfg(feature = "hydrate")]
pub fn install(page: &crate::dom::Page) -> Result<(), crate::error::EnhancerError> {
    use crate::consts::STATS_ROW_SELECTOR;
    use crate::dom::{report, set_style};

    for row in page.query_all(STATS_ROW_SELECTOR)? {
        let entered = row.clone();
        page.scope.listen(&row, "mouseenter", move |_| {
            report("row hover", set_style(&entered, "transform", HOVER_TRANSFORM));
            report("row hover", set_style(&entered, "transition", HOVER_TRANSITION));
        })?;
        let left = row.clone();
        page.scope.listen(&row, "mouseleave", move |_| {
            report("row hover", set_style(&left, "transform", REST_TRANSFORM));
        })?;
    }
    Ok(())
}
