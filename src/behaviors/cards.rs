//! Dashboard stat cards slide in one after another. Disposing the enhancer
//! mid-stagger reveals the remaining cards at once.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

pub const HIDDEN_OFFSET: &str = "translateY(20px)";
pub const SHOWN_OFFSET: &str = "translateY(0)";
pub const REVEAL_TRANSITION: &str = "all 0.5s ease";

/// Delay before card `index` (document order) is revealed.
#[must_use]
pub fn reveal_delay_ms(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(stagger_ms))
}

#[cfg(feature = "hydrate")]
pub fn install(page: &crate::dom::Page) -> Result<(), crate::error::EnhancerError> {
    use crate::consts::STAT_CARD_SELECTOR;
    use crate::dom::{report, set_style};

    for (index, card) in page.query_all(STAT_CARD_SELECTOR)?.into_iter().enumerate() {
        set_style(&card, "opacity", "0")?;
        set_style(&card, "transform", HIDDEN_OFFSET)?;
        page.scope.settle_after(reveal_delay_ms(index, page.config.card_stagger_ms), move || {
            report("card reveal", set_style(&card, "transition", REVEAL_TRANSITION));
            report("card reveal", set_style(&card, "opacity", "1"));
            report("card reveal", set_style(&card, "transform", SHOWN_OFFSET));
        });
    }
    Ok(())
}
