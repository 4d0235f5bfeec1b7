//! Submit buttons show a busy state while the form posts.
//!
//! Nothing observes the response, so the button is restored on a timer rather
//! than on completion. Buttons with a non-empty `data-no-loading` are left
//! alone. Disposing the enhancer restores a busy button immediately.

#[cfg(test)]
#[path = "busy_test.rs"]
mod busy_test;

use crate::consts::{BUSY_LABEL, BUSY_OPACITY};

/// Whether the button's `data-no-loading` value opts it out. Mirrors a
/// truthy `dataset.noLoading`: present but empty does not opt out.
#[must_use]
pub fn opts_out(no_loading: Option<&str>) -> bool {
    no_loading.is_some_and(|value| !value.is_empty())
}

/// Whether a submission should put its button into the busy state.
///
/// Every submission does by default, even one another handler cancelled;
/// `skip_cancelled` leaves those buttons usable.
#[must_use]
pub fn should_enter_busy(submission_cancelled: bool, opted_out: bool, skip_cancelled: bool) -> bool {
    !opted_out && !(skip_cancelled && submission_cancelled)
}

/// What a submit button looks like in each state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonLook {
    pub disabled: bool,
    pub label: String,
    pub opacity: &'static str,
}

impl ButtonLook {
    #[must_use]
    pub fn busy() -> Self {
        Self { disabled: true, label: BUSY_LABEL.to_owned(), opacity: BUSY_OPACITY }
    }

    #[must_use]
    pub fn restored(original_label: &str) -> Self {
        Self { disabled: false, label: original_label.to_owned(), opacity: "1" }
    }
}

#[cfg(feature = "hydrate")]
fn apply(button: &web_sys::Element, look: &ButtonLook) -> Result<(), crate::error::EnhancerError> {
    use wasm_bindgen::JsCast;

    if let Some(html_button) = button.dyn_ref::<web_sys::HtmlButtonElement>() {
        html_button.set_disabled(look.disabled);
    }
    button.set_text_content(Some(&look.label));
    crate::dom::set_style(button, "opacity", look.opacity)
}

#[cfg(feature = "hydrate")]
pub fn install(page: &crate::dom::Page) -> Result<(), crate::error::EnhancerError> {
    use crate::consts::{FORM_SELECTOR, NO_LOADING_ATTR, SUBMIT_BUTTON_SELECTOR};
    use crate::dom::report;

    for form in page.query_all(FORM_SELECTOR)? {
        let target = form.clone();
        let scope = page.scope.clone();
        let revert_ms = page.config.busy_revert_ms;
        let skip_cancelled = page.config.skip_busy_on_cancelled;
        page.scope.listen(&form, "submit", move |event| {
            let button = match target.query_selector(SUBMIT_BUTTON_SELECTOR) {
                Ok(Some(button)) => button,
                Ok(None) => return,
                Err(err) => {
                    log::warn!("ticket-enhancer: submit button lookup failed: {err:?}");
                    return;
                }
            };
            let opted_out = opts_out(button.get_attribute(NO_LOADING_ATTR).as_deref());
            if !should_enter_busy(event.default_prevented(), opted_out, skip_cancelled) {
                return;
            }
            let original = button.text_content().unwrap_or_default();
            report("busy state", apply(&button, &ButtonLook::busy()));
            scope.settle_after(revert_ms, move || {
                report("busy revert", apply(&button, &ButtonLook::restored(&original)));
            });
        })?;
    }
    Ok(())
}
