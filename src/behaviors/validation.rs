//! Client-side required-field check before a form submits.
//!
//! A required field is blank when its value is empty after trimming. Blank
//! fields get a red border, filled ones have it cleared, and a single notice
//! covers the whole form.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::consts::REQUIRED_NOTICE;
use crate::dialogs::{Dialogs, SubmitOutcome};

#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Per-field verdicts for one submission, indexed like the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldReport {
    pub invalid: Vec<bool>,
}

impl FieldReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.invalid.iter().any(|bad| *bad)
    }
}

#[must_use]
pub fn check_required<S: AsRef<str>>(values: &[S]) -> FieldReport {
    FieldReport { invalid: values.iter().map(|v| is_blank(v.as_ref())).collect() }
}

/// Check `values` and, when any is blank, show the aggregate notice and cancel.
pub fn guard_required<S: AsRef<str>>(values: &[S], dialogs: &dyn Dialogs) -> (FieldReport, SubmitOutcome) {
    let report = check_required(values);
    if report.is_valid() {
        (report, SubmitOutcome::Proceed)
    } else {
        dialogs.alert(REQUIRED_NOTICE);
        (report, SubmitOutcome::Cancel)
    }
}

/// Current value of a form control; non-control elements read as blank.
#[cfg(feature = "hydrate")]
fn field_value(el: &web_sys::Element) -> String {
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

#[cfg(feature = "hydrate")]
fn check_form(form: &web_sys::Element, dialogs: &dyn Dialogs) -> Result<SubmitOutcome, crate::error::EnhancerError> {
    use crate::consts::{INVALID_BORDER_COLOR, REQUIRED_FIELD_SELECTOR};
    use crate::dom::{clear_style, query_all_in, set_style};

    let fields = query_all_in(form, REQUIRED_FIELD_SELECTOR)?;
    let values = fields.iter().map(field_value).collect::<Vec<_>>();
    let (report, outcome) = guard_required(&values, dialogs);
    for (field, invalid) in fields.iter().zip(report.invalid) {
        if invalid {
            set_style(field, "border-color", INVALID_BORDER_COLOR)?;
        } else {
            clear_style(field, "border-color")?;
        }
    }
    Ok(outcome)
}

#[cfg(feature = "hydrate")]
pub fn install(page: &crate::dom::Page) -> Result<(), crate::error::EnhancerError> {
    use crate::consts::FORM_SELECTOR;
    use crate::dialogs::BrowserDialogs;

    for form in page.query_all(FORM_SELECTOR)? {
        let dialogs = BrowserDialogs { window: page.window.clone() };
        let target = form.clone();
        page.scope.listen(&form, "submit", move |event| match check_form(&target, &dialogs) {
            Ok(SubmitOutcome::Proceed) => {}
            Ok(SubmitOutcome::Cancel) => event.prevent_default(),
            Err(err) => log::warn!("ticket-enhancer: required-field check failed: {err}"),
        })?;
    }
    Ok(())
}
