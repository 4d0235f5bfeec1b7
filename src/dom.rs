//! Browser glue shared by the behavior installers.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::activity::ActivityTracker;
use crate::config::EnhancerConfig;
use crate::error::EnhancerError;
use crate::scope::Scope;

/// Everything an installer needs: the document, the owning scope, the shared
/// configuration, and the activity tracker.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub scope: Scope,
    pub config: Rc<EnhancerConfig>,
    pub tracker: ActivityTracker,
}

impl Page {
    /// Bind to the current window and document.
    ///
    /// # Errors
    ///
    /// Fails outside a browsing context.
    pub fn current(scope: Scope, config: Rc<EnhancerConfig>, tracker: ActivityTracker) -> Result<Self, EnhancerError> {
        let window = window()?;
        let document = window.document().ok_or(EnhancerError::MissingDocument)?;
        Ok(Self { window, document, scope, config, tracker })
    }

    /// All elements in the document matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`EnhancerError::Dom`] for an invalid selector.
    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>, EnhancerError> {
        query_all(&self.document, selector)
    }
}

/// # Errors
///
/// Fails outside a browsing context.
pub fn window() -> Result<Window, EnhancerError> {
    web_sys::window().ok_or(EnhancerError::MissingWindow)
}

/// # Errors
///
/// Fails outside a browsing context or when the window has no document.
pub fn document() -> Result<Document, EnhancerError> {
    window()?.document().ok_or(EnhancerError::MissingDocument)
}

/// Elements in `doc` matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`EnhancerError::Dom`] for an invalid selector.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, EnhancerError> {
    Ok(elements(&doc.query_selector_all(selector)?))
}

/// Descendants of `root` matching `selector`.
///
/// # Errors
///
/// Returns [`EnhancerError::Dom`] for an invalid selector.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, EnhancerError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .flat_map(|node| node.dyn_into::<Element>())
        .collect()
}

/// Set one inline style property. Elements without inline style (non-HTML)
/// are skipped.
///
/// # Errors
///
/// Returns [`EnhancerError::Dom`] if the style declaration rejects the write.
pub fn set_style(el: &Element, property: &str, value: &str) -> Result<(), EnhancerError> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

/// Remove one inline style property.
///
/// # Errors
///
/// Returns [`EnhancerError::Dom`] if the style declaration rejects the write.
pub fn clear_style(el: &Element, property: &str) -> Result<(), EnhancerError> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().remove_property(property)?;
    }
    Ok(())
}

/// Log and swallow a failure inside an event or timer callback.
pub fn report(context: &str, result: Result<(), EnhancerError>) {
    if let Err(err) = result {
        log::warn!("ticket-enhancer: {context}: {err}");
    }
}
