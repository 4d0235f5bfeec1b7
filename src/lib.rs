//! # ticket-enhancer
//!
//! Progressive-enhancement layer for the server-rendered helpdesk pages,
//! compiled to WebAssembly. The pages work without it; this crate only adds
//! alert dismissal, submit guards, keyboard navigation, relative ticket ages,
//! idle auto-refresh, and a handful of entrance and hover effects.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`enhancer`] | The page enhancer instance: initialize/dispose lifecycle |
//! | [`behaviors`] | One module per enhancement, pure decision + DOM install |
//! | [`activity`] | Last-user-activity tracker read by the refresh poller |
//! | [`timestamp`] | Parsing and local rendering of server timestamps |
//! | [`pending`] | One-shot tasks that are cancelled or settled on dispose |
//! | [`dialogs`] | Confirm/alert seam used by the submit guards |
//! | [`config`] | Timing configuration loaded from the page |
//! | [`consts`] | Selectors, messages, and default timings |
//! | [`error`] | Crate error type |
//!
//! Everything that touches the browser sits behind the `hydrate` feature.
//! Native builds keep the decision logic and turn DOM entry points into
//! no-ops, which is how the unit tests run.

pub mod activity;
pub mod behaviors;
pub mod config;
pub mod consts;
pub mod dialogs;
pub mod enhancer;
pub mod error;
pub mod pending;
pub mod timestamp;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod scope;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
use crate::config::EnhancerConfig;
#[cfg(feature = "hydrate")]
use crate::enhancer::Enhancer;

#[cfg(feature = "hydrate")]
thread_local! {
    static ACTIVE: RefCell<Option<Enhancer>> = const { RefCell::new(None) };
}

/// WASM entry point, run once per document load.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("ticket-enhancer: logger already installed");
    }

    let config = match dom::document().and_then(|doc| EnhancerConfig::load_from_document(&doc)) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ticket-enhancer: using default config: {err}");
            EnhancerConfig::default()
        }
    };

    let mut enhancer = Enhancer::new(config, js_sys::Date::now());
    if let Err(err) = enhancer.initialize() {
        log::error!("ticket-enhancer: initialization failed: {err}");
        return;
    }
    ACTIVE.with(|slot| {
        if let Some(mut previous) = slot.borrow_mut().replace(enhancer) {
            previous.dispose();
        }
    });
}

/// Tear down the active enhancer, removing its listeners and timers.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn dispose() {
    ACTIVE.with(|slot| {
        if let Some(mut enhancer) = slot.borrow_mut().take() {
            enhancer.dispose();
        }
    });
}
