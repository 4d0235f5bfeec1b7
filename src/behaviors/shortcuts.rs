//! Alt+letter navigation between the main ticket views.
//!
//! | Chord | Route |
//! |-------|-------|
//! | Alt+H | `/` |
//! | Alt+Q | `/tickets/queue` |
//! | Alt+M | `/tickets/my-tickets` |
//! | Alt+A | `/tickets` |
//! | Alt+N | `/tickets/new` |
//!
//! Letters match the browser's `KeyboardEvent.key` exactly, so they are
//! lowercase. Shortcuts fire even while typing in a field unless the config
//! sets `guard_editable_shortcuts`.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Queue,
    MyTickets,
    AllTickets,
    NewTicket,
}

impl Route {
    pub const ALL: [Self; 5] = [Self::Dashboard, Self::Queue, Self::MyTickets, Self::AllTickets, Self::NewTicket];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Queue => "/tickets/queue",
            Self::MyTickets => "/tickets/my-tickets",
            Self::AllTickets => "/tickets",
            Self::NewTicket => "/tickets/new",
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Dashboard => "h",
            Self::Queue => "q",
            Self::MyTickets => "m",
            Self::AllTickets => "a",
            Self::NewTicket => "n",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Queue => "Ticket Queue",
            Self::MyTickets => "My Tickets",
            Self::AllTickets => "All Tickets",
            Self::NewTicket => "New Ticket",
        }
    }
}

/// The parts of a `keydown` event the router looks at. Other modifiers
/// do not affect the match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub alt: bool,
    /// Focus is inside an input, textarea, select, or contenteditable.
    pub in_editable: bool,
}

impl KeyChord {
    #[must_use]
    pub fn alt(key: &str) -> Self {
        Self { key: key.to_owned(), alt: true, ..Self::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Suppress the browser default and go to the route.
    Navigate(Route),
    Ignore,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShortcutRouter {
    pub guard_editable: bool,
}

impl ShortcutRouter {
    #[must_use]
    pub fn resolve(self, chord: &KeyChord) -> KeyOutcome {
        if !chord.alt || (self.guard_editable && chord.in_editable) {
            return KeyOutcome::Ignore;
        }
        Route::ALL
            .into_iter()
            .find(|route| route.key() == chord.key)
            .map_or(KeyOutcome::Ignore, KeyOutcome::Navigate)
    }
}

/// One line per shortcut, for the console banner.
#[must_use]
pub fn help_lines() -> Vec<String> {
    Route::ALL
        .into_iter()
        .map(|route| format!("Alt + {}: {}", route.key().to_uppercase(), route.label()))
        .collect()
}

#[cfg(feature = "hydrate")]
fn chord_from_event(event: &web_sys::KeyboardEvent, doc: &web_sys::Document) -> KeyChord {
    KeyChord {
        key: event.key(),
        alt: event.alt_key(),
        in_editable: doc.active_element().is_some_and(|el| is_editable(&el)),
    }
}

#[cfg(feature = "hydrate")]
fn is_editable(el: &web_sys::Element) -> bool {
    use wasm_bindgen::JsCast;

    matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
        || el.dyn_ref::<web_sys::HtmlElement>().is_some_and(web_sys::HtmlElement::is_content_editable)
}

#[cfg(feature = "hydrate")]
pub fn install(page: &crate::dom::Page) -> Result<(), crate::error::EnhancerError> {
    use wasm_bindgen::JsCast;

    log::info!("Keyboard shortcuts:");
    for line in help_lines() {
        log::info!("{line}");
    }

    let router = ShortcutRouter { guard_editable: page.config.guard_editable_shortcuts };
    let doc = page.document.clone();
    let location = page.window.location();
    page.scope.listen(&page.document, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };
        if let KeyOutcome::Navigate(route) = router.resolve(&chord_from_event(key_event, &doc)) {
            event.prevent_default();
            if let Err(err) = location.set_href(route.path()) {
                log::warn!("ticket-enhancer: navigation to {} failed: {err:?}", route.path());
            }
        }
    })
}
