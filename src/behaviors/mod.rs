//! The individual page enhancements.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module pairs a pure decision (always compiled, unit-tested) with a
//! hydrate-only `install` that wires it to the DOM through a [`crate::dom::Page`].
//! Behaviors share nothing except the page's activity tracker, so the
//! install order carries no meaning beyond log readability.


pub mod ages;
pub mod alerts;
pub mod anchors;
pub mod badges;
pub mod busy;
pub mod cards;
pub mod confirm;
pub mod refresh;
pub mod rows;
pub mod shortcuts;
pub mod timestamps;
pub mod validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    AlertDismiss,
    ArchiveConfirm,
    RequiredFields,
    SubmitBusy,
    PriorityBadges,
    Shortcuts,
    TimestampTooltips,
    RowHover,
    AutoRefresh,
    TicketAges,
    SmoothAnchors,
    CardEntrance,
}

impl Behavior {
    /// Every behavior, in install order.
    pub const ALL: [Self; 12] = [
        Self::AlertDismiss,
        Self::ArchiveConfirm,
        Self::RequiredFields,
        Self::SubmitBusy,
        Self::PriorityBadges,
        Self::Shortcuts,
        Self::TimestampTooltips,
        Self::RowHover,
        Self::AutoRefresh,
        Self::TicketAges,
        Self::SmoothAnchors,
        Self::CardEntrance,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AlertDismiss => "alert-dismiss",
            Self::ArchiveConfirm => "archive-confirm",
            Self::RequiredFields => "required-fields",
            Self::SubmitBusy => "submit-busy",
            Self::PriorityBadges => "priority-badges",
            Self::Shortcuts => "shortcuts",
            Self::TimestampTooltips => "timestamp-tooltips",
            Self::RowHover => "row-hover",
            Self::AutoRefresh => "auto-refresh",
            Self::TicketAges => "ticket-ages",
            Self::SmoothAnchors => "smooth-anchors",
            Self::CardEntrance => "card-entrance",
        }
    }

    /// Wire this behavior into `page`.
    ///
    /// # Errors
    ///
    /// Propagates DOM failures hit while querying or attaching listeners.
    #[cfg(feature = "hydrate")]
    pub fn install(self, page: &crate::dom::Page) -> Result<(), crate::error::EnhancerError> {
        match self {
            Self::AlertDismiss => alerts::install(page),
            Self::ArchiveConfirm => confirm::install(page),
            Self::RequiredFields => validation::install(page),
            Self::SubmitBusy => busy::install(page),
            Self::PriorityBadges => badges::install(page),
            Self::Shortcuts => shortcuts::install(page),
            Self::TimestampTooltips => timestamps::install(page),
            Self::RowHover => rows::install(page),
            Self::AutoRefresh => refresh::install(page),
            Self::TicketAges => ages::install(page),
            Self::SmoothAnchors => anchors::install(page),
            Self::CardEntrance => cards::install(page),
        }
    }
}

impl std::fmt::Display for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
