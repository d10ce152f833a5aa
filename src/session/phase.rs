//! Session lifecycle phases.

use std::fmt;

/// Where a session is in its lifecycle.
///
/// ```text
/// Loading ──first item──▶ Browsing ◀──loader catches up── CatchingUp
///                            │  ▲                              ▲
///                            │  └──────────undo────────┐       │
///                            ├──position ≥ loaded──────┼───────┘
///                            ├──swipe onto target──▶ FinishPending ──exit done──▶ Finished
///                            └──super-like onto target──────────────────────────▶ Finished
/// ```
///
/// Undo from `FinishPending` or `Finished` always returns to `Browsing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No item has arrived yet.
    #[default]
    Loading,
    /// The current item is on screen.
    Browsing,
    /// The viewer is ahead of the loader.
    CatchingUp,
    /// The last swipe is done; waiting for its exit presentation.
    FinishPending,
    /// Terminal until undone; the summary is shown.
    Finished,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Loading => "loading",
            SessionPhase::Browsing => "browsing",
            SessionPhase::CatchingUp => "catching-up",
            SessionPhase::FinishPending => "finish-pending",
            SessionPhase::Finished => "finished",
        }
    }

    /// No forward decision can be made in this phase.
    pub fn is_closed(&self) -> bool {
        matches!(self, SessionPhase::FinishPending | SessionPhase::Finished)
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
