//! Inputs and outputs of the session state machine.

use std::fmt;
use std::time::Duration;

use crate::models::{Item, ItemId, SwipeDirection};

/// Every way the outside world can poke a session.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The loader delivered the next item.
    ItemAppended(Item),
    /// The loader has attempted every index.
    LoaderFinished,
    /// Like (right) or dislike (left) the current item.
    Decide(SwipeDirection),
    /// Start a super-like on the current item.
    SuperLike,
    /// The settle delay of super-like `ticket` has elapsed.
    SettleElapsed { ticket: u64 },
    /// Step back one decision.
    Undo,
    /// The image of an item finished decoding and is on screen.
    ItemLoaded(ItemId),
    /// The outgoing card finished its exit presentation.
    ExitTransitionComplete,
}

/// Why an event left the session untouched.
///
/// Rejections are silent for the user; they are only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    AnimationLocked,
    ItemLoading,
    NoCurrentItem,
    Finished,
    NoSuperLikesLeft,
    NothingToUndo,
    StaleTimer,
    DuplicateItem,
    UnknownItem,
    NoExitInProgress,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::AnimationLocked => "animation locked",
            Rejection::ItemLoading => "current item still loading",
            Rejection::NoCurrentItem => "no current item",
            Rejection::Finished => "session finished",
            Rejection::NoSuperLikesLeft => "no super-likes left",
            Rejection::NothingToUndo => "nothing to undo",
            Rejection::StaleTimer => "stale settle timer",
            Rejection::DuplicateItem => "item already in deck",
            Rejection::UnknownItem => "unknown or already loaded item",
            Rejection::NoExitInProgress => "no exit transition in progress",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Work the host must perform on behalf of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `SettleElapsed { ticket }` after `delay`.
    StartSettleTimer { ticket: u64, delay: Duration },
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    Applied,
    Scheduled(Effect),
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        !self.is_rejected()
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    pub fn effect(&self) -> Option<Effect> {
        match self {
            Outcome::Scheduled(effect) => Some(*effect),
            _ => None,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Outcome::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// What the user did last, for choosing enter/exit presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastAction {
    Swipe(SwipeDirection),
    SuperLike,
    Undo,
}
