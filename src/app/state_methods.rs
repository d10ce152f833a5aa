//! Tick-driven state on App: animations and the exit transition.

use super::App;
use crate::models::{Decision, Item};
use crate::session::{SessionEvent, SessionPhase};

/// Ticks the outgoing card stays on screen after a swipe.
pub const EXIT_TICKS: u16 = 22;

/// The card that was just swiped away.
#[derive(Debug, Clone)]
pub struct ExitAnimation {
    pub item: Item,
    pub decision: Decision,
    pub ticks_left: u16,
}

impl ExitAnimation {
    pub fn new(item: Item, decision: Decision) -> Self {
        Self {
            item,
            decision,
            ticks_left: EXIT_TICKS,
        }
    }

    /// 0.0 when it starts, 1.0 when done.
    pub fn progress(&self) -> f32 {
        1.0 - f32::from(self.ticks_left) / f32::from(EXIT_TICKS)
    }
}

impl App {
    /// Advance animations by one frame.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.is_animating() {
            self.mark_dirty();
        }

        let finished = match self.exit.as_mut() {
            Some(exit) => {
                exit.ticks_left = exit.ticks_left.saturating_sub(1);
                self.needs_redraw = true;
                exit.ticks_left == 0
            }
            None => false,
        };
        if finished {
            self.complete_exit();
        }
    }

    /// Something on screen changes every frame (spinner, settle overlay).
    fn is_animating(&self) -> bool {
        let waiting_for_deck = !self.session.is_deck_complete()
            && matches!(
                self.session.phase(),
                SessionPhase::Loading | SessionPhase::CatchingUp
            );
        let image_loading = self
            .session
            .current_item()
            .is_some_and(|item| self.session.is_item_loading(&item.id));
        waiting_for_deck || image_loading || self.session.is_locked()
    }

    /// Begin the exit transition for the most recent rating.
    pub(crate) fn start_exit(&mut self) {
        if let Some(rating) = self.session.ratings().last() {
            self.exit = Some(ExitAnimation::new(rating.item.clone(), rating.decision));
        }
    }

    /// Drop the outgoing card and tell the session its exit is done.
    pub fn complete_exit(&mut self) {
        if self.exit.take().is_some() {
            let _ = self.apply(SessionEvent::ExitTransitionComplete);
        }
    }
}
