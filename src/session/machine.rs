//! The swipe session state machine.
//!
//! All session state lives in [`Session`] and changes only through
//! [`Session::apply`]. Every event is either applied in full or rejected
//! without touching anything, so a rejected call leaves the session equal
//! to what it was before.

use std::collections::HashMap;

use super::event::{Effect, LastAction, Outcome, Rejection, SessionEvent};
use super::phase::SessionPhase;
use crate::config::SessionConfig;
use crate::models::{Decision, Item, ItemId, Rating, Summary, SwipeDirection};

/// A super-like waiting for its settle delay.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSuperLike {
    ticket: u64,
    item: Item,
}

/// One swipe session over a deck of items.
///
/// `ratings` doubles as the undo history: the rating at `i` is the decision
/// made at position `i`, so `ratings.len() == position` outside of a pending
/// super-like.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    config: SessionConfig,
    deck: Vec<Item>,
    image_loading: HashMap<ItemId, bool>,
    position: usize,
    ratings: Vec<Rating>,
    pending: Option<PendingSuperLike>,
    next_ticket: u64,
    phase: SessionPhase,
    deck_complete: bool,
    last_action: Option<LastAction>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            deck: Vec::new(),
            image_loading: HashMap::new(),
            position: 0,
            ratings: Vec::new(),
            pending: None,
            next_ticket: 0,
            phase: SessionPhase::Loading,
            deck_complete: false,
            last_action: None,
        }
    }

    /// Apply one event.
    pub fn apply(&mut self, event: SessionEvent) -> Outcome {
        let before = self.phase;
        let outcome = match event {
            SessionEvent::ItemAppended(item) => self.on_item_appended(item),
            SessionEvent::LoaderFinished => {
                self.deck_complete = true;
                Outcome::Applied
            }
            SessionEvent::Decide(direction) => self.on_decide(direction),
            SessionEvent::SuperLike => self.on_super_like(),
            SessionEvent::SettleElapsed { ticket } => self.on_settle_elapsed(ticket),
            SessionEvent::Undo => self.on_undo(),
            SessionEvent::ItemLoaded(id) => self.on_item_loaded(&id),
            SessionEvent::ExitTransitionComplete => self.on_exit_complete(),
        };
        if self.phase != before {
            tracing::debug!(
                "Session phase {} -> {} (position {}/{})",
                before,
                self.phase,
                self.position,
                self.config.cat_count
            );
        }
        outcome
    }

    pub fn append_item(&mut self, item: Item) -> Outcome {
        self.apply(SessionEvent::ItemAppended(item))
    }

    pub fn decide(&mut self, direction: SwipeDirection) -> Outcome {
        self.apply(SessionEvent::Decide(direction))
    }

    pub fn super_like(&mut self) -> Outcome {
        self.apply(SessionEvent::SuperLike)
    }

    pub fn undo(&mut self) -> Outcome {
        self.apply(SessionEvent::Undo)
    }

    pub fn mark_item_loaded(&mut self, id: &ItemId) -> Outcome {
        self.apply(SessionEvent::ItemLoaded(id.clone()))
    }

    // ---- accessors ----

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn deck(&self) -> &[Item] {
        &self.deck
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    pub fn last_action(&self) -> Option<LastAction> {
        self.last_action
    }

    /// Whether the loader has attempted every index.
    pub fn is_deck_complete(&self) -> bool {
        self.deck_complete
    }

    /// Set only while a super-like is settling.
    pub fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    /// Super-likes still available. A settling super-like is already spent.
    pub fn super_like_budget(&self) -> usize {
        let spent = self
            .ratings
            .iter()
            .filter(|r| r.decision == Decision::Superliked)
            .count()
            + usize::from(self.pending.is_some());
        self.config.initial_super_likes.saturating_sub(spent)
    }

    /// The item at the current position, if it has been loaded and the
    /// session is still open.
    pub fn current_item(&self) -> Option<&Item> {
        if self.phase.is_closed() {
            return None;
        }
        self.deck.get(self.position)
    }

    pub fn is_item_loading(&self, id: &ItemId) -> bool {
        self.image_loading.get(id).copied().unwrap_or(false)
    }

    /// Present once the session is finished.
    pub fn summary(&self) -> Option<Summary> {
        (self.phase == SessionPhase::Finished)
            .then(|| Summary::from_ratings(&self.ratings, self.super_like_budget()))
    }

    // ---- transitions ----

    fn on_item_appended(&mut self, item: Item) -> Outcome {
        if self.image_loading.contains_key(&item.id) {
            return Outcome::Rejected(Rejection::DuplicateItem);
        }
        self.image_loading.insert(item.id.clone(), true);
        self.deck.push(item);
        self.refresh_phase();
        Outcome::Applied
    }

    /// Resolve the item a forward decision would apply to.
    fn decidable_item(&self) -> Result<&Item, Rejection> {
        let item = self.current_item().ok_or(Rejection::NoCurrentItem)?;
        if self.is_item_loading(&item.id) {
            return Err(Rejection::ItemLoading);
        }
        Ok(item)
    }

    fn on_decide(&mut self, direction: SwipeDirection) -> Outcome {
        if self.phase.is_closed() {
            return Outcome::Rejected(Rejection::Finished);
        }
        if self.is_locked() {
            return Outcome::Rejected(Rejection::AnimationLocked);
        }
        let item = match self.decidable_item() {
            Ok(item) => item.clone(),
            Err(reason) => return Outcome::Rejected(reason),
        };

        self.ratings.push(Rating::new(item, direction.decision()));
        self.position += 1;
        self.last_action = Some(LastAction::Swipe(direction));

        if self.position >= self.config.cat_count {
            // Finished once the outgoing card's exit presentation is done.
            self.phase = SessionPhase::FinishPending;
        } else {
            self.refresh_phase();
        }
        Outcome::Applied
    }

    fn on_super_like(&mut self) -> Outcome {
        if self.phase.is_closed() {
            return Outcome::Rejected(Rejection::Finished);
        }
        if self.is_locked() {
            return Outcome::Rejected(Rejection::AnimationLocked);
        }
        if self.super_like_budget() == 0 {
            return Outcome::Rejected(Rejection::NoSuperLikesLeft);
        }
        let item = match self.decidable_item() {
            Ok(item) => item.clone(),
            Err(reason) => return Outcome::Rejected(reason),
        };

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending = Some(PendingSuperLike { ticket, item });
        self.last_action = Some(LastAction::SuperLike);

        Outcome::Scheduled(Effect::StartSettleTimer {
            ticket,
            delay: self.config.settle_delay,
        })
    }

    fn on_settle_elapsed(&mut self, ticket: u64) -> Outcome {
        let pending = match self.pending.take() {
            Some(pending) if pending.ticket == ticket => pending,
            other => {
                self.pending = other;
                return Outcome::Rejected(Rejection::StaleTimer);
            }
        };

        self.ratings.push(Rating::new(pending.item, Decision::Superliked));
        self.position += 1;

        // The settle presentation already played, so there is no exit to wait for.
        if self.position >= self.config.cat_count {
            self.phase = SessionPhase::Finished;
        } else {
            self.refresh_phase();
        }
        Outcome::Applied
    }

    fn on_undo(&mut self) -> Outcome {
        if self.is_locked() {
            return Outcome::Rejected(Rejection::AnimationLocked);
        }
        if self.position == 0 || self.ratings.is_empty() {
            return Outcome::Rejected(Rejection::NothingToUndo);
        }

        self.ratings.pop();
        self.position -= 1;
        self.last_action = Some(LastAction::Undo);

        if self.phase.is_closed() {
            self.phase = SessionPhase::Browsing;
        }
        self.refresh_phase();
        Outcome::Applied
    }

    fn on_item_loaded(&mut self, id: &ItemId) -> Outcome {
        match self.image_loading.get_mut(id) {
            Some(loading) if *loading => {
                *loading = false;
                Outcome::Applied
            }
            _ => Outcome::Rejected(Rejection::UnknownItem),
        }
    }

    fn on_exit_complete(&mut self) -> Outcome {
        if self.phase != SessionPhase::FinishPending {
            return Outcome::Rejected(Rejection::NoExitInProgress);
        }
        self.phase = SessionPhase::Finished;
        Outcome::Applied
    }

    /// Recompute an open phase from position and deck length.
    fn refresh_phase(&mut self) {
        if self.phase.is_closed() {
            return;
        }
        self.phase = if self.deck.is_empty() && self.position == 0 {
            SessionPhase::Loading
        } else if self.position < self.deck.len() {
            SessionPhase::Browsing
        } else {
            SessionPhase::CatchingUp
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Age, ImageHandle};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::time::Duration;

    fn item(index: usize) -> Item {
        Item::new(
            index,
            ImageHandle::new(vec![index as u8]),
            format!("Cat{}", index),
            Age::new(1, 0),
        )
    }

    /// A session with `loaded` items appended and their images loaded.
    fn session(target: usize, loaded: usize) -> Session {
        let mut session = Session::new(SessionConfig::default().with_cat_count(target));
        for index in 0..loaded {
            let item = item(index);
            let id = item.id.clone();
            assert_eq!(session.append_item(item), Outcome::Applied);
            assert_eq!(session.mark_item_loaded(&id), Outcome::Applied);
        }
        session
    }

    fn settle(session: &mut Session, outcome: Outcome) -> Outcome {
        match outcome.effect() {
            Some(Effect::StartSettleTimer { ticket, .. }) => {
                session.apply(SessionEvent::SettleElapsed { ticket })
            }
            None => panic!("expected a settle timer, got {:?}", outcome),
        }
    }

    #[test]
    fn test_new_session_is_loading() {
        let session = Session::new(SessionConfig::default());
        assert_eq!(session.phase(), SessionPhase::Loading);
        assert!(session.current_item().is_none());
        assert_eq!(session.super_like_budget(), 2);
        assert!(!session.is_locked());
        assert!(session.summary().is_none());
    }

    #[test]
    fn test_first_item_starts_browsing_but_blocks_until_loaded() {
        let mut session = Session::new(SessionConfig::default());
        assert!(session.append_item(item(0)).is_accepted());
        assert_eq!(session.phase(), SessionPhase::Browsing);

        assert_eq!(
            session.decide(SwipeDirection::Right),
            Outcome::Rejected(Rejection::ItemLoading)
        );
        assert_eq!(session.super_like(), Outcome::Rejected(Rejection::ItemLoading));

        assert!(session.mark_item_loaded(&ItemId::for_index(0)).is_accepted());
        assert_eq!(session.decide(SwipeDirection::Right), Outcome::Applied);
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn test_decide_records_rating_and_advances() {
        let mut session = session(5, 5);
        assert_eq!(session.decide(SwipeDirection::Left), Outcome::Applied);
        assert_eq!(session.decide(SwipeDirection::Right), Outcome::Applied);

        assert_eq!(session.position(), 2);
        assert_eq!(session.ratings().len(), 2);
        assert_eq!(session.ratings()[0].decision, Decision::Disliked);
        assert_eq!(session.ratings()[1].decision, Decision::Liked);
        assert_eq!(session.current_item().map(|i| i.index), Some(2));
        assert_eq!(
            session.last_action(),
            Some(LastAction::Swipe(SwipeDirection::Right))
        );
    }

    #[test]
    fn test_last_swipe_waits_for_exit_transition() {
        let mut session = session(2, 2);
        assert!(session.decide(SwipeDirection::Right).is_accepted());
        assert!(session.decide(SwipeDirection::Right).is_accepted());

        assert_eq!(session.phase(), SessionPhase::FinishPending);
        assert!(session.summary().is_none());
        assert_eq!(
            session.decide(SwipeDirection::Left),
            Outcome::Rejected(Rejection::Finished)
        );

        assert_eq!(
            session.apply(SessionEvent::ExitTransitionComplete),
            Outcome::Applied
        );
        assert_eq!(session.phase(), SessionPhase::Finished);
        assert_eq!(session.summary().map(|s| s.liked.len()), Some(2));
    }

    #[test]
    fn test_exit_transition_without_pending_finish_is_rejected() {
        let mut session = session(3, 3);
        let before = session.clone();
        assert_eq!(
            session.apply(SessionEvent::ExitTransitionComplete),
            Outcome::Rejected(Rejection::NoExitInProgress)
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_like_dislike_superlike_finishes_session() {
        let mut session = session(3, 3);
        assert!(session.decide(SwipeDirection::Right).is_accepted());
        assert!(session.decide(SwipeDirection::Left).is_accepted());

        let outcome = session.super_like();
        assert_eq!(
            outcome,
            Outcome::Scheduled(Effect::StartSettleTimer {
                ticket: 0,
                delay: Duration::from_millis(2200)
            })
        );
        assert!(session.is_locked());
        assert_eq!(session.phase(), SessionPhase::Browsing);

        assert_eq!(settle(&mut session, outcome), Outcome::Applied);
        assert_eq!(session.phase(), SessionPhase::Finished);
        assert!(!session.is_locked());

        let summary = session.summary().unwrap();
        assert_eq!(summary.liked.len(), 1);
        assert_eq!(summary.disliked.len(), 1);
        assert_eq!(summary.superliked.len(), 1);
        assert_eq!(summary.super_likes_left, 1);
    }

    #[test]
    fn test_lock_rejects_everything_without_change() {
        let mut session = session(5, 5);
        let outcome = session.super_like();
        assert!(session.is_locked());

        let before = session.clone();
        assert_eq!(
            session.decide(SwipeDirection::Right),
            Outcome::Rejected(Rejection::AnimationLocked)
        );
        assert_eq!(
            session.super_like(),
            Outcome::Rejected(Rejection::AnimationLocked)
        );
        assert_eq!(session.undo(), Outcome::Rejected(Rejection::AnimationLocked));
        assert_eq!(session, before);

        assert!(settle(&mut session, outcome).is_accepted());
        assert_eq!(session.position(), 1);
        assert_eq!(session.ratings()[0].decision, Decision::Superliked);
    }

    #[test]
    fn test_budget_is_spent_on_start_and_never_negative() {
        let mut session = session(5, 5);
        let first = session.super_like();
        assert_eq!(session.super_like_budget(), 1);
        assert!(settle(&mut session, first).is_accepted());

        let second = session.super_like();
        assert!(settle(&mut session, second).is_accepted());
        assert_eq!(session.super_like_budget(), 0);

        let before = session.clone();
        assert_eq!(
            session.super_like(),
            Outcome::Rejected(Rejection::NoSuperLikesLeft)
        );
        assert_eq!(session, before);
        assert_eq!(session.super_like_budget(), 0);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut session = session(5, 5);
        let outcome = session.super_like();
        let before = session.clone();

        assert_eq!(
            session.apply(SessionEvent::SettleElapsed { ticket: 99 }),
            Outcome::Rejected(Rejection::StaleTimer)
        );
        assert_eq!(session, before);

        assert!(settle(&mut session, outcome).is_accepted());
        assert_eq!(
            session.apply(SessionEvent::SettleElapsed { ticket: 0 }),
            Outcome::Rejected(Rejection::StaleTimer)
        );
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let mut session = session(3, 3);
        let before = session.clone();
        assert_eq!(session.undo(), Outcome::Rejected(Rejection::NothingToUndo));
        assert_eq!(session, before);
    }

    #[test]
    fn test_undo_restores_previous_step() {
        let mut session = session(5, 5);
        assert!(session.decide(SwipeDirection::Right).is_accepted());
        let before = session.clone();

        assert!(session.decide(SwipeDirection::Left).is_accepted());
        assert_eq!(session.undo(), Outcome::Applied);

        assert_eq!(session.position(), before.position());
        assert_eq!(session.ratings(), before.ratings());
        assert_eq!(session.phase(), before.phase());
        assert_eq!(session.last_action(), Some(LastAction::Undo));
    }

    #[test]
    fn test_undo_revives_finished_session_and_refunds_super_like() {
        let mut session = session(2, 2);
        assert!(session.decide(SwipeDirection::Left).is_accepted());
        let outcome = session.super_like();
        assert!(settle(&mut session, outcome).is_accepted());
        assert_eq!(session.phase(), SessionPhase::Finished);
        assert_eq!(session.super_like_budget(), 1);

        assert_eq!(session.undo(), Outcome::Applied);
        assert_eq!(session.phase(), SessionPhase::Browsing);
        assert_eq!(session.position(), 1);
        assert_eq!(session.ratings().len(), 1);
        assert_eq!(session.super_like_budget(), 2);
        assert_eq!(session.current_item().map(|i| i.index), Some(1));
    }

    #[test]
    fn test_undo_from_finish_pending() {
        let mut session = session(1, 1);
        assert!(session.decide(SwipeDirection::Right).is_accepted());
        assert_eq!(session.phase(), SessionPhase::FinishPending);

        assert!(session.undo().is_accepted());
        assert_eq!(session.phase(), SessionPhase::Browsing);
        assert_eq!(
            session.apply(SessionEvent::ExitTransitionComplete),
            Outcome::Rejected(Rejection::NoExitInProgress)
        );
    }

    #[test]
    fn test_outrunning_short_deck_stays_catching_up() {
        // Index 2 failed to load: only two items for a target of three.
        let mut session = session(3, 2);
        assert!(session.apply(SessionEvent::LoaderFinished).is_accepted());

        assert!(session.decide(SwipeDirection::Right).is_accepted());
        assert!(session.decide(SwipeDirection::Right).is_accepted());
        assert_eq!(session.phase(), SessionPhase::CatchingUp);
        assert!(session.current_item().is_none());
        assert!(session.is_deck_complete());

        assert_eq!(
            session.decide(SwipeDirection::Right),
            Outcome::Rejected(Rejection::NoCurrentItem)
        );
        assert_eq!(session.phase(), SessionPhase::CatchingUp);
        assert_eq!(session.deck().len(), 2);
    }

    #[test]
    fn test_catching_up_resumes_when_item_arrives() {
        let mut session = session(3, 1);
        assert!(session.decide(SwipeDirection::Left).is_accepted());
        assert_eq!(session.phase(), SessionPhase::CatchingUp);

        assert!(session.append_item(item(1)).is_accepted());
        assert_eq!(session.phase(), SessionPhase::Browsing);
        assert!(session.is_item_loading(&ItemId::for_index(1)));
    }

    #[test]
    fn test_duplicate_and_unknown_items_rejected() {
        let mut session = session(3, 1);
        assert_eq!(
            session.append_item(item(0)),
            Outcome::Rejected(Rejection::DuplicateItem)
        );
        assert_eq!(
            session.mark_item_loaded(&ItemId::for_index(7)),
            Outcome::Rejected(Rejection::UnknownItem)
        );
        assert_eq!(
            session.mark_item_loaded(&ItemId::for_index(0)),
            Outcome::Rejected(Rejection::UnknownItem)
        );
        assert_eq!(session.deck().len(), 1);
    }

    #[test]
    fn test_ratings_track_position_under_random_input() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let mut session = session(6, 6);
            for _ in 0..40 {
                let outcome = match rng.gen_range(0..4) {
                    0 => session.decide(SwipeDirection::Left),
                    1 => session.decide(SwipeDirection::Right),
                    2 => session.undo(),
                    _ => session.super_like(),
                };
                if let Some(Effect::StartSettleTimer { ticket, .. }) = outcome.effect() {
                    let settled = session.apply(SessionEvent::SettleElapsed { ticket });
                    assert!(settled.is_accepted());
                }
                if session.phase() == SessionPhase::FinishPending {
                    let exited = session.apply(SessionEvent::ExitTransitionComplete);
                    assert!(exited.is_accepted());
                }

                assert_eq!(session.ratings().len(), session.position());
                let superliked = session
                    .ratings()
                    .iter()
                    .filter(|r| r.decision == Decision::Superliked)
                    .count();
                assert_eq!(session.super_like_budget(), 2 - superliked);
            }
        }
    }
}
