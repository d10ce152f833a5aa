//! Snapshot of a session for rendering.

use super::event::LastAction;
use super::gesture::DragGesture;
use super::machine::Session;
use super::phase::SessionPhase;
use crate::models::{Item, Summary, SwipeDirection};

/// Everything the presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub current_item: Option<Item>,
    /// The loader is still fetching.
    pub deck_loading: bool,
    /// The current item's image has not been shown yet.
    pub image_loading: bool,
    pub overlay_intensity: f32,
    pub overlay_direction: Option<SwipeDirection>,
    pub super_like_budget: usize,
    pub animation_locked: bool,
    pub phase: SessionPhase,
    pub summary: Option<Summary>,
    pub position: usize,
    pub target: usize,
    pub loaded: usize,
    pub last_action: Option<LastAction>,
}

impl SessionView {
    /// Build a snapshot. The drag overlay is suppressed while locked.
    pub fn new(session: &Session, gesture: &DragGesture) -> Self {
        let current_item = session.current_item().cloned();
        let image_loading = current_item
            .as_ref()
            .is_some_and(|item| session.is_item_loading(&item.id));
        let locked = session.is_locked();

        Self {
            current_item,
            deck_loading: !session.is_deck_complete(),
            image_loading,
            overlay_intensity: if locked { 0.0 } else { gesture.overlay_intensity() },
            overlay_direction: if locked { None } else { gesture.overlay_direction() },
            super_like_budget: session.super_like_budget(),
            animation_locked: locked,
            phase: session.phase(),
            summary: session.summary(),
            position: session.position(),
            target: session.config().cat_count,
            loaded: session.deck().len(),
            last_action: session.last_action(),
        }
    }

    /// Either the deck or the current image is still on its way.
    pub fn is_loading(&self) -> bool {
        self.image_loading
            || (self.deck_loading
                && matches!(self.phase, SessionPhase::Loading | SessionPhase::CatchingUp))
    }

    /// The deck ran out before the target was reached.
    pub fn is_stalled(&self) -> bool {
        !self.deck_loading
            && matches!(self.phase, SessionPhase::Loading | SessionPhase::CatchingUp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::models::{Age, ImageHandle};

    fn item(index: usize) -> Item {
        Item::new(index, ImageHandle::new(vec![1u8]), "Luna", Age::new(2, 0))
    }

    #[test]
    fn test_view_of_fresh_session() {
        let session = Session::new(SessionConfig::default());
        let view = SessionView::new(&session, &DragGesture::default());

        assert_eq!(view.phase, SessionPhase::Loading);
        assert!(view.is_loading());
        assert!(!view.is_stalled());
        assert_eq!(view.super_like_budget, 2);
        assert_eq!(view.target, 10);
    }

    #[test]
    fn test_view_hides_overlay_while_locked() {
        let mut session = Session::new(SessionConfig::default());
        let _ = session.append_item(item(0));
        let _ = session.mark_item_loaded(&item(0).id);
        let mut gesture = DragGesture::default();
        gesture.update(120.0);

        let view = SessionView::new(&session, &gesture);
        assert_eq!(view.overlay_direction, Some(SwipeDirection::Right));
        assert!(!view.image_loading);

        let _ = session.super_like();
        let view = SessionView::new(&session, &gesture);
        assert!(view.animation_locked);
        assert_eq!(view.overlay_intensity, 0.0);
        assert_eq!(view.overlay_direction, None);
        assert_eq!(view.super_like_budget, 1);
    }

    #[test]
    fn test_view_reports_stalled_deck() {
        let mut session = Session::new(SessionConfig::default().with_cat_count(3));
        let _ = session.apply(crate::session::SessionEvent::LoaderFinished);
        let view = SessionView::new(&session, &DragGesture::default());
        assert!(view.is_stalled());
        assert!(!view.is_loading());
    }
}
