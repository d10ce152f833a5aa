//! Message, key and mouse handlers for App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{App, AppMessage};
use crate::deck::DeckEvent;
use crate::error::PawError;
use crate::imaging::{decode_in_background, THUMBNAIL_COLS, THUMBNAIL_ROWS};
use crate::models::{Item, SwipeDirection};
use crate::session::{Effect, Outcome, SessionEvent, SessionPhase};

/// Lines moved by PageUp/PageDown on the summary.
const SUMMARY_PAGE: u16 = 10;

impl App {
    /// Handle a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        if msg.epoch() != self.epoch {
            tracing::debug!(
                "Dropping stale {} from session {} (current {})",
                msg.kind(),
                msg.epoch(),
                self.epoch
            );
            return;
        }
        self.mark_dirty();

        match msg {
            AppMessage::Deck { event, .. } => match event {
                DeckEvent::Loaded(item) => {
                    let decode_target = item.clone();
                    if self.apply(SessionEvent::ItemAppended(item)).is_accepted() {
                        self.spawn_decode(decode_target);
                    }
                }
                DeckEvent::Skipped(err) => {
                    let err = PawError::from(err);
                    tracing::debug!("{} ({})", err.error_code(), err.category());
                    self.last_error = Some(err.user_message());
                }
                DeckEvent::Finished { loaded } => {
                    tracing::info!(
                        "Deck complete: {} of {} cats",
                        loaded,
                        self.config.session.cat_count
                    );
                    let _ = self.apply(SessionEvent::LoaderFinished);
                }
            },
            AppMessage::SettleElapsed { ticket, .. } => {
                let _ = self.apply(SessionEvent::SettleElapsed { ticket });
            }
            AppMessage::ImageDecoded { id, thumbnail, .. } => {
                self.thumbnails.insert(id.clone(), thumbnail);
                let _ = self.apply(SessionEvent::ItemLoaded(id));
            }
        }
    }

    /// Apply a session event and run whatever it asks for.
    pub fn apply(&mut self, event: SessionEvent) -> Outcome {
        let label = event_label(&event);
        let outcome = self.session.apply(event);
        match &outcome {
            Outcome::Rejected(reason) => {
                tracing::debug!("Ignored {}: {}", label, reason);
            }
            Outcome::Scheduled(Effect::StartSettleTimer { ticket, delay }) => {
                self.spawn_settle_timer(*ticket, *delay);
            }
            Outcome::Applied => {}
        }
        if outcome.is_accepted() {
            self.mark_dirty();
        }
        outcome
    }

    /// Like or dislike the current card and animate it out.
    pub fn swipe(&mut self, direction: SwipeDirection) -> Outcome {
        let outcome = self.apply(SessionEvent::Decide(direction));
        if outcome.is_accepted() {
            self.start_exit();
        }
        outcome
    }

    pub fn super_like(&mut self) -> Outcome {
        self.apply(SessionEvent::SuperLike)
    }

    pub fn undo(&mut self) -> Outcome {
        let outcome = self.apply(SessionEvent::Undo);
        if outcome.is_accepted() {
            self.exit = None;
            self.summary_scroll = 0;
        }
        outcome
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.session.phase() == SessionPhase::Finished {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.summary_scroll = self.summary_scroll.saturating_sub(1);
                    return;
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.summary_scroll = self.summary_scroll.saturating_add(1);
                    return;
                }
                KeyCode::PageUp => {
                    self.summary_scroll = self.summary_scroll.saturating_sub(SUMMARY_PAGE);
                    return;
                }
                KeyCode::PageDown => {
                    self.summary_scroll = self.summary_scroll.saturating_add(SUMMARY_PAGE);
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Left | KeyCode::Char('h') => {
                let _ = self.swipe(SwipeDirection::Left);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let _ = self.swipe(SwipeDirection::Right);
            }
            KeyCode::Up | KeyCode::Char('s') => {
                let _ = self.super_like();
            }
            KeyCode::Char('u') | KeyCode::Backspace => {
                let _ = self.undo();
            }
            KeyCode::Char('r') if self.session.phase() == SessionPhase::Finished => {
                self.restart();
            }
            _ => {}
        }
    }

    /// Translate mouse drags on the card into the drag gesture.
    ///
    /// Input is ignored while a super-like is settling.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.session.is_locked() {
            self.drag_origin = None;
            self.gesture.reset();
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let on_card = self
                    .card_area
                    .map_or(true, |area| contains(area, mouse.column, mouse.row));
                if on_card && self.session.current_item().is_some() {
                    self.drag_origin = Some(mouse.column);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(x) = self.drag_offset(mouse.column) {
                    self.gesture.update(x);
                    self.mark_dirty();
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(x) = self.drag_offset(mouse.column) {
                    self.drag_origin = None;
                    let released = self.gesture.release(x);
                    tracing::debug!("Drag released at {:.0}: {:?}", x, released);
                    if let Some(direction) = released {
                        let _ = self.swipe(direction);
                    }
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    fn drag_offset(&self, column: u16) -> Option<f32> {
        self.drag_origin
            .map(|origin| (f32::from(column) - f32::from(origin)) * self.config.drag_scale)
    }

    fn spawn_settle_timer(&self, ticket: u64, delay: std::time::Duration) {
        let tx = self.message_tx.clone();
        let epoch = self.epoch;
        let liveness = self.liveness.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if liveness.is_alive() {
                let _ = tx.send(AppMessage::SettleElapsed { epoch, ticket });
            }
        });
    }

    fn spawn_decode(&self, item: Item) {
        let tx = self.message_tx.clone();
        let epoch = self.epoch;
        let liveness = self.liveness.clone();
        let Item { id, handle, .. } = item;
        tokio::spawn(async move {
            let thumbnail = match decode_in_background(handle, THUMBNAIL_COLS, THUMBNAIL_ROWS).await {
                Ok(thumbnail) => Some(thumbnail),
                Err(err) => {
                    tracing::warn!("Could not decode {}: {}", id, err);
                    None
                }
            };
            if liveness.is_alive() {
                let _ = tx.send(AppMessage::ImageDecoded {
                    epoch,
                    id,
                    thumbnail,
                });
            }
        });
    }
}

fn contains(area: ratatui::layout::Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

fn event_label(event: &SessionEvent) -> &'static str {
    match event {
        SessionEvent::ItemAppended(_) => "item-appended",
        SessionEvent::LoaderFinished => "loader-finished",
        SessionEvent::Decide(SwipeDirection::Left) => "dislike",
        SessionEvent::Decide(SwipeDirection::Right) => "like",
        SessionEvent::SuperLike => "super-like",
        SessionEvent::SettleElapsed { .. } => "settle-elapsed",
        SessionEvent::Undo => "undo",
        SessionEvent::ItemLoaded(_) => "item-loaded",
        SessionEvent::ExitTransitionComplete => "exit-complete",
    }
}
