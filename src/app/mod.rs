//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`AppMessage`] - Messages for async communication
//! - [`ExitAnimation`] - The outgoing card after a committed swipe

mod handlers;
mod messages;
mod state_methods;

pub use messages::AppMessage;
pub use state_methods::{ExitAnimation, EXIT_TICKS};

use std::collections::HashMap;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::adapters::{CataasProvider, OfflineProvider};
use crate::config::AppConfig;
use crate::deck::{spawn_deck_loader, DeckLoader, Liveness};
use crate::imaging::Thumbnail;
use crate::models::ItemId;
use crate::session::{DragGesture, Session, SessionView};
use crate::traits::SharedProvider;

/// Main application state
pub struct App {
    /// Settings the app was started with
    pub config: AppConfig,
    /// Where deck items come from
    provider: SharedProvider,
    /// The current swipe session
    pub session: Session,
    /// Bumped on every restart; tags background messages
    pub epoch: u64,
    /// Revoked when the current session is discarded
    liveness: Liveness,
    /// Background deck loader of the current session
    loader_task: Option<JoinHandle<()>>,
    /// Seed for deterministic names and ages
    seed: Option<u64>,
    /// Drag state of the current card
    pub gesture: DragGesture,
    /// Column where the current mouse drag started
    drag_origin: Option<u16>,
    /// Decoded images by item; `None` if decoding failed
    pub thumbnails: HashMap<ItemId, Option<Thumbnail>>,
    /// Outgoing card after a committed swipe
    pub exit: Option<ExitAnimation>,
    /// Most recent skipped fetch, for the status line
    pub last_error: Option<String>,
    /// First visible line of the summary, clamped when rendered
    pub summary_scroll: u16,
    /// Receiver for async messages (loader, timers, decoders)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Tick counter for animations (spinner, exit transition)
    pub tick_count: u64,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: when true, the UI needs to be redrawn.
    pub needs_redraw: bool,
    /// Where the card was last drawn (for mouse hit testing)
    pub card_area: Option<Rect>,
}

impl App {
    /// Create an app for `config`, picking the provider it asks for.
    pub fn new(config: AppConfig) -> Self {
        let provider: SharedProvider = if config.offline {
            Arc::new(OfflineProvider::new())
        } else {
            Arc::new(CataasProvider::with_base_url(config.base_url.clone()))
        };
        Self::with_provider(config, provider)
    }

    /// Create an app with a custom provider.
    ///
    /// Nothing is fetched until [`App::start_session`] is called.
    pub fn with_provider(config: AppConfig, provider: SharedProvider) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let session = Session::new(config.session.clone());
        let gesture = DragGesture::from_config(&config.session);

        Self {
            config,
            provider,
            session,
            epoch: 0,
            liveness: Liveness::new(),
            loader_task: None,
            seed: None,
            gesture,
            drag_origin: None,
            thumbnails: HashMap::new(),
            exit: None,
            last_error: None,
            summary_scroll: 0,
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
            should_quit: false,
            needs_redraw: true,
            card_area: None,
        }
    }

    /// Use a fixed seed for names and ages.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Spawn the deck loader for the current session.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_session(&mut self) {
        let loader = match self.seed {
            Some(seed) => DeckLoader::with_rng(
                self.provider.clone(),
                StdRng::seed_from_u64(seed.wrapping_add(self.epoch)),
            ),
            None => DeckLoader::new(self.provider.clone()),
        }
        .with_liveness(self.liveness.clone());

        let tx = self.message_tx.clone();
        let epoch = self.epoch;
        let count = self.config.session.cat_count;
        tracing::info!("Starting session {} with {} cats", epoch, count);

        self.loader_task = Some(spawn_deck_loader(loader, count, move |event| {
            let _ = tx.send(AppMessage::Deck { epoch, event });
        }));
        self.mark_dirty();
    }

    /// Discard the current session and start a fresh one.
    ///
    /// The old loader is cancelled and every image handle the old session
    /// held is released. Late messages from the old session are ignored.
    pub fn restart(&mut self) {
        tracing::info!("Restarting session {}", self.epoch);
        self.stop_background_tasks();

        self.epoch += 1;
        self.liveness = Liveness::new();
        self.session = Session::new(self.config.session.clone());
        self.gesture.reset();
        self.drag_origin = None;
        self.thumbnails.clear();
        self.exit = None;
        self.last_error = None;
        self.summary_scroll = 0;

        self.start_session();
    }

    /// Cancel background work and wait for the loader to stop.
    pub async fn shutdown(&mut self) {
        self.liveness.revoke();
        if let Some(task) = self.loader_task.take() {
            task.abort();
            let _ = task.await;
        }
    }

    fn stop_background_tasks(&mut self) {
        self.liveness.revoke();
        if let Some(task) = self.loader_task.take() {
            task.abort();
        }
    }

    /// Snapshot of the session for rendering.
    pub fn view(&self) -> SessionView {
        SessionView::new(&self.session, &self.gesture)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.stop_background_tasks();
    }
}
