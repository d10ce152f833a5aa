//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let provider = ScriptedProvider::new().failing_at(2);
//! let (mut app, mut rx) = TestAppBuilder::new().count(3).provider(provider).build();
//! app.start_session();
//! pump_until(&mut app, &mut rx, |app| app.session.is_deck_complete()).await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use pawswipe::adapters::ScriptedProvider;
use pawswipe::app::{App, AppMessage};
use pawswipe::config::{AppConfig, SessionConfig};
use pawswipe::models::{Age, ImageHandle, Item};
use pawswipe::session::SessionEvent;
use tokio::sync::mpsc::UnboundedReceiver;

/// Upper bound for waiting on background work in real-time tests.
pub const PUMP_TIMEOUT: Duration = Duration::from_secs(5);

/// Builder for test App instances backed by a [`ScriptedProvider`].
pub struct TestAppBuilder {
    session: SessionConfig,
    provider: ScriptedProvider,
    seed: u64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            provider: ScriptedProvider::new(),
            seed: 7,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: usize) -> Self {
        self.session = self.session.with_cat_count(count);
        self
    }

    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.session = self.session.with_settle_delay(delay);
        self
    }

    pub fn provider(mut self, provider: ScriptedProvider) -> Self {
        self.provider = provider;
        self
    }

    /// Build the app and take its message receiver.
    pub fn build(self) -> (App, UnboundedReceiver<AppMessage>) {
        let config = AppConfig::default().with_session(self.session);
        let mut app = App::with_provider(config, Arc::new(self.provider)).with_seed(self.seed);
        let rx = app
            .message_rx
            .take()
            .expect("fresh app has a message receiver");
        (app, rx)
    }
}

/// Feed background messages into `app` until `done` holds.
///
/// Panics if nothing arrives within [`PUMP_TIMEOUT`].
pub async fn pump_until<F>(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>, done: F)
where
    F: Fn(&App) -> bool,
{
    while !done(app) {
        let msg = tokio::time::timeout(PUMP_TIMEOUT, rx.recv())
            .await
            .expect("timed out waiting for app message")
            .expect("message channel closed");
        app.handle_message(msg);
    }
}

/// The deck finished loading and every image has been decoded.
pub fn deck_settled(app: &App) -> bool {
    app.session.is_deck_complete()
        && app
            .session
            .deck()
            .iter()
            .all(|item| !app.session.is_item_loading(&item.id))
}

/// Put an already-decoded item into the session without any background work.
pub fn deliver(app: &mut App, index: usize) {
    let item = Item::new(
        index,
        ImageHandle::new(vec![index as u8]),
        format!("Cat{}", index),
        Age::new(1, 0),
    );
    let id = item.id.clone();
    let _ = app.apply(SessionEvent::ItemAppended(item));
    let epoch = app.epoch;
    app.handle_message(AppMessage::ImageDecoded {
        epoch,
        id,
        thumbnail: None,
    });
}
