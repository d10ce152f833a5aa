//! Ordered, sequential deck loading.
//!
//! The loader fetches index 0 first so the deck can be shown as early as
//! possible, then walks the remaining indices one at a time. There is never
//! more than one fetch in flight, so items arrive in index order. A failed
//! index is logged and skipped; the deck simply ends up shorter.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tokio::task::JoinHandle;

use super::liveness::Liveness;
use crate::error::ProviderError;
use crate::generators::{next_age, next_name};
use crate::models::Item;
use crate::traits::SharedProvider;

/// Progress notifications from a spawned loader.
#[derive(Debug, Clone)]
pub enum DeckEvent {
    /// A new item, in index order.
    Loaded(Item),
    /// One index failed and was skipped.
    Skipped(ProviderError),
    /// Every index has been attempted.
    Finished { loaded: usize },
}

/// Fetches deck items and gives them names and ages.
pub struct DeckLoader {
    provider: SharedProvider,
    used_names: HashSet<String>,
    rng: StdRng,
    loaded: Vec<Item>,
    liveness: Option<Liveness>,
}

impl DeckLoader {
    pub fn new(provider: SharedProvider) -> Self {
        Self::with_rng(provider, StdRng::from_entropy())
    }

    /// Use a fixed random source (deterministic names and ages).
    pub fn with_rng(provider: SharedProvider, rng: StdRng) -> Self {
        Self {
            provider,
            used_names: HashSet::new(),
            rng,
            loaded: Vec::new(),
            liveness: None,
        }
    }

    /// Stop loading once `liveness` is revoked.
    pub fn with_liveness(mut self, liveness: Liveness) -> Self {
        self.liveness = Some(liveness);
        self
    }

    /// Items loaded so far, in index order.
    pub fn loaded(&self) -> &[Item] {
        &self.loaded
    }

    fn is_cancelled(&self) -> bool {
        self.liveness.as_ref().is_some_and(|l| !l.is_alive())
    }

    async fn fetch_item(&mut self, index: usize) -> Result<Item, ProviderError> {
        let handle = self.provider.fetch(index).await?;
        let name = next_name(&mut self.used_names, &mut self.rng);
        let age = next_age(&mut self.rng);
        Ok(Item::new(index, handle, name, age))
    }

    /// Fetch the item at index 0.
    pub async fn load_first(&mut self) -> Result<Item, ProviderError> {
        let item = self.fetch_item(0).await?;
        self.loaded.push(item.clone());
        Ok(item)
    }

    /// Fetch indices `1..count` one after another.
    ///
    /// `on_each_loaded` receives the growing list after every successful
    /// fetch. Failures are logged, passed to `on_skipped` as they happen and
    /// skipped. Returns the number of skipped indices.
    pub async fn load_remaining<F, S>(
        &mut self,
        count: usize,
        mut on_each_loaded: F,
        mut on_skipped: S,
    ) -> usize
    where
        F: FnMut(&[Item]),
        S: FnMut(ProviderError),
    {
        let mut skipped = 0;
        for index in 1..count {
            if self.is_cancelled() {
                tracing::debug!("Deck loader cancelled before index {}", index);
                break;
            }
            match self.fetch_item(index).await {
                Ok(item) => {
                    if self.is_cancelled() {
                        break;
                    }
                    self.loaded.push(item);
                    on_each_loaded(&self.loaded);
                }
                Err(err) => {
                    tracing::warn!("Skipping item {}: {}", index, err);
                    skipped += 1;
                    if self.is_cancelled() {
                        break;
                    }
                    on_skipped(err);
                }
            }
        }
        skipped
    }
}

/// Run a loader to completion in the background.
///
/// `emit` is called for every [`DeckEvent`] while the loader's liveness flag
/// (if any) is still set. A failure at index 0 does not stop the remaining
/// indices from loading.
pub fn spawn_deck_loader<F>(mut loader: DeckLoader, count: usize, emit: F) -> JoinHandle<()>
where
    F: Fn(DeckEvent) + Send + Sync + 'static,
{
    tokio::spawn(async move {
        match loader.load_first().await {
            Ok(item) => {
                if loader.is_cancelled() {
                    return;
                }
                emit(DeckEvent::Loaded(item));
            }
            Err(err) => {
                tracing::warn!("First item failed, continuing with the rest: {}", err);
                if loader.is_cancelled() {
                    return;
                }
                emit(DeckEvent::Skipped(err));
            }
        }

        let emit_ref = &emit;
        loader
            .load_remaining(
                count,
                |items| {
                    if let Some(item) = items.last() {
                        emit_ref(DeckEvent::Loaded(item.clone()));
                    }
                },
                |err| emit_ref(DeckEvent::Skipped(err)),
            )
            .await;

        if loader.is_cancelled() {
            return;
        }
        let loaded = loader.loaded().len();
        tracing::info!("Deck loading finished: {}/{} items", loaded, count);
        emit(DeckEvent::Finished { loaded });
    })
}
