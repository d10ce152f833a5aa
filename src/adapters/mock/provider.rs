//! Scripted item provider for testing.
//!
//! Returns small fake image payloads, fails the indices it is told to fail,
//! optionally sleeps per index, and records every request so tests can
//! check ordering and that no two fetches overlap.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::ProviderError;
use crate::models::{HandleTracker, ImageHandle};
use crate::traits::ItemProvider;

/// Mock provider with per-index failures and delays.
///
/// # Example
///
/// ```ignore
/// use pawswipe::adapters::mock::ScriptedProvider;
///
/// let provider = ScriptedProvider::new().failing_at(2);
/// assert!(provider.fetch(2).await.is_err());
/// assert_eq!(provider.requests(), vec![2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    failures: Arc<Mutex<HashSet<usize>>>,
    delays: Arc<Mutex<HashMap<usize, Duration>>>,
    default_delay: Option<Duration>,
    requests: Arc<Mutex<Vec<usize>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    tracker: HandleTracker,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every fetch of `index`.
    pub fn failing_at(self, index: usize) -> Self {
        self.failures.lock().unwrap().insert(index);
        self
    }

    /// Sleep before answering `index`.
    pub fn with_delay(self, index: usize, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(index, delay);
        self
    }

    /// Sleep before answering any index without its own delay.
    pub fn with_default_delay(mut self, delay: Duration) -> Self {
        self.default_delay = Some(delay);
        self
    }

    /// Indices requested so far, in call order.
    pub fn requests(&self) -> Vec<usize> {
        self.requests.lock().unwrap().clone()
    }

    /// Highest number of fetches that were running at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Tracker for every handle this provider has issued.
    pub fn tracker(&self) -> &HandleTracker {
        &self.tracker
    }

    fn delay_for(&self, index: usize) -> Option<Duration> {
        self.delays
            .lock()
            .unwrap()
            .get(&index)
            .copied()
            .or(self.default_delay)
    }
}

#[async_trait]
impl ItemProvider for ScriptedProvider {
    async fn fetch(&self, index: usize) -> Result<ImageHandle, ProviderError> {
        self.requests.lock().unwrap().push(index);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        if let Some(delay) = self.delay_for(index) {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failures.lock().unwrap().contains(&index) {
            return Err(ProviderError::Unavailable {
                index,
                reason: "scripted failure".to_string(),
            });
        }

        Ok(
            ImageHandle::tracked(format!("image-{}", index).into_bytes(), &self.tracker)
                .with_content_type("application/octet-stream"),
        )
    }
}
