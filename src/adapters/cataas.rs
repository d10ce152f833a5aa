//! HTTP item provider backed by the cataas.com random cat endpoint.

use async_trait::async_trait;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ProviderError;
use crate::models::ImageHandle;
use crate::traits::ItemProvider;

pub const DEFAULT_BASE_URL: &str = "https://cataas.com";

/// Fetches one random cat picture per index.
///
/// Each request carries a `t` query parameter derived from the current time
/// and the index so that no intermediate cache hands back the same picture.
#[derive(Debug, Clone)]
pub struct CataasProvider {
    base_url: String,
    client: reqwest::Client,
}

impl CataasProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL requested for `index`.
    pub fn url_for(&self, index: usize) -> String {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        format!("{}/cat?t={}", self.base_url, now_ms + index as u128)
    }
}

impl Default for CataasProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemProvider for CataasProvider {
    async fn fetch(&self, index: usize) -> Result<ImageHandle, ProviderError> {
        let url = self.url_for(index);
        tracing::debug!("Fetching item {} from {}", index, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ProviderError::from_reqwest(index, &e))?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| ProviderError::from_reqwest(index, &e))?;

        if body.is_empty() {
            return Err(ProviderError::EmptyBody { index });
        }

        let handle = ImageHandle::new(body);
        Ok(match content_type {
            Some(ct) => handle.with_content_type(ct),
            None => handle,
        })
    }
}
