//! Item provider failures.
//!
//! A provider failure only ever affects one deck index: the loader logs it
//! and moves on to the next index.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// The request never produced a response.
    #[error("request for item {index} failed: {message}")]
    Http { index: usize, message: String },

    /// The service answered with a non-success status.
    #[error("item {index} returned HTTP {status}")]
    Status { index: usize, status: u16 },

    /// The response carried no image bytes.
    #[error("item {index} returned an empty body")]
    EmptyBody { index: usize },

    /// The provider has nothing for this index.
    #[error("item {index} is unavailable: {reason}")]
    Unavailable { index: usize, reason: String },
}

impl ProviderError {
    /// The deck index that failed.
    pub fn index(&self) -> usize {
        match self {
            ProviderError::Http { index, .. }
            | ProviderError::Status { index, .. }
            | ProviderError::EmptyBody { index }
            | ProviderError::Unavailable { index, .. } => *index,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ProviderError::Http { .. } => "PROVIDER_HTTP",
            ProviderError::Status { .. } => "PROVIDER_STATUS",
            ProviderError::EmptyBody { .. } => "PROVIDER_EMPTY",
            ProviderError::Unavailable { .. } => "PROVIDER_UNAVAILABLE",
        }
    }

    pub fn from_reqwest(index: usize, err: &reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ProviderError::Status {
                index,
                status: status.as_u16(),
            },
            None => ProviderError::Http {
                index,
                message: err.to_string(),
            },
        }
    }
}
