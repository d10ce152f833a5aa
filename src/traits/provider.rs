//! Item provider trait abstraction.
//!
//! The provider is the transport seam of the deck: given an index it
//! returns an owned [`ImageHandle`] or fails. Implementations include the
//! HTTP provider, the offline placeholder provider and a scripted mock.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::ProviderError;
use crate::models::ImageHandle;

/// Source of item images.
///
/// Ownership of the returned handle moves to the caller, which releases it
/// by dropping it.
///
/// # Example
///
/// ```ignore
/// use pawswipe::traits::ItemProvider;
///
/// async fn first_image<P: ItemProvider>(provider: &P) -> usize {
///     match provider.fetch(0).await {
///         Ok(handle) => handle.len(),
///         Err(_) => 0,
///     }
/// }
/// ```
#[async_trait]
pub trait ItemProvider: Send + Sync {
    /// Fetch the image for `index`.
    async fn fetch(&self, index: usize) -> Result<ImageHandle, ProviderError>;
}

/// Provider shared between the app and its loader tasks.
pub type SharedProvider = Arc<dyn ItemProvider>;
