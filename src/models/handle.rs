//! Owned image resources handed out by item providers.
//!
//! An [`ImageHandle`] owns the raw bytes fetched for one item. Ownership is
//! transferred to the caller of [`ItemProvider::fetch`](crate::traits::ItemProvider),
//! and the handle is released when the last owner drops it. Providers that
//! want to observe release (tests, leak checks) attach a [`HandleTracker`].

use bytes::Bytes;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts handles issued and released by a provider.
///
/// Cloning a tracker shares the counters.
#[derive(Debug, Clone, Default)]
pub struct HandleTracker {
    issued: Arc<AtomicUsize>,
    live: Arc<AtomicUsize>,
}

impl HandleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handles created through this tracker.
    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }

    /// Number of handles created through this tracker that are still alive.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    fn lease(&self) -> HandleLease {
        self.issued.fetch_add(1, Ordering::SeqCst);
        self.live.fetch_add(1, Ordering::SeqCst);
        HandleLease {
            live: Arc::clone(&self.live),
        }
    }
}

/// Decrements the tracker's live count when dropped.
struct HandleLease {
    live: Arc<AtomicUsize>,
}

impl Drop for HandleLease {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Raw image data for a single deck item.
pub struct ImageHandle {
    bytes: Bytes,
    content_type: Option<String>,
    _lease: Option<HandleLease>,
}

impl ImageHandle {
    /// Create an untracked handle.
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: None,
            _lease: None,
        }
    }

    /// Create a handle whose release is observed by `tracker`.
    pub fn tracked(bytes: impl Into<Bytes>, tracker: &HandleTracker) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: None,
            _lease: Some(tracker.lease()),
        }
    }

    /// Attach the MIME type reported by the transport.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHandle")
            .field("len", &self.bytes.len())
            .field("content_type", &self.content_type)
            .field("tracked", &self._lease.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracked_handle_released_on_drop() {
        let tracker = HandleTracker::new();
        let handle = ImageHandle::tracked(vec![1, 2, 3], &tracker);
        assert_eq!(tracker.issued(), 1);
        assert_eq!(tracker.live(), 1);

        drop(handle);
        assert_eq!(tracker.issued(), 1);
        assert_eq!(tracker.live(), 0);
    }

    #[test]
    fn test_shared_handle_released_with_last_owner() {
        let tracker = HandleTracker::new();
        let handle = Arc::new(ImageHandle::tracked(vec![0u8; 4], &tracker));
        let other = Arc::clone(&handle);

        drop(handle);
        assert_eq!(tracker.live(), 1);
        drop(other);
        assert_eq!(tracker.live(), 0);
    }

    #[test]
    fn test_untracked_handle_metadata() {
        let handle = ImageHandle::new(Bytes::from_static(b"abc")).with_content_type("image/png");
        assert_eq!(handle.len(), 3);
        assert!(!handle.is_empty());
        assert_eq!(handle.content_type(), Some("image/png"));
        assert!(format!("{:?}", handle).contains("tracked: false"));
    }
}
