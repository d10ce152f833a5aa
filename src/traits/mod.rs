//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`ItemProvider`] - Fetches the image for a deck index

pub mod provider;

pub use provider::{ItemProvider, SharedProvider};
