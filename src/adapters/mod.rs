//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`CataasProvider`] - Item provider over HTTP using reqwest
//! - [`OfflineProvider`] - Item provider that paints placeholders locally
//!
//! # Mock Implementations
//!
//! - [`mock::ScriptedProvider`] - Scripted failures, delays and request log

pub mod cataas;
pub mod mock;
pub mod offline;

pub use cataas::{CataasProvider, DEFAULT_BASE_URL};
pub use mock::ScriptedProvider;
pub use offline::OfflineProvider;
