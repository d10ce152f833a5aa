//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`ScriptedProvider`] - Item provider with scripted failures and delays

pub mod provider;

pub use provider::ScriptedProvider;
