//! pawswipe - swipe through a deck of cats in the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod deck;
pub mod error;
pub mod generators;
pub mod imaging;
pub mod logging;
pub mod models;
pub mod session;
pub mod terminal;
pub mod traits;
pub mod ui;
