//! Error handling for pawswipe.
//!
//! - **Error Categories**: classification used for logging and hints
//! - **Domain errors**: provider, configuration and system failures
//! - **Unified Error Type**: `PawError` consolidates them
//! - **Result Type Alias**: `PawResult<T>`
//!
//! | Error | Handling |
//! |-------|----------|
//! | `ProviderError` | logged, index skipped, deck shrinks |
//! | `ConfigError` | reported at startup |
//! | `SystemError` | propagated to `main`; decode failures only degrade the card |
//!
//! Rejected session operations are not errors; see
//! [`crate::session::Rejection`].

mod category;
mod config;
mod paw_error;
mod provider;
mod result;
mod system;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use paw_error::PawError;
pub use provider::ProviderError;
pub use result::PawResult;
pub use system::{classify_io_error, SystemError};
