//! Unified error type for pawswipe.

use std::fmt;

use color_eyre::{eyre::eyre, Report, Section};

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::provider::ProviderError;
use super::system::SystemError;

/// Every fallible operation in the crate returns one of these.
///
/// Rejected session operations are not errors and never appear here.
#[derive(Debug)]
pub enum PawError {
    /// An item fetch failed.
    Provider(ProviderError),

    /// Bad configuration.
    Config(ConfigError),

    /// OS, filesystem or decode failure.
    System(SystemError),
}

impl PawError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PawError::Provider(err) => match err {
                ProviderError::Http { .. } => ErrorCategory::Network,
                ProviderError::Status { .. }
                | ProviderError::EmptyBody { .. }
                | ProviderError::Unavailable { .. } => ErrorCategory::Server,
            },
            PawError::Config(_) => ErrorCategory::Configuration,
            PawError::System(SystemError::DecodeFailed { .. }) => ErrorCategory::Server,
            PawError::System(_) => ErrorCategory::System,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            PawError::Provider(err) => err.error_code(),
            PawError::Config(err) => err.error_code(),
            PawError::System(err) => err.error_code(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            PawError::Provider(err) => format!("Could not load a cat: {}", err),
            PawError::Config(err) => format!("Configuration error: {}", err),
            PawError::System(err) => err.user_message(),
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }

    /// Report for the terminal: the user message, with the error code and
    /// category as a note and the recovery hint as a suggestion.
    pub fn into_report(self) -> Report {
        let note = format!("{} error [{}]: {}", self.category(), self.error_code(), self);
        let hint = self.recovery_hint();
        eyre!("{}", self.user_message())
            .note(note)
            .suggestion(hint)
    }
}

impl fmt::Display for PawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PawError::Provider(err) => write!(f, "{}", err),
            PawError::Config(err) => write!(f, "{}", err),
            PawError::System(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for PawError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PawError::Provider(err) => Some(err),
            PawError::Config(err) => Some(err),
            PawError::System(err) => Some(err),
        }
    }
}

impl From<ProviderError> for PawError {
    fn from(err: ProviderError) -> Self {
        PawError::Provider(err)
    }
}

impl From<ConfigError> for PawError {
    fn from(err: ConfigError) -> Self {
        PawError::Config(err)
    }
}

impl From<SystemError> for PawError {
    fn from(err: SystemError) -> Self {
        PawError::System(err)
    }
}

impl From<std::io::Error> for PawError {
    fn from(err: std::io::Error) -> Self {
        use super::system::classify_io_error;
        PawError::System(classify_io_error(err, None, "I/O operation"))
    }
}

impl From<image::ImageError> for PawError {
    fn from(err: image::ImageError) -> Self {
        PawError::System(SystemError::DecodeFailed {
            message: err.to_string(),
        })
    }
}
