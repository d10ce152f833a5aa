//! Error category classification.
//!
//! Categories drive how an error is reported: provider failures are skipped
//! and logged, configuration errors stop startup with a hint.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS, timeout. Transient.
    Network,

    /// Remote service answered with an error or unusable payload.
    Server,

    /// Filesystem, terminal and other OS errors.
    System,

    /// Invalid settings or environment overrides.
    Configuration,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection, or run with --offline",
            ErrorCategory::Server => "The image service may be having issues. Try again later",
            ErrorCategory::System => "Check file permissions and your terminal",
            ErrorCategory::Configuration => "Check your PAWSWIPE_* environment variables and flags",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
