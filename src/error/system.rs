//! System-related error types.

use std::fmt;
use std::path::PathBuf;

/// Errors from the OS, filesystem and terminal.
#[derive(Debug, Clone)]
pub enum SystemError {
    /// Generic I/O error.
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },

    /// Could not determine a data directory for the log file.
    NoDataDirectory,

    /// Image bytes could not be decoded.
    DecodeFailed { message: String },
}

impl SystemError {
    pub fn user_message(&self) -> String {
        match self {
            SystemError::IoError {
                operation, path, ..
            } => match path {
                Some(p) => format!("Failed to {} '{}'", operation, p.display()),
                None => format!("Failed to {}", operation),
            },
            SystemError::NoDataDirectory => {
                "Could not determine a data directory for logs.".to_string()
            }
            SystemError::DecodeFailed { .. } => "An image could not be displayed.".to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::IoError { .. } => "SYS_IO",
            SystemError::NoDataDirectory => "SYS_NO_DATA_DIR",
            SystemError::DecodeFailed { .. } => "SYS_DECODE",
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::IoError {
                operation,
                path,
                message,
            } => match path {
                Some(p) => write!(f, "I/O error during {} on '{}': {}", operation, p.display(), message),
                None => write!(f, "I/O error during {}: {}", operation, message),
            },
            SystemError::NoDataDirectory => write!(f, "No data directory"),
            SystemError::DecodeFailed { message } => write!(f, "Image decode failed: {}", message),
        }
    }
}

impl std::error::Error for SystemError {}

/// Wrap an `io::Error` with the operation and path that produced it.
pub fn classify_io_error(
    err: std::io::Error,
    path: Option<PathBuf>,
    operation: &str,
) -> SystemError {
    SystemError::IoError {
        operation: operation.to_string(),
        path,
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_io_error() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let sys = classify_io_error(err, Some(PathBuf::from("/tmp/x.log")), "open log file");
        assert_eq!(sys.error_code(), "SYS_IO");
        assert_eq!(sys.user_message(), "Failed to open log file '/tmp/x.log'");
        assert!(sys.to_string().contains("denied"));
    }
}
