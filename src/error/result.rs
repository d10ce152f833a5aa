//! Result type alias for pawswipe operations.

use super::paw_error::PawError;

/// Type alias for Results using PawError.
pub type PawResult<T> = Result<T, PawError>;
