//! Result type aliases for Scribe.

use crate::ScribeError;

/// A specialized `Result` type for Scribe operations.
pub type ScribeResult<T> = Result<T, ScribeError>;
