//! Convenience result type alias for Midgard.

use crate::error::AppError;

/// A specialized `Result` type for Midgard operations.
pub type AppResult<T> = Result<T, AppError>;
