//! Convenience result type alias for Bilink.

use crate::error::AppError;

/// A specialized `Result` type for Bilink operations.
pub type AppResult<T> = Result<T, AppError>;
