//! HTTP request handlers.

pub mod auth;
pub mod health;
pub mod profile;

use bilink_core::error::AppError;

use crate::error::ApiError;

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    AppError::not_found("Route not found").into()
}
