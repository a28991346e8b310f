//! Request DTOs with validation.
//!
//! Fields default to empty so that a missing field surfaces as a
//! validation message rather than a deserialization error.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub username: String,
    /// Password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub password: String,
}

/// Account update request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    /// New username.
    #[serde(default)]
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    /// Current password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Current password and new password are required"))]
    pub current_password: String,
    /// New password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Current password and new password are required"))]
    pub new_password: String,
}
