//! Profile handlers.

use axum::Json;
use axum::extract::State;
use serde_json::Value;

use bilink_core::error::AppError;
use bilink_entity::profile::ProfileDocument;

use crate::dto::response::ProfileUpdateResponse;
use crate::error::ApiResult;
use crate::extractors::{AdminUser, JsonBody};
use crate::state::AppState;

/// GET /api/profile
pub async fn get_profile(State(state): State<AppState>) -> Json<ProfileDocument> {
    Json(state.profile.get_profile().await)
}

/// PUT /api/profile
pub async fn update_profile(
    State(state): State<AppState>,
    admin: AdminUser,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<Json<ProfileUpdateResponse>> {
    let Value::Object(partial) = body else {
        return Err(AppError::validation("Profile update must be a JSON object").into());
    };

    let profile = state.profile.update_profile(&partial).await?;
    tracing::debug!(username = %admin.username, "Profile saved");

    Ok(Json(ProfileUpdateResponse {
        message: "Profile saved".to_string(),
        profile,
    }))
}
