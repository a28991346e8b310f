//! Auth handlers: login, verify, account and password updates.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{LoginRequest, UpdateAccountRequest, UpdatePasswordRequest};
use crate::dto::response::{LoginResponse, MessageResponse, VerifyResponse};
use crate::error::ApiResult;
use crate::extractors::{AdminUser, AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let outcome = state.auth.login(&req.username, &req.password).await?;

    Ok(Json(LoginResponse {
        token: outcome.token,
        expires_at: outcome.expires_at,
        user: outcome.user.into(),
    }))
}

/// GET /api/auth/verify
pub async fn verify(AuthUser(identity): AuthUser) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        user: identity.into(),
    })
}

/// PUT /api/auth/account
pub async fn update_account(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(req): ValidatedJson<UpdateAccountRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state.auth.update_username(&req.username).await?;
    Ok(Json(MessageResponse::new("Account updated")))
}

/// PUT /api/auth/password
pub async fn update_password(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(req): ValidatedJson<UpdatePasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .auth
        .update_password(&req.current_password, &req.new_password)
        .await?;
    Ok(Json(MessageResponse::new("Password updated")))
}
