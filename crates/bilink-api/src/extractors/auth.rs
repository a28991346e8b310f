//! `AuthUser` and `AdminUser` extractors: pull the bearer token from the
//! Authorization header, validate it, and inject the identity.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use bilink_auth::jwt::Identity;
use bilink_core::error::AppError;
use bilink_entity::admin::Role;

use crate::error::ApiError;
use crate::state::AppState;

/// Identity of a caller holding a valid token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl std::ops::Deref for AuthUser {
    type Target = Identity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let identity = state.auth.verify(token)?;
        Ok(AuthUser(identity))
    }
}

/// Identity of a caller holding a valid token with the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Identity);

impl std::ops::Deref for AdminUser {
    type Target = Identity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(identity) = AuthUser::from_request_parts(parts, state).await?;
        state.auth.require_role(&identity, Role::Admin)?;
        Ok(AdminUser(identity))
    }
}
