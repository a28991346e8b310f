//! Session token creation with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use bilink_core::config::AuthConfig;
use bilink_core::error::AppError;
use bilink_entity::admin::Role;

use super::claims::Claims;

/// A freshly signed session token.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// The compact JWT.
    pub token: String,
    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

/// Creates signed HS256 session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime.
    ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// Fails when `token_ttl_hours` does not fit a `chrono::Duration`.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let ttl = i64::try_from(config.token_ttl_hours)
            .ok()
            .and_then(Duration::try_hours)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "auth.token_ttl_hours is out of range: {}",
                    config.token_ttl_hours
                ))
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl,
        })
    }

    /// Issues a token for the given account, valid from now.
    pub fn issue(&self, username: &str, role: Role) -> Result<IssuedToken, AppError> {
        self.issue_at(username, role, Utc::now())
    }

    /// Issues a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        username: &str,
        role: Role,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        let expires_at = now.checked_add_signed(self.ttl).ok_or_else(|| {
            AppError::configuration("Token expiry is beyond the supported date range")
        })?;
        let claims = Claims {
            username: username.to_string(),
            role: role.as_str().to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}

#[cfg(test)]
mod tests {
    use bilink_core::error::ErrorKind;
    use chrono::TimeZone;

    use super::*;

    fn config(ttl_hours: u64) -> AuthConfig {
        AuthConfig {
            token_ttl_hours: ttl_hours,
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_ttl_from_config() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let issued = JwtEncoder::new(&config(2))
            .unwrap()
            .issue_at("admin", Role::Admin, now)
            .unwrap();
        assert_eq!(issued.expires_at, now + Duration::hours(2));
    }

    #[test]
    fn test_out_of_range_ttl_is_a_configuration_error() {
        let err = JwtEncoder::new(&config(u64::MAX)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);

        let err = JwtEncoder::new(&config(i64::MAX as u64)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_expiry_past_calendar_end_is_an_error() {
        // About 285 000 years: a valid Duration, but past chrono's last date.
        let encoder = JwtEncoder::new(&config(2_500_000_000)).unwrap();
        let err = encoder.issue("admin", Role::Admin).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
