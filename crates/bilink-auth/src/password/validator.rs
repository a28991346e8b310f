//! Password policy enforcement for new passwords.

use thiserror::Error;

use bilink_core::config::AuthConfig;
use bilink_core::error::AppError;

/// Characters accepted as the required symbol.
pub const PASSWORD_SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// The first policy rule a candidate password violates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Fewer characters than the configured minimum.
    #[error("Password must be at least {min} characters long")]
    TooShort {
        /// The configured minimum.
        min: usize,
    },
    /// No uppercase letter.
    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,
    /// No lowercase letter.
    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,
    /// No character from [`PASSWORD_SYMBOLS`].
    #[error("Password must contain at least one special character")]
    MissingSymbol,
}

impl From<PasswordPolicyError> for AppError {
    fn from(err: PasswordPolicyError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length in UTF-16 code units.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Rules are checked in order (length, uppercase, lowercase, symbol)
    /// and the first violation is returned. Length is counted in UTF-16
    /// code units and only ASCII letters satisfy the case rules, matching
    /// the checks browser clients already apply.
    pub fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        if password.encode_utf16().count() < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min: self.min_length,
            });
        }

        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(PasswordPolicyError::MissingUppercase);
        }

        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(PasswordPolicyError::MissingLowercase);
        }

        if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
            return Err(PasswordPolicyError::MissingSymbol);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig::default())
    }

    #[test]
    fn test_accepts_compliant_password() {
        assert_eq!(validator().validate("Abcdefg!"), Ok(()));
    }

    #[test]
    fn test_each_rule_is_reported() {
        let v = validator();
        assert_eq!(
            v.validate("Ab!"),
            Err(PasswordPolicyError::TooShort { min: 8 })
        );
        assert_eq!(
            v.validate("abcdefg!"),
            Err(PasswordPolicyError::MissingUppercase)
        );
        assert_eq!(
            v.validate("ABCDEFG!"),
            Err(PasswordPolicyError::MissingLowercase)
        );
        assert_eq!(
            v.validate("Abcdefgh"),
            Err(PasswordPolicyError::MissingSymbol)
        );
        assert_eq!(
            v.validate("Ébcdefg!"),
            Err(PasswordPolicyError::MissingUppercase)
        );
        assert_eq!(
            v.validate("ABCDEFGß!"),
            Err(PasswordPolicyError::MissingLowercase)
        );
    }

    #[test]
    fn test_length_counts_utf16_units() {
        let v = validator();
        // Each emoji is a surrogate pair.
        assert_eq!(v.validate("😀😀😀😀Ab!"), Ok(()));
        assert_eq!(
            v.validate("😀😀Ab!"),
            Err(PasswordPolicyError::TooShort { min: 8 })
        );
    }

    #[test]
    fn test_first_violation_wins() {
        assert_eq!(
            validator().validate("abc"),
            Err(PasswordPolicyError::TooShort { min: 8 })
        );
    }

    #[test]
    fn test_symbol_set() {
        let v = validator();
        for symbol in PASSWORD_SYMBOLS.chars() {
            assert!(v.validate(&format!("Abcdefg{symbol}")).is_ok(), "{symbol}");
        }
        assert_eq!(
            v.validate("Abcdefg~"),
            Err(PasswordPolicyError::MissingSymbol)
        );
    }

    #[test]
    fn test_converts_to_validation_error() {
        let err: AppError = PasswordPolicyError::MissingSymbol.into();
        assert_eq!(err.kind, bilink_core::error::ErrorKind::Validation);
    }
}
