//! Role guard for admin-only operations.

use bilink_core::error::AppError;
use bilink_entity::admin::Role;

use crate::jwt::Identity;

/// Checks that the identity carries the required role.
///
/// Returns `Ok(())` if allowed, or an authorization error if denied.
pub fn require_role(identity: &Identity, role: Role) -> Result<(), AppError> {
    if identity.role != role.as_str() {
        return Err(AppError::authorization(format!(
            "This action requires the '{role}' role"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use bilink_core::error::ErrorKind;

    use super::*;

    fn identity(role: &str) -> Identity {
        Identity {
            username: "someone".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_matching_role_passes() {
        assert!(require_role(&identity("admin"), Role::Admin).is_ok());
    }

    #[test]
    fn test_other_role_is_forbidden() {
        let err = require_role(&identity("viewer"), Role::Admin).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }
}
