//! # bilink-auth
//!
//! Authentication primitives for the Bilink admin surface.
//!
//! ## Modules
//!
//! - `jwt`: session token issuance and validation
//! - `password`: Argon2id hashing (with legacy bcrypt verification) and policy enforcement
//! - `rbac`: role guard for admin-only operations

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, Identity, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordPolicyError, PasswordValidator};
pub use rbac::require_role;
