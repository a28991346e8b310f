//! # bilink-service
//!
//! Business logic service layer for Bilink. [`AuthService`] owns the
//! admin account and session tokens; [`ProfileService`] owns the public
//! profile document.
//!
//! Services follow constructor injection: store handles are provided at
//! construction time via `Arc` references.

pub mod auth;
pub mod bootstrap;
pub mod profile;

pub use auth::{AuthService, LoginOutcome};
pub use bootstrap::{Services, bootstrap};
pub use profile::ProfileService;
