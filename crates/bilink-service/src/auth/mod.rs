//! Authentication and account management.

pub mod service;

pub use service::{AuthService, LoginOutcome};
