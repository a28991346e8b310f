//! # bilink-core
//!
//! Core crate for Bilink. Contains configuration schemas, the unified
//! error system, and the store trait implemented by every persistence
//! backend.
//!
//! This crate has **no** internal dependencies on other Bilink crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
