//! # bilink-api
//!
//! HTTP API layer for Bilink built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, request logging),
//! extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, init_logging, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
