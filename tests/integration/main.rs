//! End-to-end tests driving the Axum router in-process.

mod auth_test;
mod health_test;
mod helpers;
mod profile_test;
