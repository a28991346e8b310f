//! # bilink-database
//!
//! Persistence for the single admin account and the profile document.
//! Three interchangeable backends implement
//! [`SingletonRepository`](bilink_core::traits::SingletonRepository):
//! SQLite (via sqlx), a flat JSON file, and process memory.
//! [`StoreManager`] picks one from configuration.

pub mod connection;
pub mod json_file;
pub mod manager;
pub mod memory;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use json_file::JsonFileStore;
pub use manager::StoreManager;
pub use memory::MemoryStore;
