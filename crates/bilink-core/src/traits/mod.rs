//! Core traits defined in `bilink-core` and implemented by other crates.

pub mod repository;

pub use repository::SingletonRepository;
