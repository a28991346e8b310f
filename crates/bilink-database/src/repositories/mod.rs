//! SQL repository implementations of the single-record store.

pub mod admin;
pub mod profile;

pub use admin::AdminRepository;
pub use profile::ProfileRepository;
