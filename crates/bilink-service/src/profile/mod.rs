//! Profile document reads and shallow-merge updates.

pub mod merge;
pub mod service;

pub use merge::shallow_merge;
pub use service::ProfileService;
