//! Admin account entities.

pub mod model;
pub mod role;

pub use model::AdminAccount;
pub use role::Role;
