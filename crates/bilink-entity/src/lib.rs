//! # bilink-entity
//!
//! Domain entity models for Bilink. The store holds exactly one
//! [`AdminAccount`](admin::AdminAccount) and one
//! [`ProfileDocument`](profile::ProfileDocument). All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`; the account additionally
//! derives `sqlx::FromRow`.

pub mod admin;
pub mod profile;
