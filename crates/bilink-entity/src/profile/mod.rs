//! Public profile document entities.

pub mod defaults;
pub mod link;
pub mod model;

pub use link::{Link, LinkType};
pub use model::{Contact, ProfileDocument, Project, Skill};
