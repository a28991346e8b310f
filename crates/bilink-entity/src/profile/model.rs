//! Profile document entity model.

use serde::{Deserialize, Serialize};

use bilink_core::error::AppError;

use super::link::Link;

/// Highest allowed skill level.
pub const MAX_SKILL_LEVEL: u8 = 100;

/// The public-facing content of the homepage.
///
/// Stored as a single JSON document. Field names are camelCase on the
/// wire; `avatar` and `image` written by older releases are accepted as
/// aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Headline under the name.
    #[serde(default)]
    pub title: String,
    /// Short bio.
    #[serde(default)]
    pub bio: String,
    /// Avatar image URL.
    #[serde(default, alias = "avatar")]
    pub avatar_url: String,
    /// Longer "about me" text.
    #[serde(default)]
    pub about: String,
    /// Skills, in display order.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Showcased projects, in display order.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Outbound links, in display order.
    #[serde(default)]
    pub links: Vec<Link>,
    /// Contact details.
    #[serde(default)]
    pub contact: Contact,
}

/// A skill with a proficiency level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name.
    pub name: String,
    /// Emoji or icon identifier.
    #[serde(default)]
    pub icon: String,
    /// Proficiency from 0 to 100.
    pub level: u8,
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project title.
    pub title: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Project URL.
    #[serde(default)]
    pub url: String,
    /// Cover image URL.
    #[serde(default, alias = "image")]
    pub image_url: String,
    /// Technology tags; unique, in first-seen order.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Contact block. Replaced as a whole on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Contact {
    /// Public email address.
    #[serde(default)]
    pub email: String,
    /// Free-form location.
    #[serde(default)]
    pub location: String,
}

impl ProfileDocument {
    /// Check the document invariants.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Name cannot be empty"));
        }

        for skill in &self.skills {
            if skill.level > MAX_SKILL_LEVEL {
                return Err(AppError::validation(format!(
                    "Skill '{}' has level {}; levels range from 0 to {MAX_SKILL_LEVEL}",
                    skill.name, skill.level
                )));
            }
        }

        Ok(())
    }

    /// Bring the document into canonical form: project tags become a set
    /// that keeps the first occurrence of each tag.
    pub fn normalize(&mut self) {
        for project in &mut self.projects {
            let mut seen = std::collections::HashSet::new();
            project.tags.retain(|tag| seen.insert(tag.clone()));
        }
    }
}
