//! Social and contact links shown on the homepage.

use serde::{Deserialize, Serialize};

/// The kind of a link; drives the icon the frontend renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// GitHub profile.
    Github,
    /// Twitter / X profile.
    Twitter,
    /// LinkedIn profile.
    Linkedin,
    /// Instagram profile.
    Instagram,
    /// YouTube channel.
    Youtube,
    /// Personal blog.
    Blog,
    /// Any other website.
    Website,
    /// A `mailto:` link.
    Email,
}

/// A labelled outbound link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Link kind.
    #[serde(rename = "type")]
    pub kind: LinkType,
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// Target URL.
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_name() {
        let link: Link =
            serde_json::from_str(r#"{"type":"github","label":"GitHub","url":"https://github.com"}"#)
                .unwrap();
        assert_eq!(link.kind, LinkType::Github);
        let value = serde_json::to_value(&link).unwrap();
        assert_eq!(value["type"], "github");
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result = serde_json::from_str::<Link>(r#"{"type":"myspace","label":"x","url":"y"}"#);
        assert!(result.is_err());
    }
}
