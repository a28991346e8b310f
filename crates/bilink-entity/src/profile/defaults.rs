//! Built-in profile shown before the owner saves anything.

use super::link::{Link, LinkType};
use super::model::{Contact, ProfileDocument, Project, Skill};

fn skill(name: &str, icon: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        icon: icon.to_string(),
        level,
    }
}

fn link(kind: LinkType, label: &str, url: &str) -> Link {
    Link {
        kind,
        label: label.to_string(),
        url: url.to_string(),
    }
}

impl Default for ProfileDocument {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            title: "Creative Developer".to_string(),
            bio: "Welcome to my personal space. I create digital experiences.".to_string(),
            avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=bilink".to_string(),
            about: "Passionate about technology and focused on crafting great digital \
                    experiences. Good design and good code make the world a better place."
                .to_string(),
            skills: vec![
                skill("JavaScript", "🟨", 90),
                skill("React", "⚛️", 85),
                skill("Node.js", "💚", 80),
                skill("Python", "🐍", 75),
                skill("UI/UX", "🎨", 70),
            ],
            projects: vec![Project {
                title: "Personal Homepage".to_string(),
                description: "A modern personal showcase page with a liquid-glass design."
                    .to_string(),
                url: "#".to_string(),
                image_url: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400"
                    .to_string(),
                tags: vec!["React".to_string(), "Node.js".to_string(), "CSS".to_string()],
            }],
            links: vec![
                link(LinkType::Github, "GitHub", "https://github.com"),
                link(LinkType::Twitter, "Twitter", "https://twitter.com"),
                link(LinkType::Email, "Email", "mailto:hello@example.com"),
            ],
            contact: Contact {
                email: "hello@example.com".to_string(),
                location: "China".to_string(),
            },
        }
    }
}
