//! Content record types.
//!
//! All entities are plain immutable value records with no identity beyond
//! their array position. They are constructed once at startup and never
//! mutated afterward; every view holds references into the store.

use serde::{Deserialize, Serialize};

pub mod presentation;
pub mod section_types;

/// One employment or internship entry on the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    /// Display text, never parsed ("July 2025 – Jan 2026").
    pub period: String,
    pub location: String,
    pub bullets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A portfolio project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A published paper, copyright registration, or book chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub description: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
}

/// A named group of skills shown as one marquee row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

/// An award or honor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub org: String,
    pub date: String,
    pub description: String,
}

/// An external credential with an optional hosted certificate link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// One entry of the education history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub period: String,
    pub location: String,
    pub details: String,
}

/// Identity and contact data rendered in the hero and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    pub about: String,
    pub portrait: String,
    pub badge: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub resume_path: String,
    pub footer_heading: String,
    pub copyright: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_roundtrip() {
        let project = Project {
            title: "GreenLoop".to_string(),
            description: "Waste reporting".to_string(),
            tags: vec!["Cloud".to_string()],
            link: Some("https://example.com".to_string()),
            github: None,
            image: None,
        };

        let json = serde_json::to_string(&project).unwrap();
        assert!(!json.contains("github"));

        let parsed: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, project);
    }

    #[test]
    fn test_experience_deserializes_without_link() {
        let json = r#"{
            "company": "Lab",
            "role": "Intern",
            "period": "2024",
            "location": "Chennai",
            "bullets": ["Built a thing"]
        }"#;

        let exp: Experience = serde_json::from_str(json).unwrap();
        assert_eq!(exp.link, None);
        assert_eq!(exp.bullets.len(), 1);
    }
}
