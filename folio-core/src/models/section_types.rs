//! Section identifiers for the single-page document.
//!
//! Every section of the portfolio is addressed by a `SectionType`; the nav,
//! the section engine, and the document layout all key off this enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The sections of the portfolio document, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    About,
    Expertise,
    Experience,
    Projects,
    Awards,
    Certifications,
    Research,
    Education,
    Footer,
}

impl SectionType {
    /// All section types in document order
    pub fn all() -> Vec<SectionType> {
        vec![
            SectionType::About,
            SectionType::Expertise,
            SectionType::Experience,
            SectionType::Projects,
            SectionType::Awards,
            SectionType::Certifications,
            SectionType::Research,
            SectionType::Education,
            SectionType::Footer,
        ]
    }

    /// Stable string form used for serialization and CLI arguments
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::About => "about",
            SectionType::Expertise => "expertise",
            SectionType::Experience => "experience",
            SectionType::Projects => "projects",
            SectionType::Awards => "awards",
            SectionType::Certifications => "certifications",
            SectionType::Research => "research",
            SectionType::Education => "education",
            SectionType::Footer => "footer",
        }
    }

    /// Parse from string, case-insensitive
    pub fn parse(s: &str) -> Option<SectionType> {
        match s.to_lowercase().as_str() {
            "about" => Some(SectionType::About),
            "expertise" => Some(SectionType::Expertise),
            "experience" | "work" => Some(SectionType::Experience),
            "projects" => Some(SectionType::Projects),
            "awards" => Some(SectionType::Awards),
            "certifications" => Some(SectionType::Certifications),
            "research" => Some(SectionType::Research),
            "education" => Some(SectionType::Education),
            "footer" => Some(SectionType::Footer),
            _ => None,
        }
    }

    /// Get display name for the nav tabs
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionType::About => "About",
            SectionType::Expertise => "Expertise",
            SectionType::Experience => "Experience",
            SectionType::Projects => "Projects",
            SectionType::Awards => "Awards",
            SectionType::Certifications => "Certifications",
            SectionType::Research => "Research",
            SectionType::Education => "Education",
            SectionType::Footer => "Footer",
        }
    }

    /// Whether this section participates in the reveal-on-scroll effect.
    /// The hero renders immediately; everything below reveals as it
    /// approaches the viewport.
    pub fn supports_reveal(&self) -> bool {
        !matches!(self, SectionType::About)
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SectionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown section type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_type_string_conversion() {
        for section in SectionType::all() {
            let as_string = section.as_str();
            let parsed = SectionType::parse(as_string).unwrap();
            assert_eq!(section, parsed);
        }
    }

    #[test]
    fn test_case_insensitive_parsing() {
        assert_eq!(SectionType::parse("ABOUT"), Some(SectionType::About));
        assert_eq!(SectionType::parse("Research"), Some(SectionType::Research));
    }

    #[test]
    fn test_work_aliases_experience() {
        // The studio skin anchors the timeline at #work
        assert_eq!(SectionType::parse("work"), Some(SectionType::Experience));
    }

    #[test]
    fn test_invalid_section_type() {
        assert_eq!(SectionType::parse("invalid"), None);
        assert_eq!(SectionType::parse(""), None);
    }

    #[test]
    fn test_reveal_support() {
        assert!(!SectionType::About.supports_reveal());
        assert!(SectionType::Experience.supports_reveal());
        assert!(SectionType::Footer.supports_reveal());
    }

    #[test]
    fn test_serde_serialization() {
        let section = SectionType::Certifications;
        let json = serde_json::to_string(&section).unwrap();
        assert_eq!(json, "\"certifications\"");
        let deserialized: SectionType = serde_json::from_str(&json).unwrap();
        assert_eq!(section, deserialized);
    }
}
