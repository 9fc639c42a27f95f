//! Presentation modes.
//!
//! The source material carries two divergent top-level skins over the same
//! content. They are kept as explicit, selectable modes rather than merged:
//! each owns its nav set, its accent, and its extras.

use super::section_types::SectionType;
use serde::{Deserialize, Serialize};

/// A top-level skin for the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationMode {
    /// Canonical variant: full nav including awards, indigo accent.
    #[default]
    Gallery,
    /// Alternate variant: timeline anchored at "work", no awards section,
    /// emerald accent, a "Hire Me" footer link, and experience entry links
    /// shown on the cards.
    Studio,
}

impl PresentationMode {
    /// Sections of the document for this mode, in display order.
    pub fn sections(&self) -> Vec<SectionType> {
        match self {
            PresentationMode::Gallery => SectionType::all(),
            PresentationMode::Studio => SectionType::all()
                .into_iter()
                .filter(|s| *s != SectionType::Awards)
                .collect(),
        }
    }

    /// Sections that appear as nav tabs (the footer never does).
    pub fn nav_sections(&self) -> Vec<SectionType> {
        self.sections()
            .into_iter()
            .filter(|s| *s != SectionType::Footer)
            .collect()
    }

    /// In-page anchor for a section; the studio skin anchors the timeline
    /// at "work".
    pub fn anchor(&self, section: SectionType) -> &'static str {
        match (self, section) {
            (PresentationMode::Studio, SectionType::Experience) => "work",
            _ => section.as_str(),
        }
    }

    /// Nav label for a section.
    pub fn nav_label(&self, section: SectionType) -> &'static str {
        match (self, section) {
            (PresentationMode::Studio, SectionType::Experience) => "Work",
            _ => section.display_name(),
        }
    }

    /// Whether experience entries show their external link on the card.
    pub fn shows_experience_links(&self) -> bool {
        matches!(self, PresentationMode::Studio)
    }

    /// Extra footer call-to-action, if the mode has one.
    pub fn hire_me_label(&self) -> Option<&'static str> {
        match self {
            PresentationMode::Gallery => None,
            PresentationMode::Studio => Some("Hire Me"),
        }
    }

    /// Stable string form for CLI/config.
    pub fn as_str(&self) -> &'static str {
        match self {
            PresentationMode::Gallery => "gallery",
            PresentationMode::Studio => "studio",
        }
    }

    /// Parse from string, case-insensitive.
    pub fn parse(s: &str) -> Option<PresentationMode> {
        match s.to_lowercase().as_str() {
            "gallery" => Some(PresentationMode::Gallery),
            "studio" => Some(PresentationMode::Studio),
            _ => None,
        }
    }
}

impl std::fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PresentationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown presentation mode: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_has_awards() {
        assert!(PresentationMode::Gallery
            .sections()
            .contains(&SectionType::Awards));
        assert!(!PresentationMode::Studio
            .sections()
            .contains(&SectionType::Awards));
    }

    #[test]
    fn test_nav_excludes_footer() {
        for mode in [PresentationMode::Gallery, PresentationMode::Studio] {
            assert!(!mode.nav_sections().contains(&SectionType::Footer));
        }
    }

    #[test]
    fn test_studio_work_anchor() {
        assert_eq!(
            PresentationMode::Studio.anchor(SectionType::Experience),
            "work"
        );
        assert_eq!(
            PresentationMode::Gallery.anchor(SectionType::Experience),
            "experience"
        );
        assert_eq!(PresentationMode::Studio.anchor(SectionType::About), "about");
    }

    #[test]
    fn test_mode_extras() {
        assert!(PresentationMode::Studio.shows_experience_links());
        assert!(!PresentationMode::Gallery.shows_experience_links());
        assert_eq!(PresentationMode::Studio.hire_me_label(), Some("Hire Me"));
        assert_eq!(PresentationMode::Gallery.hire_me_label(), None);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(
            PresentationMode::parse("STUDIO"),
            Some(PresentationMode::Studio)
        );
        assert_eq!(PresentationMode::parse("nope"), None);
        assert_eq!(PresentationMode::default(), PresentationMode::Gallery);
    }
}
