//! Folio Visualization - the section engine.
//!
//! Turns the content store plus a presentation mode into structured,
//! serializable `RenderableSection` values. The TUI renders these; the
//! export mode serializes them verbatim. All layout decisions that are
//! content-shaped (featured slots, accent cycles, marquee directions,
//! milestone years) are made here so the renderer stays dumb.

#![warn(clippy::all, clippy::pedantic)]

use anyhow::Result;
use chrono::{DateTime, Utc};
use folio_core::{
    content::ContentStore,
    links::{doi_url, embed_link, mailto},
    models::{presentation::PresentationMode, section_types::SectionType},
    progress::entry_threshold,
};
use folio_utils::logging::get_logger;
use folio_utils::string::{initials, normalize_whitespace};
use serde::{Deserialize, Serialize};

mod icons;

pub use icons::icon_url;

/// Main section-generation engine
#[derive(Debug, Clone)]
pub struct SectionEngine {
    config: VizConfig,
}

/// Configuration for section generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizConfig {
    /// Terminal width (characters)
    pub terminal_width: u16,
    /// Terminal height (characters)
    pub terminal_height: u16,
    /// Maximum items to show in lists
    pub max_list_items: usize,
    /// Maximum description lines on compact cards
    pub description_clamp: usize,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            terminal_width: 120,
            terminal_height: 40,
            max_list_items: 20,
            description_clamp: 3,
        }
    }
}

/// Accent colors drawn from the portfolio palette; the renderer maps these
/// to terminal colors per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Indigo,
    Blue,
    Orange,
    Emerald,
    Purple,
    Pink,
    Red,
    Violet,
    Rose,
}

/// Accent cycle for award cards.
pub const AWARD_ACCENTS: [Accent; 4] =
    [Accent::Blue, Accent::Orange, Accent::Emerald, Accent::Purple];

/// Accent cycle for publication cards.
pub const RESEARCH_ACCENTS: [Accent; 6] = [
    Accent::Orange,
    Accent::Pink,
    Accent::Blue,
    Accent::Emerald,
    Accent::Red,
    Accent::Violet,
];

/// Accent sequence for education milestones (newest first).
pub const EDUCATION_ACCENTS: [Accent; 3] = [Accent::Blue, Accent::Rose, Accent::Orange];

/// A renderable section of the document
#[derive(Debug, Clone, Serialize)]
pub struct RenderableSection {
    pub section_type: SectionType,
    pub title: String,
    pub anchor: String,
    pub content: SectionContent,
    pub timestamp: DateTime<Utc>,
}

/// Content types for the different sections
#[derive(Debug, Clone, Serialize)]
pub enum SectionContent {
    /// Hero banner with identity and social links
    Hero {
        greeting: String,
        name: String,
        about: String,
        portrait: String,
        badge: String,
        social: Vec<OutboundLink>,
    },
    /// Skills marquee, one row per category
    Expertise { rows: Vec<MarqueeRow> },
    /// Experience timeline with per-entry activation thresholds
    Experience {
        cards: Vec<ExperienceCard>,
        show_links: bool,
    },
    /// Project gallery: featured slots plus standard pairs
    Projects { cards: Vec<ProjectCard> },
    /// Awards and honors, alternating sides
    Awards { cards: Vec<AwardCard> },
    /// Certifications with embeddable preview links
    Certifications { cards: Vec<CertificateCard> },
    /// Research and publications carousel
    Research { cards: Vec<PublicationCard> },
    /// Education history milestones
    Education { cards: Vec<EducationCard> },
    /// Footer with contact call-to-action
    Footer {
        heading: String,
        email: OutboundLink,
        resume: OutboundLink,
        social: Vec<OutboundLink>,
        hire_me: Option<OutboundLink>,
        copyright: String,
    },
}

/// A labelled external link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundLink {
    pub label: String,
    pub url: String,
}

/// Scrolling direction of a marquee row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarqueeDirection {
    Leftward,
    Rightward,
}

/// One marquee row of skills
#[derive(Debug, Clone, Serialize)]
pub struct MarqueeRow {
    pub category: String,
    pub direction: MarqueeDirection,
    pub items: Vec<MarqueeItem>,
}

/// One skill chip in a marquee row
#[derive(Debug, Clone, Serialize)]
pub struct MarqueeItem {
    pub name: String,
    pub icon: IconRef,
}

/// Icon for a technology: a CDN asset when one exists, otherwise a
/// two-letter initials badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum IconRef {
    Url(String),
    Initials(String),
}

/// One experience timeline card
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceCard {
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    pub bullets: Vec<String>,
    pub link: Option<String>,
    /// Giant background numbering, 1-based
    pub number: usize,
    /// Activation threshold on the scroll-progress scale
    pub threshold: f64,
}

/// Layout slot of a project card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectSlot {
    Featured,
    Standard,
}

/// One project gallery card
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub slot: ProjectSlot,
    pub caption: String,
    pub visit_url: Option<String>,
    pub github: Option<String>,
    pub image: Option<String>,
}

/// Side of the central line an award card sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardSide {
    Left,
    Right,
}

/// One award card
#[derive(Debug, Clone, Serialize)]
pub struct AwardCard {
    pub title: String,
    pub org: String,
    pub date: String,
    pub description: String,
    pub accent: Accent,
    pub side: CardSide,
}

/// One certification card
#[derive(Debug, Clone, Serialize)]
pub struct CertificateCard {
    pub name: String,
    pub issuer: String,
    /// Link rewritten for embedding (Drive view -> preview)
    pub embed_url: Option<String>,
}

/// One publication card
#[derive(Debug, Clone, Serialize)]
pub struct PublicationCard {
    pub title: String,
    pub description: String,
    pub year: String,
    pub identifier: String,
    pub doi_url: Option<String>,
    pub accent: Accent,
}

/// One education milestone card
#[derive(Debug, Clone, Serialize)]
pub struct EducationCard {
    pub school: String,
    pub degree: String,
    pub period: String,
    pub location: String,
    pub details: String,
    /// Milestone badge text: "NOW" for the current entry, else the start
    /// year of the period
    pub milestone: String,
    pub accent: Accent,
}

impl SectionEngine {
    /// Create a new section engine
    pub fn new() -> Self {
        Self {
            config: VizConfig::default(),
        }
    }

    /// Configure the engine
    pub fn with_config(mut self, config: VizConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &VizConfig {
        &self.config
    }

    /// Generate every section of the document for a presentation mode, in
    /// display order.
    pub fn generate_document(
        &self,
        store: &ContentStore,
        mode: PresentationMode,
    ) -> Result<Vec<RenderableSection>> {
        mode.sections()
            .into_iter()
            .map(|section| self.generate_section(section, store, mode))
            .collect()
    }

    /// Generate one renderable section from the content store.
    pub fn generate_section(
        &self,
        section_type: SectionType,
        store: &ContentStore,
        mode: PresentationMode,
    ) -> Result<RenderableSection> {
        let logger = get_logger("folio.viz");
        logger.info(&format!("Generating {} section", section_type));

        let content = match section_type {
            SectionType::About => self.generate_hero(store),
            SectionType::Expertise => self.generate_expertise(store),
            SectionType::Experience => self.generate_experience(store, mode),
            SectionType::Projects => self.generate_projects(store),
            SectionType::Awards => self.generate_awards(store),
            SectionType::Certifications => self.generate_certifications(store),
            SectionType::Research => self.generate_research(store),
            SectionType::Education => self.generate_education(store),
            SectionType::Footer => self.generate_footer(store, mode),
        };

        Ok(RenderableSection {
            section_type,
            title: section_title(section_type).to_string(),
            anchor: mode.anchor(section_type).to_string(),
            content,
            timestamp: Utc::now(),
        })
    }

    fn generate_hero(&self, store: &ContentStore) -> SectionContent {
        let profile = &store.profile;
        SectionContent::Hero {
            greeting: profile.greeting.clone(),
            name: profile.name.clone(),
            about: normalize_whitespace(&profile.about),
            portrait: profile.portrait.clone(),
            badge: profile.badge.clone(),
            social: vec![
                OutboundLink {
                    label: "LinkedIn".to_string(),
                    url: profile.linkedin.clone(),
                },
                OutboundLink {
                    label: "GitHub".to_string(),
                    url: profile.github.clone(),
                },
            ],
        }
    }

    fn generate_expertise(&self, store: &ContentStore) -> SectionContent {
        let rows = store
            .skills
            .iter()
            .enumerate()
            .map(|(row_idx, category)| MarqueeRow {
                category: category.category.clone(),
                // Rows alternate scroll direction, starting leftward
                direction: if row_idx % 2 == 0 {
                    MarqueeDirection::Leftward
                } else {
                    MarqueeDirection::Rightward
                },
                items: category
                    .items
                    .iter()
                    .map(|name| MarqueeItem {
                        name: name.clone(),
                        icon: icon_url(name).map_or_else(
                            || IconRef::Initials(initials(name)),
                            |url| IconRef::Url(url.to_string()),
                        ),
                    })
                    .collect(),
            })
            .collect();

        SectionContent::Expertise { rows }
    }

    fn generate_experience(
        &self,
        store: &ContentStore,
        mode: PresentationMode,
    ) -> SectionContent {
        let count = store.experiences.len();
        let cards = store
            .experiences
            .iter()
            .enumerate()
            .map(|(idx, exp)| ExperienceCard {
                company: exp.company.clone(),
                role: exp.role.clone(),
                period: exp.period.clone(),
                location: exp.location.clone(),
                bullets: exp.bullets.iter().map(|b| normalize_whitespace(b)).collect(),
                link: exp.link.clone(),
                number: idx + 1,
                threshold: entry_threshold(idx, count),
            })
            .collect();

        SectionContent::Experience {
            cards,
            show_links: mode.shows_experience_links(),
        }
    }

    fn generate_projects(&self, store: &ContentStore) -> SectionContent {
        let cards = store
            .projects
            .iter()
            .take(self.config.max_list_items)
            .enumerate()
            .map(|(idx, project)| {
                // Gallery rhythm: slots 0 and 3 run full-width, the rest
                // pair up in a grid
                let slot = if idx == 0 || idx == 3 {
                    ProjectSlot::Featured
                } else {
                    ProjectSlot::Standard
                };
                ProjectCard {
                    title: project.title.clone(),
                    description: normalize_whitespace(&project.description),
                    tags: project.tags.clone(),
                    slot,
                    caption: match slot {
                        ProjectSlot::Featured => "Featured Project".to_string(),
                        ProjectSlot::Standard => "Website Template".to_string(),
                    },
                    visit_url: project.link.clone().or_else(|| project.github.clone()),
                    github: project.github.clone(),
                    image: project.image.clone(),
                }
            })
            .collect();

        SectionContent::Projects { cards }
    }

    fn generate_awards(&self, store: &ContentStore) -> SectionContent {
        let cards = store
            .achievements
            .iter()
            .take(self.config.max_list_items)
            .enumerate()
            .map(|(idx, ach)| AwardCard {
                title: ach.title.clone(),
                org: ach.org.clone(),
                date: ach.date.clone(),
                description: normalize_whitespace(&ach.description),
                accent: AWARD_ACCENTS[idx % AWARD_ACCENTS.len()],
                side: if idx % 2 == 0 {
                    CardSide::Left
                } else {
                    CardSide::Right
                },
            })
            .collect();

        SectionContent::Awards { cards }
    }

    fn generate_certifications(&self, store: &ContentStore) -> SectionContent {
        let cards = store
            .certifications
            .iter()
            .take(self.config.max_list_items)
            .map(|cert| CertificateCard {
                name: cert.name.clone(),
                issuer: cert.issuer.clone(),
                embed_url: cert.link.as_deref().map(embed_link),
            })
            .collect();

        SectionContent::Certifications { cards }
    }

    fn generate_research(&self, store: &ContentStore) -> SectionContent {
        let cards = store
            .publications
            .iter()
            .take(self.config.max_list_items)
            .enumerate()
            .map(|(idx, publication)| PublicationCard {
                title: publication.title.clone(),
                description: normalize_whitespace(&publication.description),
                year: publication.year.clone(),
                identifier: publication
                    .doi
                    .clone()
                    .unwrap_or_else(|| "N/A".to_string()),
                doi_url: publication.doi.as_deref().map(doi_url),
                accent: RESEARCH_ACCENTS[idx % RESEARCH_ACCENTS.len()],
            })
            .collect();

        SectionContent::Research { cards }
    }

    fn generate_education(&self, store: &ContentStore) -> SectionContent {
        let cards = store
            .education
            .iter()
            .enumerate()
            .map(|(idx, edu)| {
                let year = edu
                    .period
                    .split(" – ")
                    .next()
                    .filter(|part| !part.is_empty())
                    .unwrap_or(&edu.period);
                EducationCard {
                    school: edu.school.clone(),
                    degree: edu.degree.clone(),
                    period: edu.period.clone(),
                    location: edu.location.clone(),
                    details: edu.details.clone(),
                    milestone: if idx == 0 || year == "Present" {
                        "NOW".to_string()
                    } else {
                        year.to_string()
                    },
                    accent: EDUCATION_ACCENTS[idx % EDUCATION_ACCENTS.len()],
                }
            })
            .collect();

        SectionContent::Education { cards }
    }

    fn generate_footer(&self, store: &ContentStore, mode: PresentationMode) -> SectionContent {
        let profile = &store.profile;
        SectionContent::Footer {
            heading: profile.footer_heading.clone(),
            email: OutboundLink {
                label: format!("Email me at: {}", profile.email),
                url: mailto(&profile.email),
            },
            resume: OutboundLink {
                label: "Resume".to_string(),
                url: profile.resume_path.clone(),
            },
            social: vec![
                OutboundLink {
                    label: "LinkedIn".to_string(),
                    url: profile.linkedin.clone(),
                },
                OutboundLink {
                    label: "GitHub".to_string(),
                    url: profile.github.clone(),
                },
            ],
            hire_me: mode.hire_me_label().map(|label| OutboundLink {
                label: label.to_string(),
                url: mailto(&profile.email),
            }),
            copyright: profile.copyright.clone(),
        }
    }
}

impl Default for SectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Heading text for a section
pub fn section_title(section: SectionType) -> &'static str {
    match section {
        SectionType::About => "About",
        SectionType::Expertise => "Technical Expertise",
        SectionType::Experience => "Experience",
        SectionType::Projects => "Projects",
        SectionType::Awards => "Awards & Honors",
        SectionType::Certifications => "Certifications",
        SectionType::Research => "Research & Publications",
        SectionType::Education => "Education History",
        SectionType::Footer => "Get In Touch",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marquee_rows_alternate_direction() {
        let engine = SectionEngine::new();
        let store = ContentStore::builtin();
        let section = engine
            .generate_section(SectionType::Expertise, &store, PresentationMode::Gallery)
            .unwrap();

        let SectionContent::Expertise { rows } = section.content else {
            panic!("expected expertise content");
        };

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].direction, MarqueeDirection::Leftward);
        assert_eq!(rows[1].direction, MarqueeDirection::Rightward);
        assert_eq!(rows[2].direction, MarqueeDirection::Leftward);
    }

    #[test]
    fn test_icon_fallback_uses_initials() {
        let engine = SectionEngine::new();
        let store = ContentStore::builtin();
        let section = engine
            .generate_section(SectionType::Expertise, &store, PresentationMode::Gallery)
            .unwrap();

        let SectionContent::Expertise { rows } = section.content else {
            panic!("expected expertise content");
        };

        let ml_item = rows[0]
            .items
            .iter()
            .find(|item| item.name == "Machine Learning")
            .unwrap();
        assert_eq!(ml_item.icon, IconRef::Initials("MA".to_string()));

        let python_item = rows[1]
            .items
            .iter()
            .find(|item| item.name == "Python")
            .unwrap();
        assert!(matches!(python_item.icon, IconRef::Url(_)));
    }

    #[test]
    fn test_document_order_follows_mode() {
        let engine = SectionEngine::new();
        let store = ContentStore::builtin();

        let gallery = engine
            .generate_document(&store, PresentationMode::Gallery)
            .unwrap();
        assert_eq!(gallery.len(), 9);
        assert_eq!(gallery[0].section_type, SectionType::About);
        assert_eq!(gallery.last().unwrap().section_type, SectionType::Footer);

        let studio = engine
            .generate_document(&store, PresentationMode::Studio)
            .unwrap();
        assert!(studio
            .iter()
            .all(|s| s.section_type != SectionType::Awards));
    }

    #[test]
    fn test_studio_anchor_and_hire_me() {
        let engine = SectionEngine::new();
        let store = ContentStore::builtin();

        let experience = engine
            .generate_section(SectionType::Experience, &store, PresentationMode::Studio)
            .unwrap();
        assert_eq!(experience.anchor, "work");

        let footer = engine
            .generate_section(SectionType::Footer, &store, PresentationMode::Studio)
            .unwrap();
        let SectionContent::Footer { hire_me, .. } = footer.content else {
            panic!("expected footer content");
        };
        assert_eq!(hire_me.unwrap().label, "Hire Me");
    }

    #[test]
    fn test_sections_serialize() {
        let engine = SectionEngine::new();
        let store = ContentStore::builtin();
        let document = engine
            .generate_document(&store, PresentationMode::Gallery)
            .unwrap();

        let json = serde_json::to_string(&document).unwrap();
        assert!(json.contains("scroll") || json.contains("about"));
    }
}
