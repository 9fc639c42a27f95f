//! Folio Core - Content Models and Presentation-State Controllers
//!
//! This crate provides the non-visual heart of folio, including:
//! - Content record types and the immutable content store
//! - The theme, reveal-on-scroll, and timeline-progress controllers
//! - Certificate selection state for the detail overlay
//! - Link handling (embed rewrites, DOI resolution)
//!
//! Everything here is renderer-agnostic: the TUI and the section engine
//! consume these types, they never feed state back except through the
//! controllers' own entry points.

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(
    clippy::multiple_crate_versions,  // Common in large dependency trees
    clippy::module_name_repetitions,  // Often necessary for clarity
)]

pub mod content;
pub mod links;
pub mod models;
pub mod modal;
pub mod progress;
pub mod reveal;
pub mod style_vars;
pub mod theme;

// Re-export commonly used types for convenience
pub use content::ContentStore;
pub use models::{
    presentation::PresentationMode,
    section_types::SectionType,
    Achievement, Certification, EducationEntry, Experience, Profile, Project, Publication,
    SkillCategory,
};
pub use modal::CertificateSelection;
pub use progress::{entry_threshold, is_entry_active, SectionMetrics, TimelineProgress};
pub use reveal::RevealController;
pub use style_vars::StyleVars;
pub use theme::{ThemeMode, ThemeState};

/// Result type used throughout folio core
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for folio core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Content validation error
    #[error("Content error: {0}")]
    Content(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Utility error
    #[error("Utility error: {0}")]
    Util(#[from] folio_utils::UtilError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
