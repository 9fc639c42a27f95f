//! Folio Utilities
//!
//! Shared plumbing for the folio workspace: display-string helpers,
//! configuration loading, and logging setup.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod config;
pub mod logging;
pub mod string;

/// Re-export commonly used utilities
pub use config::{load_config, merge_configs, ConfigBuilder};
pub use string::{initials, normalize_whitespace, safe_truncate};

/// Result type used throughout folio utilities
pub type Result<T> = std::result::Result<T, UtilError>;

/// Error types for utility operations
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// String processing error
    #[error("String processing error: {0}")]
    StringProcessing(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}
