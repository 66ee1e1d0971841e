//! Error types and error handling for the QuickBible engine.
//!
//! Loaders return these errors for total load failures; the service
//! logs them and degrades to empty structures. Query-time "not found"
//! outcomes are never errors, they are `Option`s or empty results.

use thiserror::Error;

/// Result type alias for QuickBible operations
pub type Result<T> = std::result::Result<T, BibleError>;

/// Main error type for the QuickBible engine
#[derive(Error, Debug)]
pub enum BibleError {
    #[error("Corpus load failed: {0}")]
    CorpusLoad(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl BibleError {
    /// Check if this is a missing-source error
    pub fn is_not_found(&self) -> bool {
        match self {
            BibleError::IoError(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if this is a bad request error (invalid caller input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            BibleError::InvalidReference(_)
                | BibleError::InvalidQuery(_)
                | BibleError::ConfigError(_)
        )
    }
}
