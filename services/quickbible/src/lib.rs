//! QuickBible - scripture lookup and search engine
//!
//! Loads a verse corpus (XML) and an OpenBible-style cross-reference
//! list (TSV) into memory once, then answers read-only queries:
//! reference lookup with fuzzy book names, keyword and phrase search,
//! next/previous navigation, chapter bounds, external links and
//! vote-ranked cross references.
//!
//! # Architecture
//!
//! - **core**: Domain logic (front-end agnostic)
//!   - config, error, types, xdg
//!   - corpus (XML loader, book resolver)
//!   - crossref (TSV loader, abbreviation map)
//!   - search (query parsing, pagination)
//!   - links, bible (query engine), services
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - reference parsing, commands, output

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::bible::BibleService;
pub use core::config::Config;
pub use core::error::{BibleError, Result};
pub use core::services::Services;
pub use core::types::*;
