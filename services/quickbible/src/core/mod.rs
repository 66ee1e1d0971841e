//! Core domain logic (front-end agnostic)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **corpus**: XML corpus loader, canonical books, resolver
//! - **crossref**: Cross-reference loader and index
//! - **search**: Keyword/phrase search and pagination
//! - **links**: BibleHub, audio and deep-link construction
//! - **bible**: Read-only query engine
//! - **services**: Unified service container

pub mod bible;
pub mod config;
pub mod corpus;
pub mod crossref;
pub mod error;
pub mod links;
pub mod search;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use bible::BibleService;
pub use config::Config;
pub use error::{BibleError, Result};
pub use services::Services;
