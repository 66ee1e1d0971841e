//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod audio;
pub mod books;
pub mod completions;
pub mod config;
pub mod info;
pub mod references;
pub mod search;
pub mod verse;
pub mod versions;

// Re-export argument types for use in mod.rs
pub use audio::AudioArgs;
pub use books::BooksArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use info::InfoArgs;
pub use references::ReferencesArgs;
pub use search::SearchArgs;
pub use verse::{RandomArgs, VerseArgs};
