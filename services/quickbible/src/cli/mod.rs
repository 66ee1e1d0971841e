//! CLI adapter for QuickBible
//!
//! Provides a command-line front end over the query engine. It plays
//! the role a chat bot would: it parses typed references and deep-link
//! tokens, calls `core/`, and owns all user-facing text.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;
pub mod reference;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// QuickBible - scripture lookup and search
///
/// Look up verses by reference, search by keyword or "quoted phrase",
/// walk verse by verse, and list vote-ranked cross references.
#[derive(Parser, Debug)]
#[command(name = "quickbible")]
#[command(version)]
#[command(about = "Scripture lookup, search and cross references", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Corpus XML file (overrides configuration)
    #[arg(long, global = true, value_name = "PATH")]
    pub bible: Option<PathBuf>,

    /// Cross-reference TSV file (overrides configuration)
    #[arg(long, global = true, value_name = "PATH")]
    pub cross_references: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a verse (e.g. "John 3:16" or "1_Corinthians_13_4")
    #[command(name = "get-verse")]
    GetVerse(commands::VerseArgs),

    /// Search by keywords (all must match) or a "quoted phrase"
    Search(commands::SearchArgs),

    /// Show a random verse
    Random(commands::RandomArgs),

    /// Show the verse after a reference
    #[command(name = "next-verse")]
    NextVerse(commands::VerseArgs),

    /// Show the verse before a reference
    #[command(name = "previous-verse")]
    PreviousVerse(commands::VerseArgs),

    /// Audio link from a verse (default 1) to the end of its chapter
    Audio(commands::AudioArgs),

    /// BibleHub link for comparing translations
    Versions(commands::VerseArgs),

    /// Vote-ranked cross references for a verse
    #[command(name = "cross-references")]
    CrossReferences(commands::ReferencesArgs),

    /// List canonical books with their IDs
    #[command(name = "list-books")]
    ListBooks(commands::BooksArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Show version and loaded corpus information
    #[command(name = "get-server-info")]
    GetServerInfo(commands::InfoArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  quickbible completions bash > ~/.local/share/bash-completion/completions/quickbible
    ///   zsh:   quickbible completions zsh > ~/.zfunc/_quickbible
    ///   fish:  quickbible completions fish > ~/.config/fish/completions/quickbible.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration, command-line paths win
    let mut config = Config::load()?;
    if let Some(path) = cli.bible {
        config.corpus.bible_path = path;
    }
    if let Some(path) = cli.cross_references {
        config.corpus.cross_references_path = path;
    }
    config.log_config();

    // Load corpus and cross references once
    let services = Arc::new(Services::new(config));
    if services.bible.is_empty() {
        output::print_warning(&format!(
            "No verses loaded from {:?}",
            services.config.corpus.bible_path
        ));
    }

    // Execute command
    match cli.command {
        Commands::GetVerse(args) => commands::verse::execute(args, &services, cli.format).await,
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Random(args) => {
            commands::verse::execute_random(args, &services, cli.format).await
        }
        Commands::NextVerse(args) => {
            commands::verse::execute_next(args, &services, cli.format).await
        }
        Commands::PreviousVerse(args) => {
            commands::verse::execute_previous(args, &services, cli.format).await
        }
        Commands::Audio(args) => commands::audio::execute(args, &services, cli.format).await,
        Commands::Versions(args) => {
            commands::versions::execute(args, &services, cli.format).await
        }
        Commands::CrossReferences(args) => {
            commands::references::execute(args, &services, cli.format).await
        }
        Commands::ListBooks(args) => commands::books::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::GetServerInfo(args) => commands::info::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
