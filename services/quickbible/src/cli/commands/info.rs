//! Info command - show version and loaded corpus information

use crate::cli::output::{colors, format_duration_ms};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::CorpusInfo;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the get-server-info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Show load statistics
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Server information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub bible_path: String,
    pub cross_references_path: String,
    #[serde(flatten)]
    pub corpus: CorpusInfo,
}

/// Execute the get-server-info command
pub async fn execute(
    args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let info = InfoResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        bible_path: services.config.corpus.bible_path.display().to_string(),
        cross_references_path: services
            .config
            .corpus
            .cross_references_path
            .display()
            .to_string(),
        corpus: services.bible.info(),
    };

    match format {
        OutputFormat::Human => {
            let corpus = &info.corpus;
            println!("{} {}", info.name, info.version);
            println!(
                "Corpus: {} ({} books, {} verses)",
                info.bible_path,
                colors::number(&corpus.books.to_string()),
                colors::number(&corpus.verses.to_string())
            );
            println!(
                "Cross references: {} ({} verses, {} links)",
                info.cross_references_path,
                colors::number(&corpus.cross_reference_sources.to_string()),
                colors::number(&corpus.cross_reference_edges.to_string())
            );
            if args.detailed {
                let c = &corpus.corpus_stats;
                let x = &corpus.cross_reference_stats;
                println!(
                    "Corpus load: {} accepted, {} skipped in {}",
                    c.accepted,
                    c.skipped,
                    format_duration_ms(c.duration_ms)
                );
                println!(
                    "Cross-reference load: {} accepted, {} skipped in {}",
                    x.accepted,
                    x.skipped,
                    format_duration_ms(x.duration_ms)
                );
                println!("Loaded at: {}", corpus.loaded_at.to_rfc3339());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
