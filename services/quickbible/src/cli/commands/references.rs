//! Cross-references command - vote-ranked related passages for a verse

use crate::cli::commands::verse::{lookup, VerseArgs};
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the cross-references command
#[derive(Args, Debug)]
pub struct ReferencesArgs {
    #[command(flatten)]
    pub verse: VerseArgs,

    /// Maximum references to show (defaults to cross_references.display_limit)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,
}

/// A single cross reference
#[derive(Debug, Serialize)]
pub struct ReferenceItem {
    pub rank: usize,
    pub display: String,
    pub link_token: String,
    pub votes: i64,
}

/// Cross-references response
#[derive(Debug, Serialize)]
pub struct ReferencesOutput {
    pub reference: String,
    pub total: usize,
    pub shown: usize,
    pub references: Vec<ReferenceItem>,
}

/// Execute the cross-references command
pub async fn execute(
    args: ReferencesArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let verse = lookup(&args.verse, services)?;
    let limit = args
        .limit
        .unwrap_or(services.config.cross_references.display_limit)
        .max(1);

    let refs = services
        .bible
        .cross_references(&verse.book, verse.chapter, verse.verse);

    let output = ReferencesOutput {
        reference: verse.to_string(),
        total: refs.len(),
        shown: refs.len().min(limit),
        references: refs
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, r)| ReferenceItem {
                rank: i + 1,
                display: r.display.clone(),
                link_token: r.link_token(),
                votes: r.votes,
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            if output.references.is_empty() {
                println!(
                    "No cross references found for {}",
                    colors::reference(&output.reference)
                );
                return Ok(());
            }

            output::print_header(&format!(
                "Cross references for {} ({} of {}):\n",
                output.reference, output.shown, output.total
            ));
            for r in &output.references {
                println!(
                    "{:>3}. {} {} {}",
                    r.rank,
                    colors::reference(&r.display),
                    colors::votes(&format!("({} votes)", r.votes)),
                    colors::dim(&r.link_token)
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
