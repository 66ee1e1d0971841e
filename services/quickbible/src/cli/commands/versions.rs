//! Versions command - BibleHub page comparing translations of a verse

use crate::cli::commands::verse::VerseArgs;
use crate::cli::output::colors;
use crate::cli::reference::parse_verse_reference;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::VerseRef;
use serde::Serialize;
use std::sync::Arc;

/// Versions response
#[derive(Debug, Serialize)]
pub struct VersionsOutput {
    pub reference: String,
    pub url: String,
}

/// Execute the versions command
pub async fn execute(
    args: VerseArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    // Only the book has to exist; the page covers verses missing locally
    let r = parse_verse_reference(&args.text())?;
    let book = services
        .bible
        .resolve_book(&r.book)
        .ok_or_else(|| format!("Book '{}' not found.", r.book))?;
    let reference = VerseRef::new(book.name, r.chapter, r.verse);
    let url = services
        .bible
        .biblehub_url(&reference.book, reference.chapter, reference.verse)
        .ok_or_else(|| format!("Book '{}' not found.", r.book))?;

    let output = VersionsOutput {
        reference: reference.to_string(),
        url,
    };

    match format {
        OutputFormat::Human => {
            println!("{}", colors::reference(&output.reference));
            println!("{}", colors::link(&output.url));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
