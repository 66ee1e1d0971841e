//! Audio command - link to an audio reading of a chapter

use crate::cli::output::colors;
use crate::cli::reference::parse_reference;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the audio command
#[derive(Args, Debug)]
pub struct AudioArgs {
    /// `Book Chapter` or `Book Chapter:Verse` to start mid-chapter
    #[arg(required = true, num_args = 1..)]
    pub reference: Vec<String>,
}

/// Execute the audio command
pub async fn execute(
    args: AudioArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.reference.join(" ");
    let r = parse_reference(&text)?;

    if services.bible.resolve_book(&r.book).is_none() {
        return Err(format!("Book '{}' not found.", r.book).into());
    }

    let audio = services
        .bible
        .audio_url(&r.book, r.chapter, r.verse)
        .ok_or_else(|| format!("Chapter '{text}' not found."))?;

    match format {
        OutputFormat::Human => {
            println!(
                "{} {}:{}-{}",
                colors::reference(&audio.book),
                audio.chapter,
                audio.start_verse,
                audio.end_verse
            );
            println!("{}", colors::link(&audio.url));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&audio)?);
        }
    }

    Ok(())
}
