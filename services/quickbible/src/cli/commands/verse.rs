//! Verse commands - get-verse, random, next-verse, previous-verse

use crate::cli::output::{self, colors};
use crate::cli::reference::parse_verse_reference;
use crate::cli::OutputFormat;
use crate::core::links;
use crate::core::services::Services;
use crate::core::types::Verse;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for commands taking a single verse reference
#[derive(Args, Debug)]
pub struct VerseArgs {
    /// Reference such as `John 3:16` (quotes optional) or a link token
    #[arg(required = true, num_args = 1..)]
    pub reference: Vec<String>,
}

impl VerseArgs {
    /// The reference words joined back into one string
    pub fn text(&self) -> String {
        self.reference.join(" ")
    }
}

/// Arguments for the random command
#[derive(Args, Debug)]
pub struct RandomArgs {}

/// A verse as printed by the CLI
#[derive(Debug, Serialize)]
pub struct VerseOutput {
    pub reference: String,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    pub link_token: String,
}

impl From<&Verse> for VerseOutput {
    fn from(v: &Verse) -> Self {
        Self {
            reference: v.to_string(),
            book: v.book.clone(),
            chapter: v.chapter,
            verse: v.verse,
            text: v.text.clone(),
            link_token: links::link_token(&v.book, v.chapter, v.verse),
        }
    }
}

/// Execute the get-verse command
pub async fn execute(
    args: VerseArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let verse = lookup(&args, services)?;
    print(verse, format)
}

/// Execute the random command
pub async fn execute_random(
    _args: RandomArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    print(services.bible.random_verse(), format)
}

/// Execute the next-verse command
pub async fn execute_next(
    args: VerseArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let current = lookup(&args, services)?;
    match services.bible.next_verse(current) {
        Some(next) => print(next, format),
        None => Err(format!("{current} is the last verse.").into()),
    }
}

/// Execute the previous-verse command
pub async fn execute_previous(
    args: VerseArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let current = lookup(&args, services)?;
    match services.bible.previous_verse(current) {
        Some(previous) => print(previous, format),
        None => Err(format!("{current} is the first verse.").into()),
    }
}

/// Parse and resolve a single verse
pub(crate) fn lookup<'a>(
    args: &VerseArgs,
    services: &'a Services,
) -> Result<&'a Verse, Box<dyn std::error::Error>> {
    let text = args.text();
    let r = parse_verse_reference(&text)?;

    services
        .bible
        .get_verse(&r.book, r.chapter, r.verse)
        .ok_or_else(|| format!("Verse '{text}' not found.").into())
}

fn print(verse: &Verse, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            output::print_verse(verse);
            println!(
                "{}",
                colors::dim(&links::link_token(&verse.book, verse.chapter, verse.verse))
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&VerseOutput::from(verse))?);
        }
    }

    Ok(())
}
