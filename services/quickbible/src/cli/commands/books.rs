//! List-books command - canonical books with their IDs

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the list-books command
#[derive(Args, Debug)]
pub struct BooksArgs {
    /// Only show books whose name matches this (same rules as references)
    #[arg(long, short = 'm')]
    pub matching: Option<String>,
}

/// A book and its 1-based ID
#[derive(Debug, Serialize)]
pub struct BookItem {
    pub id: usize,
    pub name: String,
}

/// Execute the list-books command
pub async fn execute(
    args: BooksArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let books: Vec<BookItem> = match &args.matching {
        Some(name) => services
            .bible
            .resolve_book(name)
            .map(|b| BookItem {
                id: b.id,
                name: b.name.to_string(),
            })
            .into_iter()
            .collect(),
        None => services
            .bible
            .books()
            .iter()
            .enumerate()
            .map(|(i, name)| BookItem {
                id: i + 1,
                name: name.clone(),
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            if books.is_empty() {
                println!("No books found");
            }
            for book in &books {
                println!(
                    "{} {}",
                    colors::number(&format!("{:>2}", book.id)),
                    book.name
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&books)?);
        }
    }

    Ok(())
}
