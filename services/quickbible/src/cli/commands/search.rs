//! Search command - keyword and phrase search over verse text

use crate::cli::commands::verse::VerseOutput;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::error::BibleError;
use crate::core::search::SearchQuery;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Keywords (all must appear) or a "quoted phrase"
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Page of results to show (1-based)
    #[arg(long, short = 'p', default_value = "1")]
    pub page: usize,

    /// Results per page (defaults to search.page_size)
    #[arg(long)]
    pub page_size: Option<usize>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub query: String,
    #[serde(flatten)]
    pub parsed: SearchQuery,
    pub page: usize,
    pub total_pages: usize,
    pub total_results: usize,
    pub results: Vec<VerseOutput>,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = args.query.join(" ");
    let max_len = services.config.search.max_query_length;

    if query.chars().count() > max_len {
        return Err(BibleError::InvalidQuery(format!(
            "query is longer than {max_len} characters"
        ))
        .into());
    }

    let parsed = SearchQuery::parse(&query);
    if parsed.is_empty() {
        return Err(BibleError::InvalidQuery("nothing to search for".to_string()).into());
    }

    let page_size = args
        .page_size
        .unwrap_or(services.config.search.page_size)
        .max(1);
    let page = services.bible.search_page(&query, args.page, page_size);

    tracing::debug!(
        "Search {:?}: {} result(s), page {}/{}",
        query,
        page.total_results,
        page.page,
        page.total_pages
    );

    let output = SearchOutput {
        query,
        parsed,
        page: page.page,
        total_pages: page.total_pages,
        total_results: page.total_results,
        results: page.verses.iter().map(|v| VerseOutput::from(*v)).collect(),
    };

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!("No results found for '{}'", colors::label(&output.query));
                return Ok(());
            }

            output::print_header(&format!(
                "Found {} result(s) for '{}' (page {} of {}):\n",
                colors::number(&output.total_results.to_string()),
                output.query,
                output.page,
                output.total_pages
            ));

            for result in &output.results {
                println!(
                    "{} {}",
                    colors::reference(&result.reference),
                    colors::dim(&result.link_token)
                );
                println!("    {}", result.text);
            }

            if page.has_next() {
                println!(
                    "\n{}",
                    colors::dim(&format!("More results: --page {}", output.page + 1))
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
