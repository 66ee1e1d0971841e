//! QuickBible CLI - scripture lookup from the command line
//!
//! Loads the corpus and cross references named in the configuration
//! and answers one query per invocation.
//!
//! # Examples
//!
//! ```bash
//! # Look up a verse
//! quickbible get-verse John 3:16
//!
//! # Phrase search, second page
//! quickbible search '"in the beginning"' --page 2
//!
//! # Cross references as JSON
//! quickbible --format json cross-references 1_Corinthians_13_4
//! ```
//!
//! Logs go to stderr. Set `RUST_LOG` to change the level and
//! `QUICKBIBLE_LOG_FORMAT=json` for structured output.

use clap::Parser;
use quickbible::cli::{output, run, Cli};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "quickbible=warn".into());
    let json = std::env::var("QUICKBIBLE_LOG_FORMAT").is_ok_and(|f| f == "json");

    let (json_layer, text_layer) = if json {
        (Some(fmt::layer().json().with_writer(std::io::stderr)), None)
    } else {
        (None, Some(fmt::layer().with_writer(std::io::stderr)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
