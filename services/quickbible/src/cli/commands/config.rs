//! Show-config command - show the effective configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show the resolved XDG directories
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    #[serde(flatten)]
    pub config: Config,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directories: Option<Directories>,
}

/// Resolved XDG locations
#[derive(Debug, Serialize)]
pub struct Directories {
    pub config_dir: String,
    pub config_file: String,
    pub data_dir: String,
}

/// Execute the show-config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let directories = args.all.then(|| {
        let xdg = XdgDirs::new();
        Directories {
            config_dir: xdg.config_dir.to_string_lossy().into_owned(),
            config_file: xdg.config_file().to_string_lossy().into_owned(),
            data_dir: xdg.data_dir.to_string_lossy().into_owned(),
        }
    });

    let response = ConfigResponse {
        config: services.config.as_ref().clone(),
        directories,
    };

    match format {
        OutputFormat::Human => {
            let config = &response.config;
            println!("Configuration:");
            println!("  corpus:");
            println!("    bible_path: {}", config.corpus.bible_path.display());
            println!(
                "    cross_references_path: {}",
                config.corpus.cross_references_path.display()
            );
            println!("  search:");
            println!("    page_size: {}", config.search.page_size);
            println!("    max_query_length: {}", config.search.max_query_length);
            println!("  cross_references:");
            println!(
                "    display_limit: {}",
                config.cross_references.display_limit
            );
            println!("  links:");
            println!("    biblehub_base_url: {}", config.links.biblehub_base_url);
            println!("    audio_base_url: {}", config.links.audio_base_url);
            if let Some(dirs) = &response.directories {
                println!("  directories:");
                println!("    config_dir: {}", dirs.config_dir);
                println!("    config_file: {}", dirs.config_file);
                println!("    data_dir: {}", dirs.data_dir);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
