//! Configuration management for QuickBible.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{BibleError, Result};
use crate::core::links::{DEFAULT_AUDIO_BASE_URL, DEFAULT_BIBLEHUB_BASE_URL};
use crate::core::xdg::{XdgDirs, BIBLE_FILE_NAME, CROSS_REFERENCES_FILE_NAME};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub cross_references: CrossReferenceConfig,
    #[serde(default)]
    pub links: LinksConfig,
}

/// Source data locations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// XML corpus document
    #[serde(default = "default_bible_path")]
    pub bible_path: PathBuf,

    /// Tab-separated cross-reference file
    #[serde(default = "default_cross_references_path")]
    pub cross_references_path: PathBuf,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Results per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Maximum query string length
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

/// Cross-reference display configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrossReferenceConfig {
    /// Maximum references shown per verse
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
}

/// External link configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinksConfig {
    #[serde(default = "default_biblehub_base_url")]
    pub biblehub_base_url: String,

    #[serde(default = "default_audio_base_url")]
    pub audio_base_url: String,
}

// Default value functions
fn default_bible_path() -> PathBuf {
    PathBuf::from(BIBLE_FILE_NAME)
}

fn default_cross_references_path() -> PathBuf {
    PathBuf::from(CROSS_REFERENCES_FILE_NAME)
}

fn default_page_size() -> usize {
    5
}

fn default_max_query_length() -> usize {
    500
}

fn default_display_limit() -> usize {
    20
}

fn default_biblehub_base_url() -> String {
    DEFAULT_BIBLEHUB_BASE_URL.to_string()
}

fn default_audio_base_url() -> String {
    DEFAULT_AUDIO_BASE_URL.to_string()
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            bible_path: default_bible_path(),
            cross_references_path: default_cross_references_path(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Default for CrossReferenceConfig {
    fn default() -> Self {
        Self {
            display_limit: default_display_limit(),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            biblehub_base_url: default_biblehub_base_url(),
            audio_base_url: default_audio_base_url(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BibleError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. QUICKBIBLE_CONFIG env var
    /// 2. XDG config file (~/.config/quickbible/config.toml)
    /// 3. Legacy ./quickbible.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        xdg.log_paths();

        let mut config = if let Ok(config_path) = env::var("QUICKBIBLE_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("quickbible.toml").exists() {
                Self::from_file("quickbible.toml")?
            } else {
                Self::default()
            }
        };

        // Default relative data paths fall back to the XDG data dir
        // when nothing is in the working directory
        if config.corpus.bible_path == default_bible_path() && !config.corpus.bible_path.exists() {
            config.corpus.bible_path = xdg.bible_file();
        }
        if config.corpus.cross_references_path == default_cross_references_path()
            && !config.corpus.cross_references_path.exists()
        {
            config.corpus.cross_references_path = xdg.cross_references_file();
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Corpus configuration
        if let Ok(path) = env::var("QUICKBIBLE_BIBLE_PATH") {
            self.corpus.bible_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("QUICKBIBLE_CROSS_REFERENCES_PATH") {
            self.corpus.cross_references_path = PathBuf::from(path);
        }

        // Search configuration
        if let Ok(page_size) = env::var("QUICKBIBLE_PAGE_SIZE") {
            if let Ok(size) = page_size.parse() {
                self.search.page_size = size;
            }
        }
        if let Ok(max_query_len) = env::var("QUICKBIBLE_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }

        // Cross-reference configuration
        if let Ok(limit) = env::var("QUICKBIBLE_CROSS_REFERENCE_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.cross_references.display_limit = l;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.page_size == 0 {
            return Err(BibleError::ConfigError(
                "Page size must be non-zero".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(BibleError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.cross_references.display_limit == 0 {
            return Err(BibleError::ConfigError(
                "Cross-reference display limit must be non-zero".to_string(),
            ));
        }

        for (name, url) in [
            ("biblehub_base_url", &self.links.biblehub_base_url),
            ("audio_base_url", &self.links.audio_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(BibleError::ConfigError(format!(
                    "{name} must be an http(s) URL, got '{url}'"
                )));
            }
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Bible path: {:?}", self.corpus.bible_path);
        tracing::info!(
            "  Cross references path: {:?}",
            self.corpus.cross_references_path
        );
        tracing::info!("  Page size: {}", self.search.page_size);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!(
            "  Cross-reference display limit: {}",
            self.cross_references.display_limit
        );
        tracing::info!("  BibleHub base URL: {}", self.links.biblehub_base_url);
        tracing::info!("  Audio base URL: {}", self.links.audio_base_url);
    }
}
