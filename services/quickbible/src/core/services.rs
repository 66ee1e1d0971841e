//! Unified service container for QuickBible
//!
//! Provides shared access to the loaded query engine and the
//! configuration it was built from.

use crate::core::bible::BibleService;
use crate::core::config::Config;
use std::sync::Arc;

/// Unified services container
///
/// Front ends receive this struct and never touch the loaders.
#[derive(Clone)]
pub struct Services {
    /// Read-only query engine over corpus and cross references
    pub bible: Arc<BibleService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Load both data sources named in `config`
    ///
    /// Loading never fails; missing sources yield empty structures.
    pub fn new(config: Config) -> Self {
        let bible = Arc::new(BibleService::from_config(&config));

        Self {
            bible,
            config: Arc::new(config),
        }
    }

    /// Wrap an already-built service (fixture corpora, benchmarks)
    pub fn with_bible(bible: BibleService, config: Config) -> Self {
        Self {
            bible: Arc::new(bible),
            config: Arc::new(config),
        }
    }
}
