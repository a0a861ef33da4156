//! Unified service container for segkit
//!
//! Provides shared access to the engine and configuration.

use crate::core::config::Config;
use crate::core::engine::Engine;
use crate::core::error::Result;
use crate::core::keywords::KeywordOptions;
use std::sync::Arc;

/// Unified services container
///
/// Both adapters (MCP and CLI) use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Segmentation engine, built once at startup
    pub engine: Arc<Engine>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    ///
    /// This loads the segmentation dictionary and stopwords, so it is
    /// the expensive step of process startup.
    pub fn new(config: Config) -> Result<Self> {
        let engine = Engine::from_config(&config)?;
        Ok(Self::with_engine(config, engine))
    }

    /// Create services around an already-built engine
    pub fn with_engine(config: Config, engine: Engine) -> Self {
        Self {
            engine: Arc::new(engine),
            config: Arc::new(config),
        }
    }

    /// Keyword options from the configured defaults
    pub fn default_keyword_options(&self) -> KeywordOptions {
        KeywordOptions {
            top_k: self.config.keywords.default_top_k,
            corpus_mode: self.config.keywords.corpus_mode,
            scoring: self.config.keywords.scoring,
        }
    }
}
