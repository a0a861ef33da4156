//! Configuration management for segkit.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, SegkitError};
use crate::core::keywords::{CorpusMode, ScoringMode};
use crate::core::segment::SegmenterKind;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub keywords: KeywordsConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Segmentation engine configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Segmenter implementation
    #[serde(default)]
    pub segmenter: SegmenterKind,

    /// Use the HMM model for words missing from the dictionary
    #[serde(default = "default_hmm")]
    pub hmm: bool,

    /// Stopword file (one term per line); bundled list when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopwords_path: Option<PathBuf>,

    /// Extra dictionary in `word [freq] [tag]` format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_dict_path: Option<PathBuf>,
}

/// Keyword extraction defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeywordsConfig {
    /// top_k used when a call does not give one
    #[serde(default = "default_top_k")]
    pub default_top_k: usize,

    /// Largest top_k a call may request
    #[serde(default = "default_max_top_k")]
    pub max_top_k: usize,

    #[serde(default)]
    pub corpus_mode: CorpusMode,

    #[serde(default)]
    pub scoring: ScoringMode,
}

/// Request size limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Maximum entries in one batch
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,

    /// Maximum characters in one text
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,

    /// Maximum rows x vocabulary cells of one BM25 matrix
    #[serde(default = "default_max_matrix_cells")]
    pub max_matrix_cells: usize,
}

// Default value functions
fn default_hmm() -> bool {
    true
}

fn default_top_k() -> usize {
    5
}

fn default_max_top_k() -> usize {
    100
}

fn default_max_batch_size() -> usize {
    1000
}

fn default_max_text_chars() -> usize {
    1_000_000
}

fn default_max_matrix_cells() -> usize {
    25_000_000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            segmenter: SegmenterKind::default(),
            hmm: default_hmm(),
            stopwords_path: None,
            user_dict_path: None,
        }
    }
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            default_top_k: default_top_k(),
            max_top_k: default_max_top_k(),
            corpus_mode: CorpusMode::default(),
            scoring: ScoringMode::default(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_batch_size: default_max_batch_size(),
            max_text_chars: default_max_text_chars(),
            max_matrix_cells: default_max_matrix_cells(),
        }
    }
}

/// Parse an env var, ignoring it when unset or malformed
fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    let value = env::var(name).ok()?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!("Ignoring invalid value for {}: {:?}", name, value);
            None
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SegkitError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. SEGKIT_CONFIG env var
    /// 2. XDG config file (~/.config/segkit/config.toml)
    /// 3. ./segkit.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("SEGKIT_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("segkit.toml").exists() {
                Self::from_file("segkit.toml")?
            } else {
                Self::default()
            }
        };

        // Fall back to a user-managed stopword file in the data dir
        if config.engine.stopwords_path.is_none() {
            let data_stopwords = xdg.stopwords_file();
            if data_stopwords.exists() {
                config.engine.stopwords_path = Some(data_stopwords);
            }
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Engine configuration
        if let Some(segmenter) = env_parse("SEGKIT_SEGMENTER") {
            self.engine.segmenter = segmenter;
        }
        if let Some(hmm) = env_parse("SEGKIT_HMM") {
            self.engine.hmm = hmm;
        }
        if let Ok(path) = env::var("SEGKIT_STOPWORDS") {
            self.engine.stopwords_path = Some(PathBuf::from(path));
        }
        if let Ok(path) = env::var("SEGKIT_USER_DICT") {
            self.engine.user_dict_path = Some(PathBuf::from(path));
        }

        // Keyword configuration
        if let Some(k) = env_parse("SEGKIT_DEFAULT_TOP_K") {
            self.keywords.default_top_k = k;
        }
        if let Some(k) = env_parse("SEGKIT_MAX_TOP_K") {
            self.keywords.max_top_k = k;
        }
        if let Some(mode) = env_parse("SEGKIT_CORPUS_MODE") {
            self.keywords.corpus_mode = mode;
        }
        if let Some(scoring) = env_parse("SEGKIT_SCORING") {
            self.keywords.scoring = scoring;
        }

        // Limits configuration
        if let Some(size) = env_parse("SEGKIT_MAX_BATCH_SIZE") {
            self.limits.max_batch_size = size;
        }
        if let Some(chars) = env_parse("SEGKIT_MAX_TEXT_CHARS") {
            self.limits.max_text_chars = chars;
        }
        if let Some(cells) = env_parse("SEGKIT_MAX_MATRIX_CELLS") {
            self.limits.max_matrix_cells = cells;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.keywords.default_top_k == 0 {
            return Err(SegkitError::ConfigError(
                "Default top_k must be non-zero".to_string(),
            ));
        }

        if self.keywords.default_top_k > self.keywords.max_top_k {
            return Err(SegkitError::ConfigError(
                "Default top_k cannot exceed max top_k".to_string(),
            ));
        }

        if self.limits.max_batch_size == 0 {
            return Err(SegkitError::ConfigError(
                "Max batch size must be non-zero".to_string(),
            ));
        }

        if self.limits.max_text_chars == 0 {
            return Err(SegkitError::ConfigError(
                "Max text chars must be non-zero".to_string(),
            ));
        }

        if self.limits.max_matrix_cells == 0 {
            return Err(SegkitError::ConfigError(
                "Max matrix cells must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Segmenter: {}", self.engine.segmenter);
        tracing::info!("  HMM: {}", self.engine.hmm);
        match &self.engine.stopwords_path {
            Some(path) => tracing::info!("  Stopwords: {:?}", path),
            None => tracing::info!("  Stopwords: bundled"),
        }
        if let Some(path) = &self.engine.user_dict_path {
            tracing::info!("  User dictionary: {:?}", path);
        }
        tracing::info!("  Default top_k: {}", self.keywords.default_top_k);
        tracing::info!("  Max top_k: {}", self.keywords.max_top_k);
        tracing::info!("  Corpus mode: {}", self.keywords.corpus_mode);
        tracing::info!("  Scoring: {}", self.keywords.scoring);
        tracing::info!("  Max batch size: {}", self.limits.max_batch_size);
        tracing::info!("  Max text chars: {}", self.limits.max_text_chars);
        tracing::info!("  Max matrix cells: {}", self.limits.max_matrix_cells);
    }
}
