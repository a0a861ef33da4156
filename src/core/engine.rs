//! The segmentation engine.
//!
//! One [`Engine`] is built at process start and shared by reference. Its
//! stopword table and dictionary are loaded during construction and are
//! read-only afterwards, so calls need no locking.

use crate::core::config::{Config, EngineConfig};
use crate::core::error::{Result, SegkitError};
use crate::core::filter::{StopwordSet, TokenFilter};
use crate::core::keywords::bm25::Bm25Params;
use crate::core::keywords::{KeywordExtractor, KeywordOptions};
use crate::core::segment::{JiebaSegmenter, Segmenter, SegmenterKind, WhitespaceSegmenter};
use crate::core::types::{CutMode, IndexedResults, PosTag, TextInput};
use std::sync::Arc;

/// Request size limits enforced on every call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineLimits {
    pub max_batch_size: usize,
    pub max_text_chars: usize,
    pub max_top_k: usize,
    /// Cells of one dense BM25 matrix
    pub max_matrix_cells: usize,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            max_batch_size: 1000,
            max_text_chars: 1_000_000,
            max_top_k: 100,
            max_matrix_cells: 25_000_000,
        }
    }
}

impl EngineLimits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_batch_size: config.limits.max_batch_size,
            max_text_chars: config.limits.max_text_chars,
            max_top_k: config.keywords.max_top_k,
            max_matrix_cells: config.limits.max_matrix_cells,
        }
    }
}

pub struct Engine {
    segmenter: Arc<dyn Segmenter>,
    filter: TokenFilter,
    params: Bm25Params,
    limits: EngineLimits,
}

impl Engine {
    pub fn new(segmenter: Arc<dyn Segmenter>, stopwords: StopwordSet, limits: EngineLimits) -> Self {
        Self {
            segmenter,
            filter: TokenFilter::new(stopwords),
            params: Bm25Params::default(),
            limits,
        }
    }

    /// Build the engine described by `config`
    ///
    /// Loads the jieba dictionary (and user dictionary, if any) and the
    /// stopword list. An unreadable stopword file degrades to an empty set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let segmenter = build_segmenter(&config.engine)?;
        let stopwords = match &config.engine.stopwords_path {
            Some(path) => StopwordSet::load_or_empty(path),
            None => StopwordSet::bundled(),
        };

        tracing::info!(
            "Engine ready: segmenter={}, stopwords={}",
            segmenter.name(),
            stopwords.len()
        );

        Ok(Self::new(
            segmenter,
            stopwords,
            EngineLimits::from_config(config),
        ))
    }

    pub fn segmenter_name(&self) -> &'static str {
        self.segmenter.name()
    }

    pub fn stopword_count(&self) -> usize {
        self.filter.stopwords().len()
    }

    pub fn limits(&self) -> &EngineLimits {
        &self.limits
    }

    pub fn bm25_params(&self) -> Bm25Params {
        self.params
    }

    /// Segment every text, keeping tokens accepted by the filter
    pub fn tokenize(&self, input: &TextInput, mode: CutMode) -> Result<IndexedResults<Vec<String>>> {
        self.check_input(input)?;

        let mut results = IndexedResults::new();
        for (index, entry) in input.entries().into_iter().enumerate() {
            let tokens = match entry {
                Some(text) => self.filter.retain(self.segmenter.cut(text, mode)?),
                None => Vec::new(),
            };
            results.insert(index, tokens);
        }

        tracing::debug!("Tokenized {} inputs ({})", results.len(), mode.as_str());
        Ok(results)
    }

    /// Part-of-speech tag every text; no stopword filtering
    pub fn tag(&self, input: &TextInput) -> Result<IndexedResults<Vec<PosTag>>> {
        self.check_input(input)?;

        let mut results = IndexedResults::new();
        for (index, entry) in input.entries().into_iter().enumerate() {
            let tags = match entry {
                Some(text) => self.segmenter.tag(text)?,
                None => Vec::new(),
            };
            results.insert(index, tags);
        }

        tracing::debug!("Tagged {} inputs", results.len());
        Ok(results)
    }

    /// Extract BM25 keywords for every text
    pub fn extract_keywords(
        &self,
        input: &TextInput,
        options: &KeywordOptions,
    ) -> Result<IndexedResults<Vec<String>>> {
        self.check_input(input)?;

        if options.top_k == 0 {
            return Err(SegkitError::InvalidInput(
                "top_k must be a positive integer".to_string(),
            ));
        }
        if options.top_k > self.limits.max_top_k {
            return Err(SegkitError::InvalidInput(format!(
                "top_k {} exceeds maximum of {}",
                options.top_k, self.limits.max_top_k
            )));
        }

        KeywordExtractor::new(self.segmenter.as_ref(), &self.filter, self.params)
            .with_max_matrix_cells(self.limits.max_matrix_cells)
            .extract(input, options)
    }

    fn check_input(&self, input: &TextInput) -> Result<()> {
        if input.len() > self.limits.max_batch_size {
            return Err(SegkitError::InvalidInput(format!(
                "Batch of {} texts exceeds maximum of {}",
                input.len(),
                self.limits.max_batch_size
            )));
        }

        for (index, text) in input.entries().into_iter().enumerate() {
            let Some(text) = text else {
                continue;
            };
            let chars = text.chars().count();
            if chars > self.limits.max_text_chars {
                return Err(SegkitError::InvalidInput(format!(
                    "Text {index} has {chars} characters, maximum is {}",
                    self.limits.max_text_chars
                )));
            }
        }

        Ok(())
    }
}

fn build_segmenter(config: &EngineConfig) -> Result<Arc<dyn Segmenter>> {
    match config.segmenter {
        SegmenterKind::Jieba => {
            let segmenter = match &config.user_dict_path {
                Some(path) => JiebaSegmenter::with_user_dict(config.hmm, path)?,
                None => JiebaSegmenter::new(config.hmm),
            };
            Ok(Arc::new(segmenter))
        }
        SegmenterKind::Whitespace => Ok(Arc::new(WhitespaceSegmenter)),
    }
}
