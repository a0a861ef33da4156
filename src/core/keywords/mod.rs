//! BM25 keyword extraction.
//!
//! Pipeline: text -> [`corpus`] (segmentation + token filter) ->
//! [`vocab`] -> [`bm25`] row scores -> per-input aggregation ->
//! [`topk`] ranking.
//!
//! Two corpus strategies are selectable:
//!
//! - **Intra-document**: each input text is its own corpus and its
//!   sentences are the rows, so IDF measures dispersion across sentences.
//!   A term's aggregate score is the sum of its sentence scores.
//! - **Cross-document**: the whole batch is one corpus and each text is a
//!   row, so IDF is classic multi-document rarity.

pub mod bm25;
pub mod corpus;
pub mod topk;
pub mod vocab;

use crate::core::error::{Result, SegkitError};
use crate::core::filter::TokenFilter;
use crate::core::segment::Segmenter;
use crate::core::types::{IndexedResults, TextInput};
use bm25::{Bm25Params, Bm25Scorer, RowScorer, TfIdfScorer};
use corpus::{CorpusBuilder, ScoringCorpus};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use vocab::EncodedCorpus;

/// How the scoring corpus is formed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CorpusMode {
    /// Sentences of one text are the rows
    #[default]
    IntraDocument,
    /// Texts of a batch are the rows
    CrossDocument,
}

impl CorpusMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CorpusMode::IntraDocument => "intra-document",
            CorpusMode::CrossDocument => "cross-document",
        }
    }
}

impl fmt::Display for CorpusMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CorpusMode {
    type Err = SegkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "intra-document" => Ok(CorpusMode::IntraDocument),
            "cross-document" => Ok(CorpusMode::CrossDocument),
            other => Err(SegkitError::InvalidInput(format!(
                "Unknown corpus mode '{other}' (expected 'intra-document' or 'cross-document')"
            ))),
        }
    }
}

/// How term occurrences are weighted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Full BM25 with length normalization
    #[default]
    Bm25,
    /// tf * IDF with the BM25 IDF definition
    #[value(name = "tfidf")]
    TfIdf,
}

impl ScoringMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMode::Bm25 => "bm25",
            ScoringMode::TfIdf => "tfidf",
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringMode {
    type Err = SegkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "bm25" => Ok(ScoringMode::Bm25),
            "tfidf" => Ok(ScoringMode::TfIdf),
            other => Err(SegkitError::InvalidInput(format!(
                "Unknown scoring mode '{other}' (expected 'bm25' or 'tfidf')"
            ))),
        }
    }
}

/// Per-call keyword extraction settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordOptions {
    pub top_k: usize,
    pub corpus_mode: CorpusMode,
    pub scoring: ScoringMode,
}

impl Default for KeywordOptions {
    fn default() -> Self {
        Self {
            top_k: 5,
            corpus_mode: CorpusMode::default(),
            scoring: ScoringMode::default(),
        }
    }
}

/// Runs the keyword pipeline for one call
pub struct KeywordExtractor<'a> {
    segmenter: &'a dyn Segmenter,
    filter: &'a TokenFilter,
    params: Bm25Params,
    max_matrix_cells: usize,
}

impl<'a> KeywordExtractor<'a> {
    pub fn new(segmenter: &'a dyn Segmenter, filter: &'a TokenFilter, params: Bm25Params) -> Self {
        Self {
            segmenter,
            filter,
            params,
            max_matrix_cells: usize::MAX,
        }
    }

    /// Reject corpora whose dense BM25 matrix would exceed `cells`
    pub fn with_max_matrix_cells(mut self, cells: usize) -> Self {
        self.max_matrix_cells = cells;
        self
    }

    /// Extract up to `top_k` keywords for every input index.
    ///
    /// Every index of `input` is present in the result; inputs that are
    /// not text or yield no usable rows map to an empty list.
    pub fn extract(
        &self,
        input: &TextInput,
        options: &KeywordOptions,
    ) -> Result<IndexedResults<Vec<String>>> {
        if options.top_k == 0 {
            return Err(SegkitError::InvalidInput(
                "top_k must be a positive integer".to_string(),
            ));
        }

        let entries = input.entries();
        let mut results: IndexedResults<Vec<String>> =
            (0..entries.len()).map(|i| (i, Vec::new())).collect();

        let builder = CorpusBuilder::new(self.segmenter, self.filter);

        match options.corpus_mode {
            CorpusMode::IntraDocument => {
                for (index, entry) in entries.iter().enumerate() {
                    let Some(text) = entry else {
                        continue;
                    };
                    let corpus = builder.intra_document(index, text)?;
                    for (source, keywords) in self.rank_corpus(&corpus, options)? {
                        results.insert(source, keywords);
                    }
                }
            }
            CorpusMode::CrossDocument => {
                let corpus = builder.cross_document(&entries)?;
                for (source, keywords) in self.rank_corpus(&corpus, options)? {
                    results.insert(source, keywords);
                }
            }
        }

        Ok(results)
    }

    /// Score one corpus and rank the terms of each source input
    fn rank_corpus(
        &self,
        corpus: &ScoringCorpus,
        options: &KeywordOptions,
    ) -> Result<BTreeMap<usize, Vec<String>>> {
        if corpus.is_empty() {
            return Ok(BTreeMap::new());
        }

        let encoded = EncodedCorpus::encode(corpus);
        if encoded.vocabulary.is_empty() {
            return Ok(BTreeMap::new());
        }

        let row_scores = match options.scoring {
            ScoringMode::Bm25 => {
                self.check_matrix_size(encoded.rows.len(), encoded.vocabulary.len())?;
                Bm25Scorer::new(self.params).score_rows(&encoded)
            }
            ScoringMode::TfIdf => TfIdfScorer.score_rows(&encoded),
        };
        let Some(row_scores) = row_scores else {
            return Ok(BTreeMap::new());
        };

        let mut aggregates: BTreeMap<usize, HashMap<usize, f64>> = BTreeMap::new();
        for (row, scores) in encoded.rows.iter().zip(row_scores) {
            let totals = aggregates.entry(row.source).or_default();
            for (term, score) in scores {
                *totals.entry(term).or_insert(0.0) += score;
            }
        }

        tracing::debug!(
            "Scored {} rows, {} terms ({}, {})",
            encoded.rows.len(),
            encoded.vocabulary.len(),
            options.corpus_mode,
            options.scoring
        );

        Ok(aggregates
            .into_iter()
            .map(|(source, totals)| {
                let keywords = topk::select_top_k(totals, &encoded.vocabulary, options.top_k);
                (source, keywords)
            })
            .collect())
    }

    /// The dense matrices hold `rows * vocab` cells each
    fn check_matrix_size(&self, rows: usize, vocab: usize) -> Result<()> {
        match rows.checked_mul(vocab) {
            Some(cells) if cells <= self.max_matrix_cells => Ok(()),
            _ => Err(SegkitError::InvalidInput(format!(
                "Corpus of {rows} rows and {vocab} distinct terms exceeds the BM25 limit of {} \
                 matrix cells; use scoring 'tfidf' or split the input",
                self.max_matrix_cells
            ))),
        }
    }
}
