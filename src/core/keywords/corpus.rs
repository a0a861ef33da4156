//! Scoring corpus construction.
//!
//! A corpus is an ordered list of rows, each an ordered list of admissible
//! tokens tagged with the input index it came from. Intra-document corpora
//! split one text into sentence rows; cross-document corpora turn each text
//! of a batch into a single row.

use crate::core::error::Result;
use crate::core::filter::TokenFilter;
use crate::core::segment::Segmenter;
use once_cell::sync::Lazy;
use regex::Regex;

/// CJK and Latin sentence terminators; a run of them is one boundary
static SENTENCE_DELIMITERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[。！？!?\n;；]+").unwrap());

/// Split text into trimmed, non-empty sentence fragments
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_DELIMITERS
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// One scoring unit: a sentence or a whole document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusRow {
    /// Index of the caller input this row belongs to
    pub source: usize,
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoringCorpus {
    rows: Vec<CorpusRow>,
}

impl ScoringCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, source: usize, tokens: Vec<String>) {
        self.rows.push(CorpusRow { source, tokens });
    }

    pub fn rows(&self) -> &[CorpusRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of tokens across all rows
    pub fn token_count(&self) -> usize {
        self.rows.iter().map(|row| row.tokens.len()).sum()
    }
}

/// Builds scoring corpora with exact-mode segmentation and token filtering
pub struct CorpusBuilder<'a> {
    segmenter: &'a dyn Segmenter,
    filter: &'a TokenFilter,
}

impl<'a> CorpusBuilder<'a> {
    pub fn new(segmenter: &'a dyn Segmenter, filter: &'a TokenFilter) -> Self {
        Self { segmenter, filter }
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let raw = self.segmenter.cut_exact(text)?;
        Ok(self.filter.retain(raw))
    }

    /// One text becomes its own corpus, one row per sentence.
    ///
    /// Sentences without admissible tokens are dropped rather than kept as
    /// empty rows.
    pub fn intra_document(&self, source: usize, text: &str) -> Result<ScoringCorpus> {
        let mut corpus = ScoringCorpus::new();
        for sentence in split_sentences(text) {
            let tokens = self.tokenize(sentence)?;
            if !tokens.is_empty() {
                corpus.push(source, tokens);
            }
        }
        Ok(corpus)
    }

    /// Every string entry of a batch becomes exactly one row.
    ///
    /// Non-string entries (`None`) are skipped. String entries that yield
    /// no tokens still form a row: they are documents of length zero.
    pub fn cross_document(&self, entries: &[Option<&str>]) -> Result<ScoringCorpus> {
        let mut corpus = ScoringCorpus::new();
        for (source, entry) in entries.iter().enumerate() {
            if let Some(text) = entry {
                corpus.push(source, self.tokenize(text)?);
            }
        }
        Ok(corpus)
    }
}
