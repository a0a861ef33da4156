//! BM25 term scoring over a scoring corpus.
//!
//! With `N` rows, row lengths `dl_i` and their mean `avgdl`:
//!
//! ```text
//! IDF(t)     = ln((N - df(t) + 0.5) / (df(t) + 0.5) + 1)
//! score(i,t) = IDF(t) * tf(i,t) * (k1 + 1) / (tf(i,t) + k1 * (1 - b + b * dl_i / avgdl))
//! ```
//!
//! Two scorers share the IDF definition: [`Bm25Scorer`] builds the dense
//! term-frequency and score matrices, [`TfIdfScorer`] weights sparse
//! per-row counts by `tf * IDF` without length normalization.

use super::vocab::{EncodedCorpus, EncodedRow};
use std::collections::HashMap;

/// Term-frequency saturation
pub const K1: f64 = 1.5;
/// Length-normalization strength
pub const B: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25Params {
    pub k1: f64,
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: K1, b: B }
    }
}

/// BM25 inverse document frequency
pub fn idf(total_rows: usize, doc_freq: usize) -> f64 {
    let n = total_rows as f64;
    let df = doc_freq as f64;
    ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
}

/// NaN and infinities from degenerate denominators count as zero
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Dense `rows x V` matrix of term counts
#[derive(Debug, Clone, PartialEq)]
pub struct TermFrequencyMatrix {
    rows: usize,
    vocab_size: usize,
    counts: Vec<f64>,
}

impl TermFrequencyMatrix {
    pub fn from_rows(rows: &[EncodedRow], vocab_size: usize) -> Self {
        let mut counts = vec![0.0; rows.len() * vocab_size];
        for (i, row) in rows.iter().enumerate() {
            for &term in &row.term_ids {
                counts[i * vocab_size + term] += 1.0;
            }
        }
        Self {
            rows: rows.len(),
            vocab_size,
            counts,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    pub fn get(&self, row: usize, term: usize) -> f64 {
        self.counts[row * self.vocab_size + term]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.counts[row * self.vocab_size..(row + 1) * self.vocab_size]
    }

    /// `dl_i`: total count in each row
    pub fn row_lengths(&self) -> Vec<f64> {
        (0..self.rows).map(|i| self.row(i).iter().sum()).collect()
    }

    /// `df(t)`: rows with a non-zero count of each term
    pub fn document_frequencies(&self) -> Vec<usize> {
        let mut df = vec![0; self.vocab_size];
        for i in 0..self.rows {
            for (t, &count) in self.row(i).iter().enumerate() {
                if count > 0.0 {
                    df[t] += 1;
                }
            }
        }
        df
    }
}

/// Dense `rows x V` matrix of BM25 scores
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    rows: usize,
    vocab_size: usize,
    scores: Vec<f64>,
}

impl ScoreMatrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, row: usize, term: usize) -> f64 {
        self.scores[row * self.vocab_size + term]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.scores[row * self.vocab_size..(row + 1) * self.vocab_size]
    }
}

/// Per-row `(term id, score)` pairs for the terms each row contains
pub type RowScores = Vec<Vec<(usize, f64)>>;

/// Scores every term occurrence of a corpus, row by row
pub trait RowScorer {
    /// Returns `None` for a degenerate corpus (no rows, no terms, or
    /// every row empty); callers then report an empty result.
    fn score_rows(&self, corpus: &EncodedCorpus) -> Option<RowScores>;
}

/// Full BM25 over the dense term-frequency matrix
#[derive(Debug, Clone, Copy, Default)]
pub struct Bm25Scorer {
    params: Bm25Params,
}

impl Bm25Scorer {
    pub fn new(params: Bm25Params) -> Self {
        Self { params }
    }

    pub fn idf_vector(&self, tf: &TermFrequencyMatrix) -> Vec<f64> {
        tf.document_frequencies()
            .into_iter()
            .map(|df| idf(tf.rows(), df))
            .collect()
    }

    /// Compute the score matrix; `None` when `avgdl` is zero
    pub fn score(&self, tf: &TermFrequencyMatrix) -> Option<ScoreMatrix> {
        let n = tf.rows();
        let v = tf.vocab_size();
        if n == 0 || v == 0 {
            return None;
        }

        let lengths = tf.row_lengths();
        let avgdl = lengths.iter().sum::<f64>() / n as f64;
        if avgdl == 0.0 {
            return None;
        }

        let Bm25Params { k1, b } = self.params;
        let idf = self.idf_vector(tf);
        let mut scores = vec![0.0; n * v];

        for (i, &dl) in lengths.iter().enumerate() {
            let norm = k1 * (1.0 - b + b * dl / avgdl);
            for (t, &f) in tf.row(i).iter().enumerate() {
                let score = idf[t] * (f * (k1 + 1.0)) / (f + norm);
                scores[i * v + t] = finite_or_zero(score);
            }
        }

        Some(ScoreMatrix {
            rows: n,
            vocab_size: v,
            scores,
        })
    }
}

impl RowScorer for Bm25Scorer {
    fn score_rows(&self, corpus: &EncodedCorpus) -> Option<RowScores> {
        let tf = TermFrequencyMatrix::from_rows(&corpus.rows, corpus.vocabulary.len());
        let scores = self.score(&tf)?;

        Some(
            (0..tf.rows())
                .map(|i| {
                    tf.row(i)
                        .iter()
                        .enumerate()
                        .filter(|(_, &count)| count > 0.0)
                        .map(|(t, _)| (t, scores.get(i, t)))
                        .collect()
                })
                .collect(),
        )
    }
}

/// Sparse term counts of one row
pub type TermCounts = HashMap<usize, u32>;

pub fn term_counts(term_ids: &[usize]) -> TermCounts {
    let mut counts = TermCounts::new();
    for &term in term_ids {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

/// Lighter `tf * IDF` weighting from sparse per-row counts
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer;

impl RowScorer for TfIdfScorer {
    fn score_rows(&self, corpus: &EncodedCorpus) -> Option<RowScores> {
        let n = corpus.rows.len();
        let v = corpus.vocabulary.len();
        if n == 0 || v == 0 {
            return None;
        }

        let counts: Vec<TermCounts> = corpus
            .rows
            .iter()
            .map(|row| term_counts(&row.term_ids))
            .collect();

        let mut df = vec![0usize; v];
        for row in &counts {
            for &term in row.keys() {
                df[term] += 1;
            }
        }

        // IDF is only computed for terms that actually get scored
        let mut idf_cache: Vec<Option<f64>> = vec![None; v];

        Some(
            counts
                .iter()
                .map(|row| {
                    let mut scored: Vec<(usize, f64)> = row
                        .iter()
                        .map(|(&term, &count)| {
                            let weight = *idf_cache[term].get_or_insert_with(|| idf(n, df[term]));
                            (term, finite_or_zero(count as f64 * weight))
                        })
                        .collect();
                    scored.sort_unstable_by_key(|&(term, _)| term);
                    scored
                })
                .collect(),
        )
    }
}
