//! Per-call vocabulary and integer encoding of a scoring corpus.

use super::corpus::ScoringCorpus;
use std::collections::HashMap;

/// Bijection between distinct tokens of one corpus and ids `0..V`.
///
/// Ids follow first-encounter order across rows, which is also the
/// tie-break order used when ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    ids: HashMap<String, usize>,
    terms: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of `term`, assigning the next unused id if new
    pub fn intern(&mut self, term: &str) -> usize {
        if let Some(&id) = self.ids.get(term) {
            return id;
        }
        let id = self.terms.len();
        self.ids.insert(term.to_string(), id);
        self.terms.push(term.to_string());
        id
    }

    pub fn id(&self, term: &str) -> Option<usize> {
        self.ids.get(term).copied()
    }

    pub fn term(&self, id: usize) -> Option<&str> {
        self.terms.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// A corpus row rewritten as vocabulary ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRow {
    pub source: usize,
    pub term_ids: Vec<usize>,
}

/// A scoring corpus together with its vocabulary
#[derive(Debug, Clone, Default)]
pub struct EncodedCorpus {
    pub vocabulary: Vocabulary,
    pub rows: Vec<EncodedRow>,
}

impl EncodedCorpus {
    pub fn encode(corpus: &ScoringCorpus) -> Self {
        let mut vocabulary = Vocabulary::new();
        let rows = corpus
            .rows()
            .iter()
            .map(|row| EncodedRow {
                source: row.source,
                term_ids: row.tokens.iter().map(|t| vocabulary.intern(t)).collect(),
            })
            .collect();

        Self { vocabulary, rows }
    }
}
