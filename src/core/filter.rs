//! Token admission: stopword table and the token filter.
//!
//! A token is admissible when it is non-blank after trimming and its
//! trimmed form is not a stopword. Punctuation is filtered only through
//! stopword-list coverage.

use crate::core::error::Result;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Stopword list compiled into the binary
pub const BUNDLED_STOPWORDS: &str = include_str!("../../resources/stopwords.txt");

/// Immutable set of stopwords, built once at engine construction
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The list shipped in `resources/stopwords.txt`
    pub fn bundled() -> Self {
        Self::parse(BUNDLED_STOPWORDS)
    }

    /// Parse one term per line; lines are trimmed and blanks skipped
    pub fn parse(contents: &str) -> Self {
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Load a stopword file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    /// Load a stopword file, falling back to an empty set on failure
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(set) => {
                tracing::info!("Loaded {} stopwords from {:?}", set.len(), path);
                set
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load stopwords from {:?}: {}. Continuing without stopwords",
                    path,
                    e
                );
                Self::empty()
            }
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Decides whether a raw token may take part in output or scoring
#[derive(Debug, Clone)]
pub struct TokenFilter {
    stopwords: Arc<StopwordSet>,
}

impl TokenFilter {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self {
            stopwords: Arc::new(stopwords),
        }
    }

    /// Reject blank tokens and stopwords (exact, case-sensitive match)
    pub fn is_valid(&self, token: &str) -> bool {
        let token = token.trim();
        !token.is_empty() && !self.stopwords.contains(token)
    }

    /// Keep admissible tokens in their original order
    pub fn retain<I, S>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String> + AsRef<str>,
    {
        tokens
            .into_iter()
            .filter(|token| self.is_valid(AsRef::<str>::as_ref(token)))
            .map(Into::into)
            .collect()
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self::new(StopwordSet::empty())
    }
}
