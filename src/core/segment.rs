//! Word segmentation and part-of-speech tagging.
//!
//! The [`Segmenter`] trait is the seam between segkit and the dictionary
//! engine. [`JiebaSegmenter`] is the production implementation;
//! [`WhitespaceSegmenter`] serves pre-segmented text.

use crate::core::error::{Result, SegkitError};
use crate::core::types::{CutMode, PosTag};
use jieba_rs::Jieba;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Word segmentation capability
pub trait Segmenter: Send + Sync {
    /// Non-overlapping segmentation
    fn cut_exact(&self, text: &str) -> Result<Vec<String>>;

    /// Fine-grained segmentation; may emit overlapping sub-words
    fn cut_search(&self, text: &str) -> Result<Vec<String>>;

    /// Segment and attach a part-of-speech flag to every token
    fn tag(&self, text: &str) -> Result<Vec<PosTag>>;

    /// Short name for logs and server info
    fn name(&self) -> &'static str;

    fn cut(&self, text: &str, mode: CutMode) -> Result<Vec<String>> {
        match mode {
            CutMode::Exact => self.cut_exact(text),
            CutMode::Search => self.cut_search(text),
        }
    }
}

/// Which segmenter the engine is built with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmenterKind {
    #[default]
    Jieba,
    Whitespace,
}

impl SegmenterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmenterKind::Jieba => "jieba",
            SegmenterKind::Whitespace => "whitespace",
        }
    }
}

impl fmt::Display for SegmenterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SegmenterKind {
    type Err = SegkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jieba" => Ok(SegmenterKind::Jieba),
            "whitespace" => Ok(SegmenterKind::Whitespace),
            other => Err(SegkitError::ConfigError(format!(
                "Unknown segmenter '{other}' (expected 'jieba' or 'whitespace')"
            ))),
        }
    }
}

/// Dictionary-based Chinese segmenter backed by jieba-rs
pub struct JiebaSegmenter {
    jieba: Jieba,
    hmm: bool,
}

impl JiebaSegmenter {
    /// Build with the default dictionary
    pub fn new(hmm: bool) -> Self {
        Self {
            jieba: Jieba::new(),
            hmm,
        }
    }

    /// Build with the default dictionary plus a user dictionary file
    ///
    /// The file uses jieba's `word [freq] [tag]` line format.
    pub fn with_user_dict(hmm: bool, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            SegkitError::ConfigError(format!("Failed to open user dictionary {path:?}: {e}"))
        })?;

        let mut jieba = Jieba::new();
        jieba
            .load_dict(&mut BufReader::new(file))
            .map_err(|e| {
                SegkitError::ConfigError(format!("Invalid user dictionary {path:?}: {e}"))
            })?;

        tracing::info!("Loaded user dictionary from {:?}", path);
        Ok(Self { jieba, hmm })
    }
}

impl Segmenter for JiebaSegmenter {
    fn cut_exact(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .jieba
            .cut(text, self.hmm)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    fn cut_search(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .jieba
            .cut_for_search(text, self.hmm)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    fn tag(&self, text: &str) -> Result<Vec<PosTag>> {
        Ok(self
            .jieba
            .tag(text, self.hmm)
            .into_iter()
            .map(|t| PosTag::new(t.word, t.tag))
            .collect())
    }

    fn name(&self) -> &'static str {
        "jieba"
    }
}

/// Splits on Unicode whitespace; for text that is already segmented
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceSegmenter;

/// Flag assigned by [`WhitespaceSegmenter::tag`] (jieba's "unknown" flag)
pub const UNKNOWN_FLAG: &str = "x";

impl Segmenter for WhitespaceSegmenter {
    fn cut_exact(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }

    fn cut_search(&self, text: &str) -> Result<Vec<String>> {
        self.cut_exact(text)
    }

    fn tag(&self, text: &str) -> Result<Vec<PosTag>> {
        Ok(text
            .split_whitespace()
            .map(|word| PosTag::new(word, UNKNOWN_FLAG))
            .collect())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
