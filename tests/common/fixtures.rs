// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Pre-segmented text with four sentences; 甲 appears in two of them
#[allow(dead_code)] // Used in integration tests
pub const INTRA_DOC: &str = "甲 乙。甲 丙。丁 戊。己 庚";

/// Pre-segmented documents sharing the word 喜欢
#[allow(dead_code)] // Used in integration tests
pub const CROSS_DOCS: [&str; 2] = ["猫 喜欢 鱼", "狗 喜欢 骨头"];

/// Stopword list written to a temporary directory
#[allow(dead_code)] // Used in integration tests
pub struct StopwordFile {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl StopwordFile {
    /// Write one word per line
    #[allow(dead_code)] // Used in integration tests
    pub fn with_words(words: &[&str]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("stopwords.txt");
        std::fs::write(&path, words.join("\n")).expect("Failed to write stopwords");
        Self { dir, path }
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        &self.path
    }
}
