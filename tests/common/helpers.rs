// Test helper functions

use segkit::core::config::Config;
use segkit::core::segment::SegmenterKind;
use segkit::core::services::Services;
use segkit::core::types::IndexedResults;
use std::path::Path;

/// Services on the whitespace segmenter, so results are deterministic
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services() -> Services {
    create_test_services_with_stopwords(None)
}

/// Whitespace services with an optional stopword file
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services_with_stopwords(stopwords: Option<&Path>) -> Services {
    let mut config = Config::default();
    config.engine.segmenter = SegmenterKind::Whitespace;
    config.engine.stopwords_path = stopwords.map(Path::to_path_buf);
    Services::new(config).expect("Failed to create test services")
}

/// Services on the jieba dictionary
#[allow(dead_code)] // Used in integration tests
pub fn create_jieba_services() -> Services {
    Services::new(Config::default()).expect("Failed to create jieba services")
}

/// Tokens at `index`, panicking with context if missing
#[allow(dead_code)] // Used in integration tests
pub fn tokens_at(results: &IndexedResults<Vec<String>>, index: usize) -> Vec<String> {
    results
        .get(index)
        .unwrap_or_else(|| panic!("Missing result for index {index}"))
        .clone()
}

/// Same as [`tokens_at`], named for keyword results
#[allow(dead_code)] // Used in integration tests
pub fn keywords_at(results: &IndexedResults<Vec<String>>, index: usize) -> Vec<String> {
    tokens_at(results, index)
}
