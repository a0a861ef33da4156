//! Engine integration tests
//!
//! Exercises tokenize and tag through `Services`, covering:
//! - Index-keyed results for single strings and batches
//! - Degenerate batch entries mapping to empty lists
//! - Request limits

use crate::common::{create_jieba_services, create_test_services, tokens_at};
use segkit::core::config::Config;
use segkit::core::engine::{Engine, EngineLimits};
use segkit::core::error::SegkitError;
use segkit::core::filter::StopwordSet;
use segkit::core::keywords::{KeywordOptions, ScoringMode};
use segkit::core::segment::{SegmenterKind, WhitespaceSegmenter};
use segkit::core::services::Services;
use segkit::core::types::{CutMode, TextInput};
use serde_json::json;
use std::sync::Arc;

#[test]
fn test_tokenize_single_string_is_index_zero() {
    let services = create_test_services();
    let results = services
        .engine
        .tokenize(&TextInput::from("我 爱 北京"), CutMode::Exact)
        .unwrap();

    assert_eq!(results.len(), 1);
    // 我 is a bundled stopword
    assert_eq!(tokens_at(&results, 0), vec!["爱", "北京"]);
}

#[test]
fn test_tokenize_batch_keeps_positions() {
    let services = create_test_services();
    let input = TextInput::from_value(json!(["猫 鱼", 42, "", null, "狗"])).unwrap();
    let results = services.engine.tokenize(&input, CutMode::Exact).unwrap();

    assert_eq!(results.len(), 5);
    assert_eq!(tokens_at(&results, 0), vec!["猫", "鱼"]);
    assert!(tokens_at(&results, 1).is_empty());
    assert!(tokens_at(&results, 2).is_empty());
    assert!(tokens_at(&results, 3).is_empty());
    assert_eq!(tokens_at(&results, 4), vec!["狗"]);
}

#[test]
fn test_tokenize_empty_batch() {
    let services = create_test_services();
    let results = services
        .engine
        .tokenize(&TextInput::Batch(vec![]), CutMode::Search)
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_tokenize_result_serializes_with_string_keys() {
    let services = create_test_services();
    let results = services
        .engine
        .tokenize(&TextInput::from(vec!["猫", "狗"]), CutMode::Exact)
        .unwrap();

    assert_eq!(
        serde_json::to_value(&results).unwrap(),
        json!({"0": ["猫"], "1": ["狗"]})
    );
}

#[test]
fn test_tag_keeps_stopwords() {
    let services = create_test_services();
    let results = services.engine.tag(&TextInput::from("我 的 猫")).unwrap();

    let words: Vec<&str> = results
        .get(0)
        .unwrap()
        .iter()
        .map(|t| t.word.as_str())
        .collect();
    assert_eq!(words, vec!["我", "的", "猫"]);
}

#[test]
fn test_batch_size_limit() {
    let limits = EngineLimits {
        max_batch_size: 2,
        ..EngineLimits::default()
    };
    let engine = Engine::new(Arc::new(WhitespaceSegmenter), StopwordSet::empty(), limits);

    let err = engine
        .tokenize(&TextInput::from(vec!["a", "b", "c"]), CutMode::Exact)
        .unwrap_err();
    assert!(matches!(err, SegkitError::InvalidInput(_)));
}

#[test]
fn test_text_length_limit_counts_characters() {
    let limits = EngineLimits {
        max_text_chars: 4,
        ..EngineLimits::default()
    };
    let engine = Engine::new(Arc::new(WhitespaceSegmenter), StopwordSet::empty(), limits);

    // Four characters, twelve bytes
    assert!(engine.tag(&TextInput::from("自然语言")).is_ok());
    let err = engine.tag(&TextInput::from("自然语言处理")).unwrap_err();
    assert!(matches!(err, SegkitError::InvalidInput(_)));
}

#[test]
fn test_limits_follow_config() {
    let mut config = Config::default();
    config.engine.segmenter = SegmenterKind::Whitespace;
    config.limits.max_batch_size = 1;
    let services = Services::new(config).unwrap();

    assert_eq!(services.engine.limits().max_batch_size, 1);
    assert!(services
        .engine
        .tokenize(&TextInput::from(vec!["a", "b"]), CutMode::Exact)
        .is_err());
}

#[test]
fn test_jieba_tokenize_chinese() {
    let services = create_jieba_services();
    let results = services
        .engine
        .tokenize(&TextInput::from("我来到北京清华大学"), CutMode::Exact)
        .unwrap();

    let tokens = tokens_at(&results, 0);
    assert!(tokens.contains(&"清华大学".to_string()));
    assert!(!tokens.contains(&"我".to_string()));
}

#[test]
fn test_jieba_search_mode_is_finer() {
    let services = create_jieba_services();
    let input = TextInput::from("我来到北京清华大学");
    let exact = services.engine.tokenize(&input, CutMode::Exact).unwrap();
    let search = services.engine.tokenize(&input, CutMode::Search).unwrap();

    assert!(tokens_at(&search, 0).len() >= tokens_at(&exact, 0).len());
}

#[test]
fn test_jieba_tag_has_flags() {
    let services = create_jieba_services();
    let results = services.engine.tag(&TextInput::from("今天天气很好")).unwrap();

    let tags = results.get(0).unwrap();
    assert!(!tags.is_empty());
    assert!(tags.iter().all(|t| !t.flag.is_empty()));
    let joined: String = tags.iter().map(|t| t.word.as_str()).collect();
    assert_eq!(joined, "今天天气很好");
}

#[test]
fn test_matrix_cell_limit_rejects_oversized_corpus() {
    let limits = EngineLimits {
        max_matrix_cells: 1_000,
        ..EngineLimits::default()
    };
    let engine = Engine::new(Arc::new(WhitespaceSegmenter), StopwordSet::empty(), limits);

    // 100 sentences with a distinct word each: 100 x 100 cells
    let text = (0..100)
        .map(|i| format!("w{i}"))
        .collect::<Vec<_>>()
        .join("。");
    let input = TextInput::from(text);

    let err = engine
        .extract_keywords(&input, &KeywordOptions::default())
        .unwrap_err();
    assert!(matches!(err, SegkitError::InvalidInput(_)));
    assert!(err.to_string().contains("matrix cells"));

    // Segmentation alone is unaffected
    assert!(engine.tokenize(&input, CutMode::Exact).is_ok());

    // tf-idf scoring stays sparse
    let tfidf = KeywordOptions {
        scoring: ScoringMode::TfIdf,
        ..KeywordOptions::default()
    };
    let results = engine.extract_keywords(&input, &tfidf).unwrap();
    assert_eq!(tokens_at(&results, 0).len(), 5);
}
