//! Tests for the tokenize, tag and extract-keywords CLI commands
//!
//! Texts are passed as arguments; stdin input is covered by the unit
//! tests of the input helpers.

use crate::cli::test_helpers::{create_cli_test_services, texts};
use segkit::cli::commands::keywords::{execute as execute_keywords, KeywordsArgs};
use segkit::cli::commands::tag::{execute as execute_tag, TagArgs};
use segkit::cli::commands::tokenize::{execute as execute_tokenize, TokenizeArgs};
use segkit::cli::OutputFormat;
use segkit::core::keywords::{CorpusMode, ScoringMode};
use segkit::core::types::CutMode;

// =============================================================================
// tokenize tests
// =============================================================================

#[tokio::test]
async fn test_tokenize_human() {
    let services = create_cli_test_services();

    let args = TokenizeArgs {
        texts: texts(&["我 爱 北京"]),
        mode: CutMode::Exact,
    };
    let result = execute_tokenize(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Tokenize should succeed");
}

#[tokio::test]
async fn test_tokenize_json_batch() {
    let services = create_cli_test_services();

    let args = TokenizeArgs {
        texts: texts(&["猫 鱼", "狗 骨头"]),
        mode: CutMode::Search,
    };
    let result = execute_tokenize(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Tokenize (JSON) should succeed");
}

// =============================================================================
// tag tests
// =============================================================================

#[tokio::test]
async fn test_tag_human() {
    let services = create_cli_test_services();

    let args = TagArgs {
        texts: texts(&["今天 天气 很 好"]),
    };
    let result = execute_tag(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Tag should succeed");
}

// =============================================================================
// extract-keywords tests
// =============================================================================

#[tokio::test]
async fn test_keywords_defaults() {
    let services = create_cli_test_services();

    let args = KeywordsArgs {
        texts: texts(&["甲 乙。甲 丙。丁 戊"]),
        top_k: None,
        corpus_mode: None,
        scoring: None,
    };
    let result = execute_keywords(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Extract keywords should succeed");
}

#[tokio::test]
async fn test_keywords_cross_document_json() {
    let services = create_cli_test_services();

    let args = KeywordsArgs {
        texts: texts(&["猫 喜欢 鱼", "狗 喜欢 骨头"]),
        top_k: Some(2),
        corpus_mode: Some(CorpusMode::CrossDocument),
        scoring: Some(ScoringMode::TfIdf),
    };
    let result = execute_keywords(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Extract keywords (JSON) should succeed");
}

#[tokio::test]
async fn test_keywords_zero_top_k_fails() {
    let services = create_cli_test_services();

    let args = KeywordsArgs {
        texts: texts(&["猫 鱼"]),
        top_k: Some(0),
        corpus_mode: None,
        scoring: None,
    };
    let result = execute_keywords(args, &services, OutputFormat::Human).await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("top_k"), "Unexpected error: {err}");
}
