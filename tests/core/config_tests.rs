//! Configuration integration tests
//!
//! A TOML file on disk drives the engine that `Services` builds.

use crate::common::StopwordFile;
use segkit::core::config::Config;
use segkit::core::error::SegkitError;
use segkit::core::keywords::CorpusMode;
use segkit::core::services::Services;
use segkit::core::types::{CutMode, TextInput};
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_config_file_drives_engine() {
    let stopwords = StopwordFile::with_words(&["喜欢"]);
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        &format!(
            r#"
[engine]
segmenter = "whitespace"
stopwords_path = "{}"

[keywords]
default_top_k = 1
corpus_mode = "cross-document"
"#,
            stopwords.path().display()
        ),
    );

    let config = Config::from_file(&path).unwrap();
    config.validate().unwrap();
    assert_eq!(config.keywords.corpus_mode, CorpusMode::CrossDocument);

    let services = Services::new(config).unwrap();
    assert_eq!(services.engine.segmenter_name(), "whitespace");
    assert_eq!(services.engine.stopword_count(), 1);

    let tokens = services
        .engine
        .tokenize(&TextInput::from("猫 喜欢 鱼"), CutMode::Exact)
        .unwrap();
    assert_eq!(tokens.get(0).unwrap(), &vec!["猫", "鱼"]);

    let keywords = services
        .engine
        .extract_keywords(
            &TextInput::from(vec!["猫 鱼", "狗 骨头"]),
            &services.default_keyword_options(),
        )
        .unwrap();
    assert_eq!(keywords.get(0).unwrap(), &vec!["猫"]);
}

#[test]
fn test_missing_sections_use_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[limits]\nmax_batch_size = 10\n");

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.limits.max_batch_size, 10);
    assert_eq!(config.keywords.default_top_k, 5);
    assert!(config.engine.hmm);
}

#[test]
fn test_invalid_toml_is_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[keywords\ndefault_top_k = ");

    let err = Config::from_file(&path).unwrap_err();
    assert!(matches!(err, SegkitError::TomlError(_)));
}

#[test]
fn test_unknown_corpus_mode_is_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[keywords]\ncorpus_mode = \"global\"\n");

    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_missing_config_file_is_config_error() {
    let err = Config::from_file("/nonexistent/segkit/config.toml").unwrap_err();
    assert!(matches!(err, SegkitError::ConfigError(_)));
}

#[test]
fn test_validate_rejects_default_above_max() {
    let mut config = Config::default();
    config.keywords.default_top_k = 200;
    assert!(config.validate().is_err());
}
