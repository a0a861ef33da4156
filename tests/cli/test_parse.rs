//! Tests for clap argument parsing
//!
//! Checks command names and flag values without running anything.

use clap::Parser;
use segkit::cli::{Cli, Commands, OutputFormat};
use segkit::core::keywords::{CorpusMode, ScoringMode};
use segkit::core::types::CutMode;

#[test]
fn test_parse_tokenize_with_mode() {
    let cli = Cli::try_parse_from(["segkit", "tokenize", "--mode", "search", "我爱北京"]).unwrap();

    assert_eq!(cli.format, OutputFormat::Human);
    match cli.command {
        Commands::Tokenize(args) => {
            assert_eq!(args.mode, CutMode::Search);
            assert_eq!(args.texts, vec!["我爱北京"]);
        }
        other => panic!("Unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_extract_keywords_flags() {
    let cli = Cli::try_parse_from([
        "segkit",
        "--format",
        "json",
        "extract-keywords",
        "-k",
        "3",
        "--corpus-mode",
        "cross-document",
        "--scoring",
        "tfidf",
        "甲",
        "乙",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
    match cli.command {
        Commands::ExtractKeywords(args) => {
            assert_eq!(args.top_k, Some(3));
            assert_eq!(args.corpus_mode, Some(CorpusMode::CrossDocument));
            assert_eq!(args.scoring, Some(ScoringMode::TfIdf));
            assert_eq!(args.texts.len(), 2);
        }
        other => panic!("Unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_rejects_unknown_corpus_mode() {
    let result = Cli::try_parse_from([
        "segkit",
        "extract-keywords",
        "--corpus-mode",
        "global",
        "甲",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_parse_format_after_subcommand() {
    let cli = Cli::try_parse_from(["segkit", "show-config", "--all", "--format", "json"]).unwrap();
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(matches!(cli.command, Commands::ShowConfig(ref args) if args.all));
}

#[test]
fn test_parse_completions() {
    let cli = Cli::try_parse_from(["segkit", "completions", "bash"]).unwrap();
    assert!(matches!(cli.command, Commands::Completions(_)));
}

#[test]
fn test_cli_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
