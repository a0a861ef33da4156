//! Tests for CLI output formatting helpers
//!
//! - Token joining
//! - Index prefixes (respects NO_COLOR via the colored override)
//! - print_output dispatch for both formats

use segkit::cli::output::{index_prefix, join_tokens, print_output};
use segkit::cli::OutputFormat;

#[test]
fn test_join_tokens() {
    assert_eq!(join_tokens(&["我", "爱", "北京"]), "我 / 爱 / 北京");
    assert_eq!(join_tokens(&["单"]), "单");
}

#[test]
fn test_index_prefix_without_color() {
    colored::control::set_override(false);
    assert_eq!(index_prefix(0), "[0]");
    assert_eq!(index_prefix(12), "[12]");
}

#[test]
fn test_print_output_json_skips_renderer() {
    let mut rendered = false;
    print_output(&vec!["猫"], OutputFormat::Json, |_| rendered = true).unwrap();
    assert!(!rendered);
}

#[test]
fn test_print_output_human_uses_renderer() {
    let mut rendered = false;
    print_output(&vec!["猫"], OutputFormat::Human, |_| rendered = true).unwrap();
    assert!(rendered);
}
