//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.
//! Command names match MCP tool names (underscores become hyphens in CLI).

pub mod completions;
pub mod config;
pub mod info;
pub mod keywords;
pub mod tag;
pub mod tokenize;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use info::InfoArgs;
pub use keywords::KeywordsArgs;
pub use tag::TagArgs;
pub use tokenize::TokenizeArgs;

use crate::cli::output::print_warning;
use crate::core::types::TextInput;
use std::io::{self, BufRead};

/// Build the engine input from positional TEXT arguments
///
/// With no arguments, each non-empty stdin line is one document.
pub fn read_input(texts: Vec<String>) -> io::Result<TextInput> {
    if texts.is_empty() {
        let stdin = io::stdin();
        let input = input_from_lines(stdin.lock())?;
        if input.is_empty() {
            print_warning("no text given on the command line or stdin");
        }
        return Ok(input);
    }
    Ok(input_from_args(texts))
}

/// One argument is a single text; several form a batch
pub fn input_from_args(mut texts: Vec<String>) -> TextInput {
    if texts.len() == 1 {
        TextInput::Single(texts.remove(0))
    } else {
        TextInput::from(texts)
    }
}

/// Read one document per non-empty line
pub fn input_from_lines<R: BufRead>(reader: R) -> io::Result<TextInput> {
    let mut texts = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            texts.push(line);
        }
    }
    Ok(TextInput::from(texts))
}
