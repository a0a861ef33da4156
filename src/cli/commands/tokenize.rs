//! Tokenize command - segment text into words

use super::read_input;
use crate::cli::output::{index_prefix, join_tokens, print_output};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::CutMode;
use clap::Args;
use std::sync::Arc;

/// Arguments for the tokenize command
#[derive(Args, Debug)]
pub struct TokenizeArgs {
    /// Texts to segment (reads one per line from stdin if omitted)
    pub texts: Vec<String>,

    /// Segmentation granularity
    #[arg(long, short = 'm', value_enum, default_value = "exact")]
    pub mode: CutMode,
}

/// Execute the tokenize command
pub async fn execute(
    args: TokenizeArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.texts)?;
    let results = services.engine.tokenize(&input, args.mode)?;

    print_output(&results, format, |results| {
        for (index, tokens) in results.iter() {
            println!("{} {}", index_prefix(*index), join_tokens(tokens));
        }
    })?;

    Ok(())
}
