//! Tag command - part-of-speech tagging

use super::read_input;
use crate::cli::output::{colors, index_prefix, print_output};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the tag command
#[derive(Args, Debug)]
pub struct TagArgs {
    /// Texts to tag (reads one per line from stdin if omitted)
    pub texts: Vec<String>,
}

/// Execute the tag command
pub async fn execute(
    args: TagArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.texts)?;
    let results = services.engine.tag(&input)?;

    print_output(&results, format, |results| {
        for (index, tags) in results.iter() {
            let line = tags
                .iter()
                .map(|tag| format!("{}/{}", tag.word, colors::flag(&tag.flag)))
                .collect::<Vec<_>>()
                .join(" ");
            println!("{} {}", index_prefix(*index), line);
        }
    })?;

    Ok(())
}
