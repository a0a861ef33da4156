//! Extract-keywords command - BM25 keyword ranking

use super::read_input;
use crate::cli::output::{colors, index_prefix, print_output};
use crate::cli::OutputFormat;
use crate::core::keywords::{CorpusMode, KeywordOptions, ScoringMode};
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the extract-keywords command
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// Texts to analyse (reads one per line from stdin if omitted)
    pub texts: Vec<String>,

    /// Keywords per text (default from config)
    #[arg(long, short = 'k')]
    pub top_k: Option<usize>,

    /// What forms the scoring corpus (default from config)
    #[arg(long, value_enum)]
    pub corpus_mode: Option<CorpusMode>,

    /// Scoring function (default from config)
    #[arg(long, value_enum)]
    pub scoring: Option<ScoringMode>,
}

impl KeywordsArgs {
    /// Fill unset flags from the configured defaults
    pub fn options(&self, defaults: KeywordOptions) -> KeywordOptions {
        KeywordOptions {
            top_k: self.top_k.unwrap_or(defaults.top_k),
            corpus_mode: self.corpus_mode.unwrap_or(defaults.corpus_mode),
            scoring: self.scoring.unwrap_or(defaults.scoring),
        }
    }
}

/// Execute the extract-keywords command
pub async fn execute(
    args: KeywordsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = args.options(services.default_keyword_options());
    let input = read_input(args.texts)?;
    let results = services.engine.extract_keywords(&input, &options)?;

    print_output(&results, format, |results| {
        for (index, keywords) in results.iter() {
            let line = keywords
                .iter()
                .enumerate()
                .map(|(rank, word)| format!("{}.{}", colors::rank(&(rank + 1).to_string()), word))
                .collect::<Vec<_>>()
                .join("  ");
            println!("{} {}", index_prefix(*index), line);
        }
    })?;

    Ok(())
}
