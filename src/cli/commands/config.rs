//! Show-config command - show current configuration

use crate::cli::output::{print_header, print_json};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show resolved paths and BM25 parameters
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Resolved locations, shown with `--all`
#[derive(Debug, Serialize)]
pub struct PathsInfo {
    pub config_file: String,
    pub user_stopwords: String,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    #[serde(flatten)]
    pub config: &'a crate::core::config::Config,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<PathsInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bm25: Option<Bm25Info>,
}

#[derive(Debug, Serialize)]
pub struct Bm25Info {
    pub k1: f64,
    pub b: f64,
}

/// Execute the show-config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = services.config.as_ref();

    let (paths, bm25) = if args.all {
        let xdg = XdgDirs::new();
        let params = services.engine.bm25_params();
        (
            Some(PathsInfo {
                config_file: xdg.config_file().to_string_lossy().into_owned(),
                user_stopwords: xdg.stopwords_file().to_string_lossy().into_owned(),
            }),
            Some(Bm25Info {
                k1: params.k1,
                b: params.b,
            }),
        )
    } else {
        (None, None)
    };

    let response = ConfigResponse {
        config,
        paths,
        bm25,
    };

    match format {
        OutputFormat::Human => {
            print_header("Configuration:");
            println!("  engine:");
            println!("    segmenter: {}", config.engine.segmenter);
            println!("    hmm: {}", config.engine.hmm);
            println!(
                "    stopwords_path: {}",
                display_path(config.engine.stopwords_path.as_deref())
            );
            println!(
                "    user_dict_path: {}",
                display_path(config.engine.user_dict_path.as_deref())
            );
            println!("  keywords:");
            println!("    default_top_k: {}", config.keywords.default_top_k);
            println!("    max_top_k: {}", config.keywords.max_top_k);
            println!("    corpus_mode: {}", config.keywords.corpus_mode);
            println!("    scoring: {}", config.keywords.scoring);
            println!("  limits:");
            println!("    max_batch_size: {}", config.limits.max_batch_size);
            println!("    max_text_chars: {}", config.limits.max_text_chars);
            println!("    max_matrix_cells: {}", config.limits.max_matrix_cells);
            if let Some(bm25) = &response.bm25 {
                println!("  bm25:");
                println!("    k1: {}", bm25.k1);
                println!("    b: {}", bm25.b);
            }
            if let Some(paths) = &response.paths {
                println!("  paths:");
                println!("    config_file: {}", paths.config_file);
                println!("    user_stopwords: {}", paths.user_stopwords);
            }
        }
        OutputFormat::Json => print_json(&response)?,
    }

    Ok(())
}

fn display_path(path: Option<&std::path::Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "(bundled)".to_string())
}
