//! Get-server-info command - show version and engine information

use crate::cli::output::{colors, print_json};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::mcp::protocol::PROTOCOL_VERSION;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the get-server-info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Show detailed information
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Server information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub protocol: String,
    pub segmenter: String,
    pub stopwords: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<LimitsInfo>,
}

#[derive(Debug, Serialize)]
pub struct LimitsInfo {
    pub max_batch_size: usize,
    pub max_text_chars: usize,
    pub max_top_k: usize,
    pub max_matrix_cells: usize,
}

/// Collect engine information
pub fn server_info(services: &Services, detailed: bool) -> InfoResponse {
    let engine = &services.engine;
    let limits = detailed.then(|| LimitsInfo {
        max_batch_size: engine.limits().max_batch_size,
        max_text_chars: engine.limits().max_text_chars,
        max_top_k: engine.limits().max_top_k,
        max_matrix_cells: engine.limits().max_matrix_cells,
    });

    InfoResponse {
        name: "segkit".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        protocol: format!("MCP {PROTOCOL_VERSION}"),
        segmenter: engine.segmenter_name().to_string(),
        stopwords: engine.stopword_count(),
        limits,
    }
}

/// Execute the get-server-info command
pub async fn execute(
    args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let info = server_info(services, args.detailed);

    match format {
        OutputFormat::Human => {
            println!("{} {}", colors::label(&info.name), info.version);
            println!("Protocol: {}", info.protocol);
            println!("Segmenter: {}", info.segmenter);
            println!("Stopwords: {}", colors::number(&info.stopwords.to_string()));
            if let Some(limits) = &info.limits {
                println!("Max batch size: {}", limits.max_batch_size);
                println!("Max text chars: {}", limits.max_text_chars);
                println!("Max top_k: {}", limits.max_top_k);
                println!("Max matrix cells: {}", limits.max_matrix_cells);
            }
        }
        OutputFormat::Json => print_json(&info)?,
    }

    Ok(())
}
