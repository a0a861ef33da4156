//! CLI adapter for segkit
//!
//! Provides command-line access to segmentation, tagging and keyword
//! extraction. This module is parallel to `mcp/` - both depend on `core/`
//! but not on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      mcp/        |      |      cli/        |
//! | (stdio adapter)  |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// segkit - Chinese word segmentation and BM25 keyword extraction
///
/// Segment, tag and extract keywords from text given as arguments or,
/// when no text is given, one document per line on stdin.
#[derive(Parser, Debug)]
#[command(name = "segkit")]
#[command(version)]
#[command(about = "Chinese word segmentation and BM25 keyword extraction", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
///
/// Command names match MCP tool names (underscores become hyphens).
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Segment text into words (stopwords removed)
    Tokenize(commands::TokenizeArgs),

    /// Part-of-speech tag text
    Tag(commands::TagArgs),

    /// Extract top-K keywords with BM25 ranking
    #[command(name = "extract-keywords")]
    ExtractKeywords(commands::KeywordsArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Show version and engine information
    #[command(name = "get-server-info")]
    GetServerInfo(commands::InfoArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  segkit completions bash > ~/.local/share/bash-completion/completions/segkit
    ///   zsh:   segkit completions zsh > ~/.zfunc/_segkit
    ///   fish:  segkit completions fish > ~/.config/fish/completions/segkit.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = Config::load()?;
    let services = Arc::new(Services::new(config)?);

    match cli.command {
        Commands::Tokenize(args) => commands::tokenize::execute(args, &services, cli.format).await,
        Commands::Tag(args) => commands::tag::execute(args, &services, cli.format).await,
        Commands::ExtractKeywords(args) => {
            commands::keywords::execute(args, &services, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::GetServerInfo(args) => commands::info::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
