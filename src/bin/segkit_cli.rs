//! segkit CLI - Command-line interface for segkit
//!
//! Direct access to segmentation, tagging and keyword extraction.
//! Use this for scripting and pipelines without an MCP client.
//!
//! # Examples
//!
//! ```bash
//! # Segment a sentence
//! segkit tokenize "我爱自然语言处理"
//!
//! # Keywords across a file of documents, one per line
//! segkit extract-keywords --corpus-mode cross-document -k 3 < docs.txt
//!
//! # JSON output for scripting
//! segkit --format json tag "今天天气很好"
//! ```

use clap::Parser;
use segkit::cli::output::print_error;
use segkit::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    // Quiet by default; RUST_LOG raises it
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("segkit=warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
