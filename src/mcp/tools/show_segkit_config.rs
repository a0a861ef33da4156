//! Show segkit config tool handler
//!
//! Returns the effective configuration of the running segkit-mcp server.

use super::handler::{text_content, McpToolHandler};
use super::helpers::parse_args;
use crate::core::config::Config;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;

pub struct ShowSegkitConfigHandler {
    config: Arc<Config>,
}

#[derive(Deserialize)]
struct ShowConfigArgs {
    #[serde(default)]
    detailed: bool,
}

fn describe_path(path: &Option<PathBuf>, fallback: &str) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => fallback.to_string(),
    }
}

impl ShowSegkitConfigHandler {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    fn format_config(&self) -> String {
        let engine = &self.config.engine;
        let keywords = &self.config.keywords;
        let limits = &self.config.limits;

        let mut output = String::from("# segkit Configuration\n\n");

        output.push_str("## Engine\n");
        output.push_str(&format!("- **Segmenter:** {}\n", engine.segmenter));
        output.push_str(&format!("- **HMM:** {}\n", engine.hmm));
        output.push_str(&format!(
            "- **Stopwords:** {}\n",
            describe_path(&engine.stopwords_path, "bundled")
        ));
        output.push_str(&format!(
            "- **User Dictionary:** {}\n\n",
            describe_path(&engine.user_dict_path, "none")
        ));

        output.push_str("## Keywords\n");
        output.push_str(&format!("- **Default top_k:** {}\n", keywords.default_top_k));
        output.push_str(&format!("- **Max top_k:** {}\n", keywords.max_top_k));
        output.push_str(&format!("- **Corpus Mode:** {}\n", keywords.corpus_mode));
        output.push_str(&format!("- **Scoring:** {}\n\n", keywords.scoring));

        output.push_str("## Limits\n");
        output.push_str(&format!("- **Max Batch Size:** {}\n", limits.max_batch_size));
        output.push_str(&format!("- **Max Text Chars:** {}\n", limits.max_text_chars));
        output.push_str(&format!("- **Max Matrix Cells:** {}\n", limits.max_matrix_cells));

        output
    }

    fn format_config_detailed(&self) -> String {
        let mut output = self.format_config();

        output.push_str("\n## BM25 Parameters\n");
        output.push_str(&format!(
            "- **k1:** {}\n",
            crate::core::keywords::bm25::K1
        ));
        output.push_str(&format!("- **b:** {}\n", crate::core::keywords::bm25::B));

        output.push_str("\n## TOML\n```toml\n");
        match toml::to_string_pretty(self.config.as_ref()) {
            Ok(text) => output.push_str(&text),
            Err(e) => output.push_str(&format!("# unavailable: {e}\n")),
        }
        output.push_str("```\n");

        output
    }
}

#[async_trait]
impl McpToolHandler for ShowSegkitConfigHandler {
    fn name(&self) -> &str {
        "show_segkit_config"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "show_segkit_config".to_string(),
            description: "Show the effective configuration of the running segkit-mcp server: \
                         segmenter, stopword source, keyword defaults and request limits."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "detailed": {
                        "type": "boolean",
                        "description": "Also show BM25 constants and the configuration as TOML",
                        "default": false
                    }
                },
                "required": []
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: ShowConfigArgs = parse_args(args)?;

        let text = if args.detailed {
            self.format_config_detailed()
        } else {
            self.format_config()
        };

        Ok(text_content(text))
    }
}
