//! Tokenize tool handler

use super::handler::{json_content, McpToolHandler};
use super::helpers::{parse_args, parse_text, run_blocking};
use crate::core::services::Services;
use crate::core::types::CutMode;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct TokenizeHandler {
    services: Arc<Services>,
}

impl TokenizeHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[derive(Deserialize)]
struct TokenizeArgs {
    text: Value,
    #[serde(default)]
    mode: CutMode,
}

#[async_trait]
impl McpToolHandler for TokenizeHandler {
    fn name(&self) -> &str {
        "tokenize"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "tokenize".to_string(),
            description: "Segment Chinese text into words. Accepts one string or a list of \
                         strings and returns a JSON object mapping each input index (\"0\", \"1\", ...) \
                         to its tokens. Stopwords and punctuation are removed. \
                         Mode 'exact' (default) gives non-overlapping words; 'search' also emits \
                         shorter sub-words, useful for building search indexes."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "text": {
                        "description": "Text to segment, or a list of texts",
                        "oneOf": [
                            {"type": "string"},
                            {"type": "array", "items": {"type": "string"}}
                        ]
                    },
                    "mode": {
                        "type": "string",
                        "enum": ["exact", "search"],
                        "default": "exact",
                        "description": "Segmentation granularity"
                    }
                },
                "required": ["text"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: TokenizeArgs = parse_args(args)?;
        let input = parse_text(args.text)?;
        let mode = args.mode;

        let engine = Arc::clone(&self.services.engine);
        let results = run_blocking(move || engine.tokenize(&input, mode)).await?;

        json_content(&results)
    }
}
