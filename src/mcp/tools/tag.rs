//! Part-of-speech tagging tool handler

use super::handler::{json_content, McpToolHandler};
use super::helpers::{parse_args, parse_text, run_blocking};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct TagHandler {
    services: Arc<Services>,
}

impl TagHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[derive(Deserialize)]
struct TagArgs {
    text: Value,
}

#[async_trait]
impl McpToolHandler for TagHandler {
    fn name(&self) -> &str {
        "tag"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "tag".to_string(),
            description: "Part-of-speech tag Chinese text. Returns a JSON object mapping each \
                         input index to an ordered list of {\"word\", \"flag\"} pairs using jieba \
                         flags (n = noun, v = verb, x = other). No stopword filtering is applied."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "text": {
                        "description": "Text to tag, or a list of texts",
                        "oneOf": [
                            {"type": "string"},
                            {"type": "array", "items": {"type": "string"}}
                        ]
                    }
                },
                "required": ["text"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: TagArgs = parse_args(args)?;
        let input = parse_text(args.text)?;

        let engine = Arc::clone(&self.services.engine);
        let results = run_blocking(move || engine.tag(&input)).await?;

        json_content(&results)
    }
}
