//! Get server info tool handler
//!
//! Returns version and engine information about the running segkit-mcp server.

use super::handler::{text_content, McpToolHandler};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema, PROTOCOL_VERSION};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetServerInfoHandler {
    services: Arc<Services>,
    tool_names: Vec<String>,
}

impl GetServerInfoHandler {
    /// `tool_names` are the other registered tools; this one is added
    pub fn new(services: Arc<Services>, tool_names: Vec<String>) -> Self {
        let mut tool_names = tool_names;
        tool_names.push("get_server_info".to_string());
        tool_names.sort();
        tool_names.dedup();
        Self {
            services,
            tool_names,
        }
    }

    fn format_info(&self) -> String {
        let version = env!("CARGO_PKG_VERSION");
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let engine = &self.services.engine;

        let mut output = String::from("# segkit MCP Server Information\n\n");

        output.push_str("## Version\n");
        output.push_str(&format!("- **Version:** {version}\n"));
        output.push_str(&format!("- **Rust Version:** {rust_version}\n\n"));

        output.push_str("## Server Details\n");
        output.push_str("- **Name:** segkit-mcp\n");
        output.push_str("- **Description:** Chinese segmentation and BM25 keyword extraction\n");
        output.push_str(&format!("- **Protocol:** MCP {PROTOCOL_VERSION}\n\n"));

        output.push_str("## Engine\n");
        output.push_str(&format!("- **Segmenter:** {}\n", engine.segmenter_name()));
        output.push_str(&format!("- **Stopwords:** {}\n\n", engine.stopword_count()));

        output.push_str("## Available Tools\n");
        for name in &self.tool_names {
            output.push_str(&format!("- {name}\n"));
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for GetServerInfoHandler {
    fn name(&self) -> &str {
        "get_server_info"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_server_info".to_string(),
            description: "Get version and engine information about the running segkit-mcp server. \
                         Returns server version, protocol version, segmenter and available tools."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        Ok(text_content(self.format_info()))
    }
}
