//! MCP tool implementations
//!
//! This module contains all MCP tool handlers that expose segkit's
//! segmentation and keyword extraction to MCP clients.

pub mod extract_keywords;
pub mod get_server_info;
pub mod handler;
pub mod helpers;
pub mod registry;
pub mod show_segkit_config;
pub mod tag;
pub mod tokenize;

pub use extract_keywords::ExtractKeywordsHandler;
pub use get_server_info::GetServerInfoHandler;
pub use handler::{json_content, text_content, McpToolHandler};
pub use registry::ToolRegistry;
pub use show_segkit_config::ShowSegkitConfigHandler;
pub use tag::TagHandler;
pub use tokenize::TokenizeHandler;
