//! MCP-specific error types

use crate::core::error::SegkitError;
use crate::mcp::protocol::{
    JsonRpcError, COMPUTATION_FAILED, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST,
    PARSE_ERROR, SEGMENTATION_FAILED,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Tool error (code {0}): {1}")]
    ToolError(i32, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// Error kind reported in the JSON-RPC `data` field
    pub fn kind(&self) -> &'static str {
        match self {
            McpError::ParseError(_) => "ParseError",
            McpError::InvalidRequest(_) => "InvalidRequest",
            McpError::InvalidParams(_) => "InvalidInput",
            McpError::InternalError(_) => "InternalError",
            McpError::ToolError(SEGMENTATION_FAILED, _) => "SegmentationFailed",
            McpError::ToolError(COMPUTATION_FAILED, _) => "ComputationFailed",
            McpError::ToolError(..) => "ToolError",
            McpError::Io(_) => "IoError",
            McpError::Json(_) => "SerdeError",
        }
    }

    /// JSON-RPC error code and message
    pub fn code_and_message(&self) -> (i32, String) {
        match self {
            McpError::ParseError(msg) => (PARSE_ERROR, msg.clone()),
            McpError::InvalidRequest(msg) => (INVALID_REQUEST, msg.clone()),
            McpError::InvalidParams(msg) => (INVALID_PARAMS, msg.clone()),
            McpError::InternalError(msg) => (INTERNAL_ERROR, msg.clone()),
            McpError::ToolError(code, msg) => (*code, msg.clone()),
            McpError::Io(e) => (INTERNAL_ERROR, format!("I/O error: {e}")),
            McpError::Json(e) => (INTERNAL_ERROR, format!("JSON error: {e}")),
        }
    }

    pub fn to_json_rpc(&self) -> JsonRpcError {
        let (code, message) = self.code_and_message();
        JsonRpcError {
            code,
            message,
            data: Some(json!({ "kind": self.kind() })),
        }
    }
}

impl From<SegkitError> for McpError {
    fn from(err: SegkitError) -> Self {
        match err {
            SegkitError::InvalidInput(s) => McpError::InvalidParams(format!("Invalid input: {s}")),
            SegkitError::ConfigError(s) => {
                McpError::InvalidParams(format!("Configuration error: {s}"))
            }
            SegkitError::SegmentationFailed(s) => McpError::ToolError(
                SEGMENTATION_FAILED,
                format!("Segmentation failed: {s}"),
            ),
            SegkitError::ComputationFailed(s) => McpError::ToolError(
                COMPUTATION_FAILED,
                format!("Computation failed: {s}"),
            ),
            SegkitError::IoError(e) => McpError::InternalError(format!("I/O error: {e}")),
            SegkitError::SerdeError(e) => {
                McpError::InternalError(format!("Serialization error: {e}"))
            }
            SegkitError::TomlError(e) => {
                McpError::InternalError(format!("Configuration parse error: {e}"))
            }
        }
    }
}
