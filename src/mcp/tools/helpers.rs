//! Helper functions for MCP tools

use crate::core::error::SegkitError;
use crate::core::types::TextInput;
use crate::mcp::error::McpError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserialize tool arguments, mapping failures to InvalidParams
pub fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, McpError> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))
}

/// Convert the loosely-typed `text` argument
pub fn parse_text(value: Value) -> Result<TextInput, McpError> {
    TextInput::from_value(value).map_err(McpError::from)
}

/// Run a CPU-bound engine call off the async runtime.
///
/// A panic inside the call is reported as a computation failure for this
/// request only; the server keeps serving.
pub async fn run_blocking<T, F>(task: F) -> Result<T, McpError>
where
    T: Send + 'static,
    F: FnOnce() -> crate::core::error::Result<T> + Send + 'static,
{
    match tokio::task::spawn_blocking(task).await {
        Ok(result) => result.map_err(McpError::from),
        Err(join_error) => {
            tracing::error!("Engine task failed: {}", join_error);
            let message = if join_error.is_panic() {
                "segmentation engine panicked".to_string()
            } else {
                join_error.to_string()
            };
            Err(SegkitError::ComputationFailed(message).into())
        }
    }
}
