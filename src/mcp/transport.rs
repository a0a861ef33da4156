//! Stdio transport for MCP protocol
//!
//! One JSON-RPC message per line on stdout. Logs go to stderr.

use crate::mcp::error::McpError;
use crate::mcp::protocol::JsonRpcResponse;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;

pub struct StdioTransport {
    stdout: BufWriter<tokio::io::Stdout>,
}

impl StdioTransport {
    pub fn new() -> Self {
        Self {
            stdout: BufWriter::new(tokio::io::stdout()),
        }
    }

    /// Send JSON-RPC response to stdout
    pub async fn send_response(&mut self, response: JsonRpcResponse) -> Result<(), McpError> {
        if is_notification_ack(&response) {
            return Ok(());
        }

        let json = serde_json::to_string(&response)?;
        debug!("Sending: {}", json);

        self.stdout.write_all(json.as_bytes()).await?;
        self.stdout.write_all(b"\n").await?;
        self.stdout.flush().await?;

        Ok(())
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Notifications produce an empty response that must not be written
pub fn is_notification_ack(response: &JsonRpcResponse) -> bool {
    response.id.is_none() && response.result.is_none() && response.error.is_none()
}
