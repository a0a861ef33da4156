//! MCP protocol method handlers

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::*;
use crate::mcp::tools::{
    ExtractKeywordsHandler, GetServerInfoHandler, ShowSegkitConfigHandler, TagHandler,
    TokenizeHandler, ToolRegistry,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

pub struct ProtocolHandlers {
    initialized: AtomicBool,
    tool_registry: ToolRegistry,
}

impl ProtocolHandlers {
    pub fn new(services: Arc<Services>) -> Self {
        let mut registry = ToolRegistry::new();

        registry.register(Arc::new(TokenizeHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(TagHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(ExtractKeywordsHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(ShowSegkitConfigHandler::new(Arc::clone(
            &services.config,
        ))));

        // Server info lists every other tool, so it is registered last
        let tool_names = registry.names();
        registry.register(Arc::new(GetServerInfoHandler::new(
            Arc::clone(&services),
            tool_names,
        )));

        Self {
            initialized: AtomicBool::new(false),
            tool_registry: registry,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    /// Route a request to its method handler
    ///
    /// Failures are answered under the request's id. Messages without an
    /// id are notifications and never get a reply.
    pub async fn dispatch(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        let id = request.id.clone();
        let method = request.method.clone();

        let result = match method.as_str() {
            "initialize" => self.handle_initialize(request).await,
            "initialized" | "notifications/initialized" => self.handle_initialized(request).await,
            "tools/list" => self.handle_tools_list(request).await,
            "tools/call" => self.handle_tools_call(request).await,
            "ping" => self.handle_ping(request).await,
            _ => Ok(self.create_error_response(
                id.clone(),
                METHOD_NOT_FOUND,
                format!("Unknown method: {method}"),
                None,
            )),
        };

        if id.is_none() {
            if let Err(e) = &result {
                debug!("Notification {} failed: {}", method, e);
            }
            return Ok(JsonRpcResponse::none());
        }

        Ok(result.unwrap_or_else(|e| JsonRpcResponse::error(id, e.to_json_rpc())))
    }

    /// Handle initialize request
    pub async fn handle_initialize(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params: InitializeParams = match request.params {
            Some(value) => match serde_json::from_value(value) {
                Ok(params) => params,
                Err(e) => {
                    return Ok(self.create_error_response(
                        request.id,
                        INVALID_PARAMS,
                        format!("Invalid initialize params: {e}"),
                        Some("InvalidInput"),
                    ));
                }
            },
            None => InitializeParams::default(),
        };

        match &params.client_info {
            Some(client) => info!("Client initialized: {}", client.name),
            None => info!("Client initialized"),
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: "segkit-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(
            request.id,
            serde_json::to_value(result)?,
        ))
    }

    /// Handle initialized notification
    ///
    /// Sent with an id it is a request and gets an empty result.
    pub async fn handle_initialized(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        self.initialized.store(true, Ordering::SeqCst);
        info!("Server initialized");

        Ok(match request.id {
            Some(id) => JsonRpcResponse::success(Some(id), json!({})),
            None => JsonRpcResponse::none(),
        })
    }

    /// Handle tools/list request
    pub async fn handle_tools_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let tools = self.tool_registry.list();

        Ok(JsonRpcResponse::success(
            request.id,
            json!({ "tools": tools }),
        ))
    }

    /// Handle tools/call request
    pub async fn handle_tools_call(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params_value = match request.params.clone() {
            Some(v) => v,
            None => {
                return Ok(self.create_error_response(
                    request.id,
                    INVALID_PARAMS,
                    "Missing params".to_string(),
                    Some("InvalidInput"),
                ));
            }
        };

        let params: ToolCallParams = match serde_json::from_value(params_value) {
            Ok(p) => p,
            Err(e) => {
                return Ok(self.create_error_response(
                    request.id,
                    INVALID_PARAMS,
                    format!("Invalid params: {e}"),
                    Some("InvalidInput"),
                ));
            }
        };

        let handler = match self.tool_registry.get(&params.name) {
            Some(h) => h,
            None => {
                return Ok(self.create_error_response(
                    request.id,
                    INVALID_REQUEST,
                    format!("Tool not found: {}", params.name),
                    Some("InvalidRequest"),
                ));
            }
        };

        debug!("Calling tool {}", params.name);

        match handler.execute(params.arguments).await {
            Ok(result) => Ok(JsonRpcResponse::success(
                request.id,
                serde_json::to_value(result)?,
            )),
            Err(e) => {
                info!("Tool {} failed: {}", params.name, e);
                Ok(JsonRpcResponse::error(request.id, e.to_json_rpc()))
            }
        }
    }

    fn create_error_response(
        &self,
        id: Option<Value>,
        code: i32,
        message: String,
        kind: Option<&str>,
    ) -> JsonRpcResponse {
        JsonRpcResponse::error(
            id,
            JsonRpcError {
                code,
                message,
                data: kind.map(|kind| json!({ "kind": kind })),
            },
        )
    }

    /// Handle ping request
    pub async fn handle_ping(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        Ok(JsonRpcResponse::success(request.id, json!({})))
    }
}
