//! MCP server message processing tests
//!
//! Drives `McpServer::process_message` with raw JSON lines, the same
//! path stdin input takes.

#[cfg(test)]
mod tests {
    use crate::common::create_test_services;
    use serde_json::{json, Value};
    use segkit::mcp::error::McpError;
    use segkit::mcp::protocol::PARSE_ERROR;
    use segkit::mcp::McpServer;
    use std::sync::Arc;

    fn create_test_server() -> McpServer {
        McpServer::new(Arc::new(create_test_services()))
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let server = create_test_server();

        let err = server.process_message("{not json").await.unwrap_err();
        assert!(matches!(err, McpError::ParseError(_)));
        assert_eq!(err.to_json_rpc().code, PARSE_ERROR);
    }

    #[tokio::test]
    async fn test_full_session() {
        let server = create_test_server();

        let init = server
            .process_message(
                r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"t","version":"0"}}}"#,
            )
            .await
            .unwrap();
        assert!(init.result.is_some());

        let ack = server
            .process_message(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .await
            .unwrap();
        assert!(segkit::mcp::transport::is_notification_ack(&ack));

        let call = server
            .process_message(
                r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"tokenize","arguments":{"text":["猫 鱼",""]}}}"#,
            )
            .await
            .unwrap();
        assert_eq!(call.id, Some(json!(2)));

        let text = call.result.unwrap()["content"][0]["text"]
            .as_str()
            .unwrap()
            .to_string();
        let payload: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(payload, json!({"0": ["猫", "鱼"], "1": []}));
    }

    #[tokio::test]
    async fn test_notification_for_unknown_method_is_silent() {
        let server = create_test_server();

        let response = server
            .process_message(r#"{"jsonrpc":"2.0","method":"notifications/progress"}"#)
            .await
            .unwrap();
        assert!(segkit::mcp::transport::is_notification_ack(&response));
    }

    #[tokio::test]
    async fn test_bad_initialize_params_answered_under_request_id() {
        let server = create_test_server();

        let response = server
            .process_message(
                r#"{"jsonrpc":"2.0","id":"init-1","method":"initialize","params":{"clientInfo":3}}"#,
            )
            .await
            .unwrap();
        assert_eq!(response.id, Some(json!("init-1")));
        assert!(response.error.is_some());
    }
}
