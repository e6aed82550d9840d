// MCP server: JSON-RPC dispatch shared by the stdio and HTTP transports

use crate::codec::{Line, LineDecoder};
use crate::protocol::{
    negotiate_version, CallToolParams, InitializeParams, InitializeResult, JsonRpcError,
    JsonRpcReply, JsonRpcRequest, JsonRpcResponse, ListToolsResult, ServerCapabilities,
    ServerInfo, ToolsCapability,
};
use crate::tools::ToolRegistry;
use anyhow::{Context, Result};
use futures::{SinkExt, StreamExt};
use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec};

pub const DEFAULT_SERVER_NAME: &str = "lifestyle-suite";

pub const DEFAULT_INSTRUCTIONS: &str = "Lifestyle Suite offers ten advice tools covering \
crypto, startups, content monetization, fashion, food, NFTs, social media, influencer \
marketing, dating and travel. Each tool returns templated guidance as Markdown plus a \
structured copy of the same content.";

/// Longest accepted stdio line by default
pub const DEFAULT_MAX_LINE_LENGTH: usize = 1024 * 1024;

type Outcome = std::result::Result<Value, JsonRpcError>;

/// Stateless MCP dispatcher
pub struct McpServer {
    registry: ToolRegistry,
    info: ServerInfo,
    instructions: Option<String>,
    max_line_length: usize,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            info: ServerInfo {
                name: DEFAULT_SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(DEFAULT_INSTRUCTIONS.to_string()),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.info.name = name.into();
        self
    }

    pub fn with_instructions(mut self, instructions: Option<String>) -> Self {
        self.instructions = instructions;
        self
    }

    /// Lines longer than this are answered with a parse error and skipped
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Handle one request. Notifications yield `None`.
    pub async fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id else {
            self.handle_notification(&request.method);
            return None;
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_request("jsonrpc must be \"2.0\""),
            ));
        }

        tracing::debug!(method = %request.method, "Handling request");

        let outcome = match request.method.as_str() {
            "initialize" => self.initialize(request.params),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => self.list_tools(),
            "tools/call" => self.call_tool(request.params).await,
            other => Err(JsonRpcError::method_not_found(other)),
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => {
                tracing::debug!(code = error.code, message = %error.message, "Request failed");
                JsonRpcResponse::error(id, error)
            }
        })
    }

    /// Handle a decoded JSON message: a single request or a batch
    pub async fn handle_message(&self, message: Value) -> Option<JsonRpcReply> {
        match message {
            Value::Array(batch) if batch.is_empty() => Some(JsonRpcReply::Single(
                JsonRpcResponse::error(Value::Null, JsonRpcError::invalid_request("empty batch")),
            )),
            Value::Array(batch) => {
                let mut responses = Vec::with_capacity(batch.len());
                for item in batch {
                    if let Some(response) = self.handle_value(item).await {
                        responses.push(response);
                    }
                }
                if responses.is_empty() {
                    None
                } else {
                    Some(JsonRpcReply::Batch(responses))
                }
            }
            single => self.handle_value(single).await.map(JsonRpcReply::Single),
        }
    }

    /// Handle raw message bytes, reporting malformed JSON as a parse error
    pub async fn handle_raw(&self, raw: &[u8]) -> Option<JsonRpcReply> {
        match serde_json::from_slice::<Value>(raw) {
            Ok(message) => self.handle_message(message).await,
            Err(e) => {
                tracing::debug!(error = %e, "Malformed JSON-RPC message");
                Some(JsonRpcReply::Single(JsonRpcResponse::error(
                    Value::Null,
                    JsonRpcError::parse_error(e.to_string()),
                )))
            }
        }
    }

    /// Serve newline-delimited JSON-RPC until the reader closes
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = FramedRead::new(reader, LineDecoder::new(self.max_line_length));
        let mut sink = FramedWrite::new(writer, LinesCodec::new());

        while let Some(line) = lines.next().await {
            let reply = match line.context("Failed to read JSON-RPC message")? {
                Line::Text(text) if text.trim().is_empty() => continue,
                Line::Text(text) => self.handle_raw(text.as_bytes()).await,
                Line::Malformed(reason) => {
                    tracing::debug!(reason = %reason, "Undecodable input line");
                    Some(JsonRpcReply::Single(JsonRpcResponse::error(
                        Value::Null,
                        JsonRpcError::parse_error(reason),
                    )))
                }
            };

            if let Some(reply) = reply {
                let encoded =
                    serde_json::to_string(&reply).context("Failed to encode JSON-RPC reply")?;
                sink.send(encoded)
                    .await
                    .context("Failed to write JSON-RPC reply")?;
            }
        }

        tracing::info!("Input closed, MCP server stopping");
        Ok(())
    }

    /// Serve over the process's stdin and stdout
    pub async fn serve_stdio(&self) -> Result<()> {
        tracing::info!(tools = self.registry.len(), "MCP server listening on stdio");
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    async fn handle_value(&self, message: Value) -> Option<JsonRpcResponse> {
        let id = message.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<JsonRpcRequest>(message) {
            Ok(request) => self.handle(request).await,
            Err(e) => Some(JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_request(e.to_string()),
            )),
        }
    }

    fn handle_notification(&self, method: &str) {
        match method {
            "notifications/initialized" => tracing::debug!("Client initialized"),
            "notifications/cancelled" => tracing::debug!("Client cancelled a request"),
            other => tracing::debug!(method = other, "Ignoring notification"),
        }
    }

    fn initialize(&self, params: Option<Value>) -> Outcome {
        let params = params.and_then(|p| serde_json::from_value::<InitializeParams>(p).ok());
        let requested = params.as_ref().map(|p| p.protocol_version.as_str());
        let version = negotiate_version(requested);

        if let Some(client) = params.as_ref().and_then(|p| p.client_info.as_ref()) {
            tracing::info!(client = %client.name, client_version = %client.version, protocol = version, "Client connected");
        }

        to_result(InitializeResult {
            protocol_version: version.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: self.info.clone(),
            instructions: self.instructions.clone(),
        })
    }

    fn list_tools(&self) -> Outcome {
        to_result(ListToolsResult {
            tools: self.registry.list_schemas(),
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Outcome {
        let params = params.ok_or_else(|| JsonRpcError::invalid_params("Missing params for tools/call"))?;
        let params: CallToolParams = serde_json::from_value(params)
            .map_err(|e| JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e)))?;

        let result = self.registry.call(&params.name, params.arguments).await?;
        to_result(result)
    }
}

fn to_result<T: Serialize>(value: T) -> Outcome {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::default_registry;
    use serde_json::json;

    fn server() -> McpServer {
        McpServer::new(default_registry("15550001111"))
    }

    fn single(reply: Option<JsonRpcReply>) -> JsonRpcResponse {
        match reply {
            Some(JsonRpcReply::Single(response)) => response,
            other => panic!("expected single response, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_initialize_negotiates_version() {
        let server = server();
        let response = server
            .handle(JsonRpcRequest::new(
                1,
                "initialize",
                Some(json!({
                    "protocolVersion": "2025-03-26",
                    "capabilities": {},
                    "clientInfo": {"name": "test", "version": "1.0"}
                })),
            ))
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2025-03-26");
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
        assert_eq!(result["serverInfo"]["name"], DEFAULT_SERVER_NAME);
        assert!(result["instructions"].is_string());
    }

    #[tokio::test]
    async fn test_tools_list_returns_eleven_sorted() {
        let response = server()
            .handle(JsonRpcRequest::new(2, "tools/list", None))
            .await
            .unwrap();

        let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
        assert_eq!(tools.len(), 11);
        let names: Vec<_> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[tokio::test]
    async fn test_notification_gets_no_response() {
        let server = server();
        assert!(server
            .handle(JsonRpcRequest::notification("notifications/initialized"))
            .await
            .is_none());
        assert!(server
            .handle_raw(br#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_unknown_tool_is_invalid_params() {
        let response = server()
            .handle(JsonRpcRequest::new(
                3,
                "tools/call",
                Some(json!({"name": "horoscope", "arguments": {}})),
            ))
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_missing_required_argument_is_invalid_params() {
        let response = server()
            .handle(JsonRpcRequest::new(
                4,
                "tools/call",
                Some(json!({"name": "nft_creator", "arguments": {"theme": "space"}})),
            ))
            .await
            .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert!(error.message.contains("art_style"));
    }

    #[tokio::test]
    async fn test_call_tool_without_arguments() {
        let response = server()
            .handle(JsonRpcRequest::new(5, "tools/call", Some(json!({"name": "validate"}))))
            .await
            .unwrap();
        let result = response.result.unwrap();
        assert_eq!(result["content"][0]["text"], "15550001111");
        assert_eq!(result["isError"], false);
    }

    #[tokio::test]
    async fn test_unknown_method_and_ping() {
        let server = server();
        let response = server
            .handle(JsonRpcRequest::new(6, "resources/list", None))
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, -32601);

        let response = server.handle(JsonRpcRequest::new(7, "ping", None)).await.unwrap();
        assert_eq!(response.result, Some(json!({})));
    }

    #[tokio::test]
    async fn test_parse_and_invalid_request_errors() {
        let server = server();
        let response = single(server.handle_raw(b"{not json").await);
        assert_eq!(response.error.unwrap().code, -32700);
        assert_eq!(response.id, Value::Null);

        let response = single(server.handle_raw(br#"{"id": 9, "params": {}}"#).await);
        assert_eq!(response.error.unwrap().code, -32600);
        assert_eq!(response.id, json!(9));

        let response = single(server.handle_raw(b"42").await);
        assert_eq!(response.error.unwrap().code, -32600);
    }

    #[tokio::test]
    async fn test_batch_preserves_order_and_skips_notifications() {
        let reply = server()
            .handle_message(json!([
                {"jsonrpc": "2.0", "id": "a", "method": "ping"},
                {"jsonrpc": "2.0", "method": "notifications/initialized"},
                {"jsonrpc": "2.0", "id": "b", "method": "tools/list"}
            ]))
            .await;

        match reply {
            Some(JsonRpcReply::Batch(responses)) => {
                assert_eq!(responses.len(), 2);
                assert_eq!(responses[0].id, json!("a"));
                assert_eq!(responses[1].id, json!("b"));
            }
            other => panic!("expected batch, got {:?}", other),
        }

        let reply = server()
            .handle_message(json!([{"jsonrpc": "2.0", "method": "notifications/initialized"}]))
            .await;
        assert!(reply.is_none());
    }

    #[tokio::test]
    async fn test_serve_lines() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"travel_curator","arguments":{"destination_type":"beach"}}}"#,
            "\n"
        );
        let mut output = Vec::new();

        server().serve(input.as_bytes(), &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["id"], 1);
        let second: Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["result"]["structuredContent"]["tool"], "travel_curator");
    }

    #[tokio::test]
    async fn test_serve_survives_bad_lines() {
        let ping = |id: u32| format!(r#"{{"jsonrpc":"2.0","id":{},"method":"ping"}}"#, id).into_bytes();
        let mut input = Vec::new();
        input.extend(ping(1));
        input.extend_from_slice(b"\n\xff\xfe garbage\n");
        input.extend(vec![b'x'; 200]);
        input.push(b'\n');
        input.extend(ping(2));
        input.push(b'\n');
        let mut output = Vec::new();

        server()
            .with_max_line_length(128)
            .serve(input.as_slice(), &mut output)
            .await
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        let replies: Vec<Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
        assert_eq!(replies.len(), 4);
        assert_eq!(replies[0]["id"], 1);
        assert_eq!(replies[1]["error"]["code"], -32700);
        assert_eq!(replies[2]["error"]["code"], -32700);
        assert_eq!(replies[3]["id"], 2);
        assert_eq!(replies[3]["result"], json!({}));
    }
}
