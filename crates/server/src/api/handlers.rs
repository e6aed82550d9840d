use crate::config::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use lifestyle_mcp::protocol::{JsonRpcError, JsonRpcReply, JsonRpcResponse};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

pub const MCP_SESSION_ID: &str = "mcp-session-id";

/// Streamable HTTP endpoint: one JSON-RPC message or batch per POST
pub async fn mcp_endpoint(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let message: Value = match serde_json::from_slice(&body) {
        Ok(message) => message,
        Err(e) => {
            tracing::debug!(error = %e, "Malformed JSON-RPC body");
            let reply = JsonRpcReply::Single(JsonRpcResponse::error(
                Value::Null,
                JsonRpcError::parse_error(e.to_string()),
            ));
            return Json(reply).into_response();
        }
    };

    let opens_session = is_initialize(&message);

    match state.mcp.handle_message(message).await {
        Some(reply) => {
            let succeeded = matches!(&reply, JsonRpcReply::Single(r) if r.error.is_none());
            let mut response = Json(reply).into_response();

            if opens_session && succeeded {
                let session_id = Uuid::new_v4().to_string();
                if let Ok(value) = HeaderValue::from_str(&session_id) {
                    tracing::debug!(session_id = %session_id, "Issued MCP session id");
                    response.headers_mut().insert(MCP_SESSION_ID, value);
                }
            }

            response
        }
        None => StatusCode::ACCEPTED.into_response(),
    }
}

fn is_initialize(message: &Value) -> bool {
    message.get("method").and_then(Value::as_str) == Some("initialize")
}
