// Error types for the MCP tool layer

use crate::protocol::JsonRpcError;
use lifestyle_core::AdviceError;
use thiserror::Error;

pub type ToolResult<T> = Result<T, ToolError>;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error(transparent)]
    InvalidArguments(#[from] AdviceError),

    #[error("Failed to serialize tool output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// JSON-RPC error code reported to the client
    pub fn code(&self) -> i32 {
        match self {
            Self::UnknownTool(_) | Self::InvalidArguments(_) => JsonRpcError::INVALID_PARAMS,
            Self::Serialization(_) => JsonRpcError::INTERNAL_ERROR,
        }
    }
}

impl From<ToolError> for JsonRpcError {
    fn from(err: ToolError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tool_is_invalid_params() {
        let err: JsonRpcError = ToolError::UnknownTool("nope".into()).into();
        assert_eq!(err.code, -32602);
        assert_eq!(err.message, "Unknown tool: nope");
    }
}
