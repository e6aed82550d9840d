// Ownership check used by the hosting platform

use crate::error::ToolResult;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, rich_description, Tool};

/// Returns the configured owner phone number.
///
/// Takes no arguments; anything passed is ignored.
pub struct ValidateTool {
    owner_number: String,
}

impl ValidateTool {
    pub const NAME: &'static str = "validate";

    pub fn new(owner_number: impl Into<String>) -> Self {
        Self {
            owner_number: owner_number.into(),
        }
    }
}

#[async_trait::async_trait]
impl Tool for ValidateTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: Self::NAME.to_string(),
            description: rich_description(
                "Validate this server by returning the owner's phone number",
                "When the hosting platform verifies that the bearer token works",
                None,
            ),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> ToolResult<CallToolResult> {
        tracing::debug!("Validation requested");
        Ok(CallToolResult::text(self.owner_number.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_owner_number() {
        let tool = ValidateTool::new("15551234567");
        let result = tool.execute(serde_json::Value::Null).await.unwrap();
        assert_eq!(result.first_text(), Some("15551234567"));
        assert!(result.structured_content.is_none());
    }

    #[test]
    fn test_schema_has_no_parameters() {
        let schema = ValidateTool::new("").schema();
        assert_eq!(schema.name, "validate");
        assert_eq!(schema.input_schema["required"], serde_json::json!([]));
    }
}
