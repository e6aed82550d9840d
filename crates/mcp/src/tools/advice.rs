// Exposes any advisor as an MCP tool

use crate::error::ToolResult;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, rich_description, Tool};
use lifestyle_core::{AdviceContext, Advisor};
use std::marker::PhantomData;

/// MCP adapter for an [`Advisor`].
///
/// Each call renders the bundle as Markdown text and also returns it as
/// `structuredContent`.
pub struct AdviceTool<A> {
    pinned: Option<AdviceContext>,
    _advisor: PhantomData<fn() -> A>,
}

impl<A: Advisor> AdviceTool<A> {
    /// Tool that uses the current date on every call
    pub fn new() -> Self {
        Self {
            pinned: None,
            _advisor: PhantomData,
        }
    }

    /// Tool that always generates against the given context
    pub fn with_context(ctx: AdviceContext) -> Self {
        Self {
            pinned: Some(ctx),
            _advisor: PhantomData,
        }
    }

    fn context(&self) -> AdviceContext {
        self.pinned.unwrap_or_else(AdviceContext::now)
    }
}

impl<A: Advisor> Default for AdviceTool<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl<A: Advisor> Tool for AdviceTool<A> {
    fn schema(&self) -> ToolSchema {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in A::parameters() {
            properties.insert(
                param.name.to_string(),
                json_schema_string(param.description, param.default),
            );
            if param.is_required() {
                required.push(param.name);
            }
        }

        ToolSchema {
            name: A::NAME.to_string(),
            description: rich_description(A::DESCRIPTION, A::USE_WHEN, None),
            input_schema: json_schema_object(serde_json::Value::Object(properties), required),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> ToolResult<CallToolResult> {
        tracing::info!(tool = A::NAME, "Generating advice");

        let bundle = A::run(arguments, &self.context())?;
        let structured = serde_json::to_value(&bundle)?;

        Ok(CallToolResult::text(bundle.to_markdown()).with_structured(structured))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;
    use chrono::NaiveDate;
    use lifestyle_core::tools::{CryptoIntelligence, FashionPredictor, StartupBuilder};
    use serde_json::json;

    fn pinned<A: Advisor>() -> AdviceTool<A> {
        AdviceTool::with_context(AdviceContext::on(NaiveDate::from_ymd_opt(2026, 5, 20).unwrap()))
    }

    #[test]
    fn test_schema_lists_required_and_defaults() {
        let schema = pinned::<FashionPredictor>().schema();
        assert_eq!(schema.name, "fashion_predictor");

        let input = &schema.input_schema;
        assert_eq!(input["type"], "object");
        assert_eq!(input["required"], json!(["style_preference"]));
        assert_eq!(input["properties"]["occasion"]["default"], "casual");
        assert_eq!(input["properties"]["season"]["default"], "summer");
        assert!(input["properties"]["style_preference"].get("default").is_none());

        let description: serde_json::Value = serde_json::from_str(&schema.description).unwrap();
        assert_eq!(
            description["description"],
            "Predict fashion trends and suggest style recommendations"
        );
    }

    #[tokio::test]
    async fn test_execute_returns_text_and_structured() {
        let result = pinned::<FashionPredictor>()
            .execute(json!({
                "style_preference": "streetwear",
                "occasion": "casual",
                "season": "winter"
            }))
            .await
            .unwrap();

        assert!(!result.is_error);
        let text = result.first_text().unwrap();
        assert!(text.starts_with("# "));
        assert!(text.contains("May 20, 2026"));

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["tool"], "fashion_predictor");
        assert!(structured["sections"].as_array().unwrap().len() > 3);
    }

    #[tokio::test]
    async fn test_missing_required_argument() {
        let err = pinned::<StartupBuilder>().execute(json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert_eq!(err.code(), -32602);
        assert!(err.to_string().contains("business_idea"));
    }

    #[tokio::test]
    async fn test_output_is_deterministic() {
        let tool = pinned::<CryptoIntelligence>();
        let args = json!({"crypto_name": "Dogecoin", "analysis_type": "prediction"});
        let first = tool.execute(args.clone()).await.unwrap();
        let second = tool.execute(args).await.unwrap();
        assert_eq!(first.first_text(), second.first_text());
    }
}
