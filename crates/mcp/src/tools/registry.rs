// MCP tool trait and registry

use crate::error::{ToolError, ToolResult};
use crate::protocol::{CallToolResult, ToolSchema};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with given arguments
    async fn execute(&self, arguments: serde_json::Value) -> ToolResult<CallToolResult>;
}

/// Tool registry for managing available tools.
///
/// Ordered by name so `tools/list` is stable.
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let schema = tool.schema();
        if self.tools.insert(schema.name.clone(), tool).is_some() {
            tracing::warn!(tool = %schema.name, "Replaced previously registered tool");
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// List all tool schemas
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|t| t.schema()).collect()
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Look up and run a tool
    pub async fn call(&self, name: &str, arguments: serde_json::Value) -> ToolResult<CallToolResult> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tool.execute(arguments).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: serde_json::Value, required: Vec<&str>) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str, default: Option<&str>) -> serde_json::Value {
    match default {
        Some(default) => serde_json::json!({
            "type": "string",
            "description": description,
            "default": default
        }),
        None => serde_json::json!({
            "type": "string",
            "description": description
        }),
    }
}

/// Tool description as rendered for clients: a JSON document naming
/// what the tool does, when to use it and its side effects.
pub fn rich_description(description: &str, use_when: &str, side_effects: Option<&str>) -> String {
    serde_json::json!({
        "description": description,
        "use_when": use_when,
        "side_effects": side_effects
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo(&'static str);

    #[async_trait::async_trait]
    impl Tool for Echo {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: self.0.to_string(),
                description: rich_description("Echo", "Testing", None),
                input_schema: json_schema_object(serde_json::json!({}), vec![]),
            }
        }

        async fn execute(&self, arguments: serde_json::Value) -> ToolResult<CallToolResult> {
            Ok(CallToolResult::text(arguments.to_string()))
        }
    }

    #[test]
    fn test_schemas_sorted_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(Echo("zeta")));
        registry.register(Arc::new(Echo("alpha")));
        registry.register(Arc::new(Echo("mid")));

        let names: Vec<_> = registry.list_schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
        assert!(registry.contains("mid"));
        assert_eq!(registry.len(), 3);
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let registry = ToolRegistry::new();
        let err = registry.call("missing", serde_json::Value::Null).await.unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(name) if name == "missing"));
    }

    #[test]
    fn test_rich_description_is_json() {
        let text = rich_description("Does things", "When needed", None);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["use_when"], "When needed");
        assert!(value["side_effects"].is_null());
    }

    #[test]
    fn test_string_schema_default() {
        let schema = json_schema_string("Platform", Some("youtube"));
        assert_eq!(schema["default"], "youtube");
        assert!(json_schema_string("Idea", None).get("default").is_none());
    }
}
