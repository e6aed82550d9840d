// MCP (Model Context Protocol) server for the Lifestyle Suite advisors

pub mod codec;
pub mod error;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::{ToolError, ToolResult};
pub use server::McpServer;
pub use tools::{default_registry, AdviceTool, Tool, ToolRegistry, ValidateTool};
