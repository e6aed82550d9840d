// Standalone MCP server binary (stdio transport)

use anyhow::Result;
use lifestyle_mcp::server::McpServer;
use lifestyle_mcp::tools::default_registry;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries protocol messages only
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Lifestyle Suite MCP server starting...");

    let owner_number = std::env::var("MY_NUMBER").unwrap_or_else(|_| {
        tracing::warn!("MY_NUMBER is not set, validate will return an empty string");
        String::new()
    });

    let registry = default_registry(owner_number);
    tracing::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry);
    server.serve_stdio().await?;

    Ok(())
}
