use anyhow::{ensure, Context, Result};
use lifestyle_mcp::{default_registry, McpServer};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    /// Name reported in `serverInfo`
    #[serde(default = "default_name")]
    pub name: String,

    /// Path of the MCP endpoint
    #[serde(default = "default_endpoint_path")]
    pub endpoint_path: String,

    /// Overrides the default `initialize` instructions
    #[serde(default)]
    pub instructions: Option<String>,
}

fn default_name() -> String {
    lifestyle_mcp::server::DEFAULT_SERVER_NAME.to_string()
}

fn default_endpoint_path() -> String {
    "/mcp".to_string()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            endpoint_path: default_endpoint_path(),
            instructions: None,
        }
    }
}

impl ServerConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        // Load config file if it exists, otherwise use defaults
        let config: Self = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .context("Failed to read configuration file")?;
            toml::from_str(&content).context("Failed to parse configuration file")?
        } else {
            tracing::info!("Configuration file not found, using defaults");
            Self::default()
        };

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let path = &self.server.endpoint_path;
        ensure!(
            path.starts_with('/'),
            "endpoint_path must start with '/', got '{}'",
            path
        );
        ensure!(path != "/api/health", "endpoint_path must not shadow /api/health");
        Ok(())
    }
}

/// Secrets supplied through the environment
#[derive(Clone)]
pub struct Credentials {
    pub auth_token: String,
    pub owner_number: String,
}

impl Credentials {
    pub fn new(auth_token: Option<String>, owner_number: Option<String>) -> Result<Self> {
        let auth_token = auth_token
            .filter(|t| !t.trim().is_empty())
            .context("AUTH_TOKEN is not set (use the AUTH_TOKEN environment variable or --auth-token)")?;
        let owner_number = owner_number
            .filter(|n| !n.trim().is_empty())
            .context("MY_NUMBER is not set (use the MY_NUMBER environment variable or --my-number)")?;

        Ok(Self {
            auth_token,
            owner_number,
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("auth_token", &"<redacted>")
            .field("owner_number", &self.owner_number)
            .finish()
    }
}

/// Application state shared across handlers
pub struct AppState {
    pub mcp: McpServer,
    pub auth_token: String,
    pub endpoint_path: String,
}

impl AppState {
    pub fn new(config: &ServerConfig, credentials: Credentials) -> Self {
        let registry = default_registry(credentials.owner_number);
        tracing::info!("Registered {} tools", registry.len());

        let mut mcp = McpServer::new(registry).with_name(config.server.name.clone());
        if let Some(instructions) = &config.server.instructions {
            mcp = mcp.with_instructions(Some(instructions.clone()));
        }

        Self {
            mcp,
            auth_token: credentials.auth_token,
            endpoint_path: config.server.endpoint_path.clone(),
        }
    }
}
