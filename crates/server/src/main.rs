use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod api;
mod config;
mod middleware;

use config::{Credentials, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "lifestyle-suite")]
#[command(about = "Lifestyle Suite - advice tools served over MCP streamable HTTP", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "lifestyle.toml")]
    config: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value = "8086")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Bearer token clients must present
    #[arg(long, env = "AUTH_TOKEN", hide_env_values = true)]
    auth_token: Option<String>,

    /// Owner phone number returned by the validate tool
    #[arg(long, env = "MY_NUMBER", hide_env_values = true)]
    my_number: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lifestyle=info,tower_http=debug".into()),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let args = Args::parse();

    tracing::info!("Starting Lifestyle Suite");

    // Load configuration
    let config = ServerConfig::load(&args.config)?;
    let credentials = Credentials::new(args.auth_token, args.my_number)?;

    // Start API server
    let addr = format!("{}:{}", args.host, args.port);
    tracing::info!("Starting API server on {}", addr);

    api::serve(&addr, config, credentials).await?;

    Ok(())
}
