//! Address Book Service - Main entry point
//!
//! Builds the store and service once, then serves them over HTTP or, with
//! `ADDRESS_BOOK_TRANSPORT=stdio`, as an MCP server on stdin/stdout.

use address_book::server::{run_http_server, run_mcp_server};
use address_book::{
    AddressBookMcpServer, Config, ContactService, ContactServiceImpl, InMemoryContactStore,
    Transport,
};
use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Logging goes to stderr so stdout stays free for MCP traffic
    let fallback = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let store = InMemoryContactStore::new();
    let service = Arc::new(ContactServiceImpl::new(Box::new(store))) as Arc<dyn ContactService>;

    info!(transport = ?config.transport, "Address book initialized");

    match config.transport {
        Transport::Http => run_http_server(service, config.bind_addr).await?,
        Transport::Stdio => {
            info!("Starting MCP server with stdio transport");
            run_mcp_server(AddressBookMcpServer::new(service)).await?;
        }
    }

    info!("Address book shutdown complete");
    Ok(())
}
