//! Transports for the address book.
//!
//! Two front ends share one `ContactService`: JSON over HTTP (`http`) and MCP
//! tools over stdio (`handlers`).

pub mod handlers;
pub mod http;

pub use handlers::AddressBookMcpServer;
pub use http::{router, run_http_server};

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the MCP server with stdio transport.
///
/// This function starts the MCP server and runs it until completion.
/// It communicates via stdin/stdout using the MCP protocol.
pub async fn run_mcp_server(server: AddressBookMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
