//! Stdio Transport for MCP Server
//!
//! Provides standard I/O transport for local MCP connections (e.g., Claude Desktop).

use crate::mcp::BinanceServer;
use rmcp::ServiceExt;

/// Runs the MCP server with stdio transport
///
/// Messages are read from stdin and responses are written to stdout.
/// Logging goes to stderr so it never interferes with the protocol stream.
pub async fn run_stdio_server(server: BinanceServer) -> anyhow::Result<()> {
    tracing::info!("Starting Binance MCP server in stdio mode");

    let service = server.serve(rmcp::transport::stdio()).await?;

    tracing::info!("MCP server ready on stdio");

    service.waiting().await?;

    tracing::info!("MCP server shutdown complete");

    Ok(())
}
