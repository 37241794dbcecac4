//! SSE (Server-Sent Events) transport for MCP
//!
//! Uses rmcp's built-in SSE server for remote connections.

use crate::mcp::BinanceServer;
use std::net::SocketAddr;

pub use rmcp::transport::sse_server::{SseServer, SseServerConfig};
pub use tokio_util::sync::CancellationToken;

pub const SSE_PATH: &str = "/sse";
pub const POST_PATH: &str = "/message";

/// Serves `server` over SSE on `0.0.0.0:port` until Ctrl+C
pub async fn run_sse_server(server: BinanceServer, port: u16) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;
    tracing::info!("Starting SSE server on {}", addr);

    let config = SseServerConfig {
        bind: addr,
        sse_path: SSE_PATH.to_string(),
        post_path: POST_PATH.to_string(),
        ct: CancellationToken::new(),
        sse_keep_alive: None,
    };

    let sse_server = SseServer::serve_with_config(config).await?;
    tracing::info!("SSE server ready on {}", addr);
    tracing::info!("  SSE endpoint: http://{}{}", addr, SSE_PATH);
    tracing::info!("  POST endpoint: http://{}{}", addr, POST_PATH);

    let shutdown_ct = sse_server.with_service(move || server.clone());

    tokio::signal::ctrl_c().await?;
    tracing::info!("Received shutdown signal (Ctrl+C)");
    shutdown_ct.cancel();

    Ok(())
}
