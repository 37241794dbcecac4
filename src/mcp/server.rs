//! MCP Server Implementation
//!
//! This module contains the BinanceServer struct which implements the MCP ServerHandler trait.

use crate::binance::BinanceApi;
use rmcp::handler::server::router::tool::ToolRouter;
use std::sync::Arc;

/// Binance assistant MCP server
///
/// Holds the API client behind the [`BinanceApi`] seam so tools can run
/// against an in-memory double in tests.
#[derive(Clone)]
pub struct BinanceServer {
    pub api: Arc<dyn BinanceApi>,

    /// Tool router for MCP tool routing
    pub tool_router: ToolRouter<Self>,
}

impl BinanceServer {
    pub fn new(api: Arc<dyn BinanceApi>) -> Self {
        Self {
            api,
            tool_router: Self::tool_router(),
        }
    }

    pub fn api(&self) -> &dyn BinanceApi {
        self.api.as_ref()
    }
}
