// Library exports for binance-assistant

pub mod binance; // Binance REST client and response types
pub mod config; // Credentials and endpoint selection
pub mod error;
pub mod mcp; // MCP server implementation
pub mod report; // Markdown formatting
pub mod tools; // Tool implementations
pub mod transport; // stdio and SSE transports
