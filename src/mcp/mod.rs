//! Model Context Protocol (MCP) server for the Binance assistant
//!
//! Exposes the Markdown tools in [`crate::tools`] through rmcp 0.8.1
//! procedural-macro routing.

pub mod handler;
pub mod server;
pub mod types;

pub use server::BinanceServer;
