//! MCP transport layer
//!
//! - Stdio: standard I/O for local MCP clients (default)
//! - SSE: Server-Sent Events for remote connections (feature `sse`)

pub mod stdio;

#[cfg(feature = "sse")]
pub mod sse;

use std::fmt;
use std::str::FromStr;

/// Default port for SSE mode
pub const DEFAULT_SSE_PORT: u16 = 8000;

/// Transport mode selection for the MCP server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransportMode {
    /// Standard I/O transport (local MCP connections)
    #[default]
    Stdio,

    /// Server-Sent Events transport (remote MCP connections)
    Sse,
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stdio" => Ok(Self::Stdio),
            "sse" => Ok(Self::Sse),
            other => Err(format!("Invalid mode: {}", other)),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdio => write!(f, "stdio"),
            Self::Sse => write!(f, "sse"),
        }
    }
}
