use std::time::Duration;
use thiserror::Error;

/// Errors raised while talking to Binance or decoding its responses
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("API keys not configured")]
    NotConfigured,

    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timeout after {0}s")]
    Timeout(u64),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Signing error: {0}")]
    Signing(String),
}

impl ApiError {
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::NotConfigured => "not_configured",
            ApiError::UnsupportedMethod(_) => "unsupported_method",
            ApiError::Http { .. } => "http_error",
            ApiError::Connection(_) => "connection_error",
            ApiError::Timeout(_) => "timeout",
            ApiError::Parse(_) => "parse_error",
            ApiError::Signing(_) => "signing_error",
        }
    }

    /// Configuration errors are detected before any network call
    pub fn is_configuration(&self) -> bool {
        matches!(self, ApiError::NotConfigured)
    }

    /// Maps a transport failure; `timeout` is the limit the client was built with
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(timeout.as_secs())
        } else if err.is_connect() {
            ApiError::Connection(format!("Failed to connect to Binance API: {}", err))
        } else if err.is_decode() {
            ApiError::Parse(format!("Invalid response body: {}", err))
        } else if let Some(status) = err.status() {
            ApiError::Http {
                status: status.as_u16(),
                body: String::new(),
            }
        } else {
            ApiError::Connection(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(format!("JSON parsing failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
