//! Binance Endpoint Configuration
//!
//! Selects the REST base URL and carries the credentials used by every tool.

use super::credentials::Credentials;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Fixed per-request timeout
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

pub const PRODUCTION_BASE_URL: &str = "https://api.binance.com";
pub const TESTNET_BASE_URL: &str = "https://testnet.binance.vision";
pub const ANNOUNCEMENT_URL: &str =
    "https://www.binance.com/bapi/composite/v1/public/market/notice/get";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown BINANCE_ENVIRONMENT '{0}' (expected 'production' or 'testnet')")]
    UnknownEnvironment(String),

    #[error("Invalid URL in {name}: {value}")]
    InvalidUrl { name: &'static str, value: String },
}

/// Which Binance network to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Testnet,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_BASE_URL,
            Environment::Testnet => TESTNET_BASE_URL,
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "production" | "prod" | "mainnet" => Ok(Environment::Production),
            "testnet" | "test" => Ok(Environment::Testnet),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Testnet => write!(f, "testnet"),
        }
    }
}

/// Process-wide client configuration, read-only after startup
///
/// ## Environment Variables
///
/// - `BINANCE_API_KEY` / `BINANCE_API_SECRET`: credentials (optional)
/// - `BINANCE_ENVIRONMENT`: `production` (default) or `testnet`
/// - `BINANCE_BASE_URL`: explicit REST base URL, overrides the environment
/// - `BINANCE_ANNOUNCEMENT_URL`: announcement endpoint override
#[derive(Debug, Clone)]
pub struct BinanceConfig {
    pub credentials: Credentials,
    pub environment: Environment,
    pub base_url: String,
    pub announcement_url: String,
    pub timeout: Duration,
}

impl BinanceConfig {
    /// Configuration for `environment` with no overrides
    pub fn new(environment: Environment, credentials: Credentials) -> Self {
        Self {
            credentials,
            environment,
            base_url: environment.base_url().to_string(),
            announcement_url: ANNOUNCEMENT_URL.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }

    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("BINANCE_ENVIRONMENT") {
            Some(value) => value.parse().unwrap_or_else(|err: ConfigError| {
                tracing::warn!(value = %value, error = %err, "Falling back to production");
                Environment::Production
            }),
            None => Environment::default(),
        };

        let mut config = Self::new(environment, Credentials::from_lookup(&lookup));

        if let Some(url) = override_url(&lookup, "BINANCE_BASE_URL")? {
            config.base_url = url;
        }
        if let Some(url) = override_url(&lookup, "BINANCE_ANNOUNCEMENT_URL")? {
            config.announcement_url = url;
        }

        Ok(config)
    }

    /// Replaces the REST base URL (trailing slashes are dropped)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_announcement_url(mut self, url: impl Into<String>) -> Self {
        self.announcement_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn override_url<F>(lookup: &F, name: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name) else {
        return Ok(None);
    };
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if reqwest::Url::parse(value).is_err() {
        return Err(ConfigError::InvalidUrl {
            name,
            value: value.to_string(),
        });
    }
    Ok(Some(value.trim_end_matches('/').to_string()))
}
