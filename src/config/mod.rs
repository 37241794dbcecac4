//! Configuration Management
//!
//! Loads API credentials and endpoint selection from the environment.

pub mod binance;
pub mod credentials;

// Re-export
pub use binance::{
    BinanceConfig, ConfigError, Environment, ANNOUNCEMENT_URL, PRODUCTION_BASE_URL,
    REQUEST_TIMEOUT_SECS, TESTNET_BASE_URL,
};
pub use credentials::{Credentials, SecretString};
