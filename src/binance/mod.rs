//! Binance API Client
//!
//! This module contains the HTTP client for Binance API integration.

pub mod client;
pub mod params;
pub mod types;

// Re-export commonly used types
pub use client::{BinanceApi, BinanceClient, API_KEY_HEADER};
pub use params::QueryParams;
