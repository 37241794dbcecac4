//! Binance HTTP Client
//!
//! HTTP client wrapper for making requests to Binance REST API.
//! Provides the fixed request timeout, the API-key header and request signing.

use crate::binance::params::QueryParams;
use crate::config::BinanceConfig;
use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;

/// Header carrying the API key on every request when one is configured
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// The one capability every tool needs: GET/POST with optional signing
///
/// `BinanceClient` is the production implementation; tests substitute an
/// in-memory double.
#[async_trait]
pub trait BinanceApi: Send + Sync {
    /// Sends one request to `endpoint` under the REST base URL
    ///
    /// Only GET and POST are accepted. When `signed` is set, `timestamp` and
    /// `signature` are appended to `params`.
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: QueryParams,
        signed: bool,
    ) -> Result<Value, ApiError>;

    /// Fetches one page of the public announcement feed
    async fn announcements(&self, page: u32, rows: u32) -> Result<Value, ApiError>;

    /// True when both API key and secret are configured
    fn has_credentials(&self) -> bool;
}

/// Binance REST API HTTP client
///
/// Wraps reqwest::Client with Binance-specific configuration including
/// timeout, base URL, user-agent header and API credentials for signing.
#[derive(Clone)]
pub struct BinanceClient {
    client: Client,
    config: BinanceConfig,
}

impl std::fmt::Debug for BinanceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceClient")
            .field("base_url", &self.config.base_url)
            .field("environment", &self.config.environment)
            .field("api_key", &self.config.credentials.api_key.as_ref().map(|_| "***"))
            .field("api_secret", &self.config.credentials.api_secret.as_ref().map(|_| "***"))
            .finish()
    }
}

impl BinanceClient {
    /// Creates a client for `config`
    ///
    /// The underlying reqwest client uses `config.timeout` (30 seconds by
    /// default) for every request.
    pub fn new(config: BinanceConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("binance-assistant/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Connection(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Gets current timestamp in milliseconds
    fn get_timestamp() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    /// Builds the full request URL, signing `params` when requested
    fn build_url(
        &self,
        endpoint: &str,
        mut params: QueryParams,
        signed: bool,
    ) -> Result<String, ApiError> {
        if signed {
            let secret = self
                .config
                .credentials
                .api_secret
                .as_ref()
                .ok_or(ApiError::NotConfigured)?;
            params.sign(secret.expose_secret(), Self::get_timestamp())?;
        }

        let mut url = format!("{}{}", self.config.base_url, endpoint);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.to_query_string());
        }
        Ok(url)
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        ApiError::from_reqwest(err, self.config.timeout)
    }

    /// Sends a prepared request and decodes the JSON body
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let request = match self.config.credentials.api_key.as_ref() {
            Some(key) => request.header(API_KEY_HEADER, key.expose_secret()),
            None => request,
        };

        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Binance API returned error status");
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl BinanceApi for BinanceClient {
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: QueryParams,
        signed: bool,
    ) -> Result<Value, ApiError> {
        if method != Method::GET && method != Method::POST {
            return Err(ApiError::UnsupportedMethod(method.to_string()));
        }

        tracing::debug!(method = %method, endpoint = %endpoint, signed, "Sending Binance request");

        let url = self.build_url(endpoint, params, signed)?;
        self.send(self.client.request(method, url)).await
    }

    async fn announcements(&self, page: u32, rows: u32) -> Result<Value, ApiError> {
        tracing::debug!(page, rows, "Fetching Binance announcements");

        let params = QueryParams::new().with("page", page).with("rows", rows);
        let url = format!("{}?{}", self.config.announcement_url, params.to_query_string());

        // The announcement feed is public; no API key header is sent.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn has_credentials(&self) -> bool {
        self.config.credentials.is_complete()
    }
}
