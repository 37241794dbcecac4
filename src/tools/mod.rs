//! Markdown tools over the Binance REST API
//!
//! Every tool follows the same shape: check credentials when the endpoint is
//! private, issue one request through [`BinanceApi`], decode the typed
//! response and render Markdown. Errors never escape a tool; they are turned
//! into a single `❌` line by [`render`].

pub mod futures;
pub mod margin;
pub mod market;
pub mod portfolio;
pub mod spot;
pub mod wallet;

pub use futures::{get_futures_account_balance, get_futures_income_history, get_futures_open_orders};
pub use margin::{get_isolated_margin_account, get_margin_account};
pub use market::{fetch_latest_announcements, get_24hr_ticker, get_ticker_price};
pub use portfolio::get_asset_distribution;
pub use spot::{get_account_info, get_spot_open_orders, get_spot_trade_history};
pub use wallet::{get_deposit_address, get_deposit_history, get_withdraw_history};

use crate::binance::{BinanceApi, QueryParams};
use crate::error::ApiError;
use reqwest::Method;
use serde::de::DeserializeOwned;

/// Returned by every private tool when credentials are missing
pub const NOT_CONFIGURED_MESSAGE: &str =
    "❌ API keys not configured. Please set BINANCE_API_KEY and BINANCE_API_SECRET in the environment";

/// Upper bound for history `limit` parameters
pub const MAX_HISTORY_LIMIT: u32 = 1000;

/// Clamps a history `limit` into `1..=1000`
pub fn clamp_history_limit(limit: i64) -> u32 {
    limit.clamp(1, i64::from(MAX_HISTORY_LIMIT)) as u32
}

/// Fails with [`ApiError::NotConfigured`] unless key and secret are both set
pub(crate) fn require_credentials(api: &dyn BinanceApi) -> Result<(), ApiError> {
    if api.has_credentials() {
        Ok(())
    } else {
        Err(ApiError::NotConfigured)
    }
}

/// GET `endpoint` and decode the body into `T`
pub(crate) async fn fetch<T: DeserializeOwned>(
    api: &dyn BinanceApi,
    endpoint: &str,
    params: QueryParams,
    signed: bool,
) -> Result<T, ApiError> {
    let value = api.request(Method::GET, endpoint, params, signed).await?;
    Ok(serde_json::from_value(value)?)
}

/// Collapses a tool result into the Markdown returned to the caller
pub(crate) fn render(tool: &str, what: &str, result: Result<String, ApiError>) -> String {
    match result {
        Ok(markdown) => markdown,
        Err(err) if err.is_configuration() => {
            tracing::warn!(tool = %tool, "Credentials not configured");
            NOT_CONFIGURED_MESSAGE.to_string()
        }
        Err(err) => {
            tracing::error!(
                tool = %tool,
                error_type = err.error_type(),
                error = %err,
                "Tool call failed"
            );
            let detail = err.to_string().replace(['\r', '\n'], " ");
            format!("❌ Failed to fetch {}: {}", what, detail)
        }
    }
}

/// Upper-cases a symbol or coin, treating blank input as absent
pub(crate) fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_uppercase)
}

/// `" for SYMBOL"` suffix used in headings
pub(crate) fn for_suffix(symbol: Option<&str>) -> String {
    symbol.map(|s| format!(" for {}", s)).unwrap_or_default()
}
