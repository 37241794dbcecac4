//! MCP Tool Parameter Types
//!
//! Argument structs for every tool with JsonSchema support. Defaults are
//! applied during deserialization so omitted arguments behave the same as
//! the documented defaults.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_announcement_count() -> i64 {
    20
}

fn default_page() -> i64 {
    1
}

fn default_history_limit() -> i64 {
    10
}

fn default_income_limit() -> i64 {
    20
}

/// Parameters for fetch_latest_announcements
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AnnouncementParams {
    #[serde(default = "default_announcement_count")]
    #[schemars(description = "Number of announcements to return (max 20, default: 20)")]
    pub count: i64,

    #[serde(default = "default_page")]
    #[schemars(description = "Page number, starting at 1 (default: 1)")]
    pub page: i64,
}

impl Default for AnnouncementParams {
    fn default() -> Self {
        Self {
            count: default_announcement_count(),
            page: default_page(),
        }
    }
}

/// Optional trading pair filter
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct OptionalSymbolParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Trading pair symbol (e.g., BTCUSDT). Omit for all symbols")]
    pub symbol: Option<String>,
}

/// Required trading pair
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SymbolParam {
    #[schemars(description = "Trading pair symbol (e.g., BTCUSDT, ETHUSDT)")]
    pub symbol: String,
}

/// Parameters for get_spot_trade_history
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TradeHistoryParams {
    #[schemars(description = "Trading pair symbol (e.g., BTCUSDT)")]
    pub symbol: String,

    #[serde(default = "default_history_limit")]
    #[schemars(description = "Number of trades to return (max 1000, default: 10)")]
    pub limit: i64,
}

/// Parameters for get_futures_income_history
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct IncomeHistoryParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Futures symbol filter (e.g., BTCUSDT)")]
    pub symbol: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Income type filter: TRANSFER, REALIZED_PNL, FUNDING_FEE, COMMISSION, ..."
    )]
    pub income_type: Option<String>,

    #[serde(default = "default_income_limit")]
    #[schemars(description = "Number of records to return (max 1000, default: 20)")]
    pub limit: i64,
}

impl Default for IncomeHistoryParams {
    fn default() -> Self {
        Self {
            symbol: None,
            income_type: None,
            limit: default_income_limit(),
        }
    }
}

/// Parameters for get_deposit_address
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DepositAddressParams {
    #[schemars(description = "Coin name (e.g., BTC, USDT)")]
    pub coin: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Network (e.g., BTC, ETH, BSC). Omit for the coin's default")]
    pub network: Option<String>,
}

/// Parameters shared by deposit and withdrawal history
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TransferHistoryParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Coin filter (e.g., BTC)")]
    pub coin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Status code filter")]
    pub status: Option<i64>,

    #[serde(default = "default_history_limit")]
    #[schemars(description = "Number of records to return (max 1000, default: 10)")]
    pub limit: i64,
}

impl Default for TransferHistoryParams {
    fn default() -> Self {
        Self {
            coin: None,
            status: None,
            limit: default_history_limit(),
        }
    }
}
