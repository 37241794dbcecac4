//! Binance API Type Definitions
//!
//! Typed views over the JSON returned by each endpoint. Binance encodes most
//! decimals as strings; the `decimal` helpers accept strings or numbers.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserializers for Binance's string-or-number fields
pub mod decimal {
    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;
    use std::fmt;

    struct F64Visitor;

    impl<'de> Visitor<'de> for F64Visitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number or a numeric string")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            v.trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid decimal '{}'", v)))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        d.deserialize_any(F64Visitor)
    }

    pub fn serialize<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(*value)
    }

    /// Missing or null fields become 0.0
    pub mod or_zero {
        use serde::{Deserialize, Deserializer, Serializer};

        #[derive(Deserialize)]
        struct Wrapper(#[serde(deserialize_with = "super::deserialize")] f64);

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
            let value: Option<Wrapper> = Option::deserialize(d)?;
            Ok(value.map(|w| w.0).unwrap_or(0.0))
        }

        pub fn serialize<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
            super::serialize(value, s)
        }
    }
}

/// Accepts a JSON string or number and keeps its text form
fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    let value = serde_json::Value::deserialize(d)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

// ---------- Announcements ----------

/// Envelope returned by the public announcement endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementResponse {
    /// `"000000"` on success
    #[serde(deserialize_with = "string_or_number")]
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<Announcement>,
}

impl AnnouncementResponse {
    pub const SUCCESS_CODE: &'static str = "000000";

    pub fn is_success(&self) -> bool {
        self.code == Self::SUCCESS_CODE
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Publication time, epoch milliseconds
    #[serde(default)]
    pub time: Option<i64>,
}

fn null_as_empty<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}

// ---------- Market data ----------

/// Response from /api/v3/ticker/price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerPrice {
    pub symbol: String,
    #[serde(with = "decimal")]
    pub price: f64,
}

/// /api/v3/ticker/price returns an object for one symbol, an array for all
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TickerPriceResponse {
    Many(Vec<TickerPrice>),
    One(TickerPrice),
}

/// Response from /api/v3/ticker/24hr
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker24hr {
    pub symbol: String,
    #[serde(with = "decimal")]
    pub price_change: f64,
    #[serde(with = "decimal")]
    pub price_change_percent: f64,
    #[serde(with = "decimal")]
    pub high_price: f64,
    #[serde(with = "decimal")]
    pub low_price: f64,
    #[serde(with = "decimal")]
    pub last_price: f64,
    /// Total traded base asset volume
    #[serde(with = "decimal")]
    pub volume: f64,
    /// Total traded quote asset volume
    #[serde(with = "decimal")]
    pub quote_volume: f64,
    /// Total number of trades
    pub count: i64,
}

// ---------- Spot account ----------

/// Response from /api/v3/account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotAccount {
    pub maker_commission: i64,
    pub taker_commission: i64,
    pub can_trade: bool,
    pub can_withdraw: bool,
    pub can_deposit: bool,
    pub balances: Vec<Balance>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    pub asset: String,
    #[serde(with = "decimal")]
    pub free: f64,
    #[serde(with = "decimal")]
    pub locked: f64,
}

impl Balance {
    pub fn total(&self) -> f64 {
        self.free + self.locked
    }

    pub fn is_non_zero(&self) -> bool {
        self.free > 0.0 || self.locked > 0.0
    }
}

/// Entry of /api/v3/openOrders and /fapi/v1/openOrders
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOrder {
    pub symbol: String,
    pub order_id: i64,
    pub side: String,
    #[serde(rename = "type")]
    pub order_type: String,
    #[serde(with = "decimal")]
    pub price: f64,
    #[serde(with = "decimal")]
    pub orig_qty: f64,
    #[serde(with = "decimal")]
    pub executed_qty: f64,
    pub status: String,
    pub time: i64,
    /// Futures only
    #[serde(default)]
    pub reduce_only: bool,
}

/// Entry of /api/v3/myTrades
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyTrade {
    pub time: i64,
    pub is_buyer: bool,
    #[serde(with = "decimal")]
    pub price: f64,
    #[serde(with = "decimal")]
    pub qty: f64,
    #[serde(with = "decimal")]
    pub commission: f64,
    pub commission_asset: String,
}

impl MyTrade {
    pub fn notional(&self) -> f64 {
        self.price * self.qty
    }
}

// ---------- USDT-M futures ----------

/// Response from /fapi/v2/account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesAccount {
    #[serde(with = "decimal")]
    pub total_wallet_balance: f64,
    #[serde(with = "decimal")]
    pub total_unrealized_profit: f64,
    #[serde(with = "decimal")]
    pub total_margin_balance: f64,
    #[serde(with = "decimal")]
    pub available_balance: f64,
    #[serde(with = "decimal")]
    pub max_withdraw_amount: f64,
    #[serde(default)]
    pub assets: Vec<FuturesAsset>,
    #[serde(default)]
    pub positions: Vec<FuturesPosition>,
}

impl FuturesAccount {
    pub fn active_positions(&self) -> impl Iterator<Item = &FuturesPosition> {
        self.positions.iter().filter(|p| p.position_amt != 0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesAsset {
    pub asset: String,
    #[serde(with = "decimal")]
    pub wallet_balance: f64,
    #[serde(with = "decimal")]
    pub unrealized_profit: f64,
    #[serde(with = "decimal")]
    pub margin_balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesPosition {
    pub symbol: String,
    #[serde(with = "decimal")]
    pub position_amt: f64,
    #[serde(with = "decimal")]
    pub entry_price: f64,
    #[serde(with = "decimal")]
    pub unrealized_profit: f64,
    #[serde(deserialize_with = "string_or_number")]
    pub leverage: String,
    pub isolated: bool,
}

impl FuturesPosition {
    pub fn is_long(&self) -> bool {
        self.position_amt > 0.0
    }
}

/// Entry of /fapi/v1/income
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRecord {
    pub time: i64,
    #[serde(default)]
    pub symbol: String,
    pub income_type: String,
    #[serde(with = "decimal")]
    pub income: f64,
    pub asset: String,
}

// ---------- Margin ----------

/// Response from /sapi/v1/margin/account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginAccount {
    #[serde(with = "decimal")]
    pub margin_level: f64,
    #[serde(with = "decimal")]
    pub total_asset_of_btc: f64,
    #[serde(with = "decimal")]
    pub total_liability_of_btc: f64,
    #[serde(with = "decimal")]
    pub total_net_asset_of_btc: f64,
    pub trade_enabled: bool,
    pub transfer_enabled: bool,
    pub borrow_enabled: bool,
    #[serde(default)]
    pub user_assets: Vec<MarginAsset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginAsset {
    pub asset: String,
    #[serde(with = "decimal")]
    pub free: f64,
    #[serde(with = "decimal")]
    pub locked: f64,
    #[serde(with = "decimal")]
    pub borrowed: f64,
    #[serde(with = "decimal")]
    pub interest: f64,
    #[serde(with = "decimal")]
    pub net_asset: f64,
}

impl MarginAsset {
    pub fn is_active(&self) -> bool {
        self.net_asset != 0.0 || self.borrowed > 0.0
    }
}

/// Response from /sapi/v1/margin/isolated/account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsolatedMarginAccount {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub assets: Vec<IsolatedMarginPair>,
    #[serde(default, with = "decimal::or_zero")]
    pub total_net_asset_of_btc: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsolatedMarginPair {
    pub symbol: String,
    #[serde(with = "decimal")]
    pub margin_level: f64,
    #[serde(with = "decimal")]
    pub margin_ratio: f64,
    #[serde(with = "decimal")]
    pub liquidate_price: f64,
    pub trade_enabled: bool,
    pub base_asset: IsolatedAsset,
    pub quote_asset: IsolatedAsset,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsolatedAsset {
    pub asset: String,
    #[serde(with = "decimal")]
    pub free: f64,
    #[serde(with = "decimal")]
    pub borrowed: f64,
    #[serde(with = "decimal")]
    pub interest: f64,
    #[serde(with = "decimal")]
    pub net_asset: f64,
}

// ---------- Wallet ----------

/// Response from /sapi/v1/capital/deposit/address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositAddress {
    pub address: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DepositAddressResponse {
    Many(Vec<DepositAddress>),
    One(DepositAddress),
}

/// Entry of /sapi/v1/capital/deposit/hisrec
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRecord {
    pub insert_time: i64,
    pub coin: String,
    #[serde(with = "decimal")]
    pub amount: f64,
    #[serde(default)]
    pub network: Option<String>,
    pub status: i64,
}

/// Entry of /sapi/v1/capital/withdraw/history
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRecord {
    pub apply_time: ApplyTime,
    pub coin: String,
    #[serde(with = "decimal")]
    pub amount: f64,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default, with = "decimal::or_zero")]
    pub transaction_fee: f64,
    pub status: i64,
}

/// Withdrawal time: epoch milliseconds or a `YYYY-MM-DD HH:MM:SS` string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApplyTime {
    Millis(i64),
    Text(String),
}
