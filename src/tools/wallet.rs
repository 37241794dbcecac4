//! Wallet: deposit address, deposit and withdrawal history

use super::{clamp_history_limit, fetch, normalize, render, require_credentials};
use crate::binance::types::{
    ApplyTime, DepositAddress, DepositAddressResponse, DepositRecord, WithdrawRecord,
};
use crate::binance::{BinanceApi, QueryParams};
use crate::error::ApiError;
use crate::report::formatter::{build_table, bullet, field, format_quantity, format_short_time};
use crate::report::status::{deposit_status, withdraw_status};

/// Deposit address for a coin, optionally on one network
pub async fn get_deposit_address(api: &dyn BinanceApi, coin: &str, network: Option<&str>) -> String {
    render(
        "get_deposit_address",
        "deposit address",
        deposit_address(api, coin, network).await,
    )
}

async fn deposit_address(
    api: &dyn BinanceApi,
    coin: &str,
    network: Option<&str>,
) -> Result<String, ApiError> {
    require_credentials(api)?;
    let coin = coin.trim().to_uppercase();
    let mut params = QueryParams::new().with("coin", &coin);
    params.insert_opt("network", normalize(network));

    let response: DepositAddressResponse =
        fetch(api, "/sapi/v1/capital/deposit/address", params, true).await?;

    let mut markdown = format!("# 📥 Deposit Address for {}\n\n", coin);
    match response {
        DepositAddressResponse::Many(addresses) => {
            for addr in &addresses {
                markdown.push_str(&format!("## Network: {}\n", network_name(addr)));
                markdown.push_str(&bullet("Address", format!("`{}`", addr.address)));
                if let Some(tag) = memo(addr) {
                    markdown.push_str(&bullet("Tag/Memo", format!("`{}`", tag)));
                }
                markdown.push('\n');
            }
        }
        DepositAddressResponse::One(addr) => {
            markdown.push_str(&field("Network", network_name(&addr)));
            markdown.push_str(&field("Address", format!("`{}`", addr.address)));
            if let Some(tag) = memo(&addr) {
                markdown.push_str(&field("Tag/Memo", format!("`{}`", tag)));
            }
        }
    }

    Ok(markdown)
}

fn network_name(addr: &DepositAddress) -> &str {
    addr.network
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or("Unknown")
}

fn memo(addr: &DepositAddress) -> Option<&str> {
    addr.tag.as_deref().filter(|t| !t.is_empty())
}

/// Deposit history, `limit` clamped to 1000
pub async fn get_deposit_history(
    api: &dyn BinanceApi,
    coin: Option<&str>,
    status: Option<i64>,
    limit: i64,
) -> String {
    render(
        "get_deposit_history",
        "deposit history",
        deposit_history(api, coin, status, limit).await,
    )
}

async fn deposit_history(
    api: &dyn BinanceApi,
    coin: Option<&str>,
    status: Option<i64>,
    limit: i64,
) -> Result<String, ApiError> {
    require_credentials(api)?;
    let mut params = QueryParams::new().with("limit", clamp_history_limit(limit));
    params.insert_opt("coin", normalize(coin));
    params.insert_opt("status", status);

    let deposits: Vec<DepositRecord> =
        fetch(api, "/sapi/v1/capital/deposit/hisrec", params, true).await?;

    if deposits.is_empty() {
        return Ok("# 📥 No Deposit History Found\n".to_string());
    }

    let rows: Vec<Vec<String>> = deposits
        .iter()
        .map(|d| {
            vec![
                format_short_time(d.insert_time),
                d.coin.clone(),
                format_quantity(d.amount),
                d.network.clone().unwrap_or_else(|| "N/A".to_string()),
                deposit_status(d.status),
            ]
        })
        .collect();

    let mut markdown = String::from("# 📥 Deposit History\n\n");
    markdown.push_str(&field("Total Records", deposits.len()));
    markdown.push('\n');
    markdown.push_str(&build_table(&["Time", "Coin", "Amount", "Network", "Status"], &rows));

    Ok(markdown)
}

/// Withdrawal history, `limit` clamped to 1000
pub async fn get_withdraw_history(
    api: &dyn BinanceApi,
    coin: Option<&str>,
    status: Option<i64>,
    limit: i64,
) -> String {
    render(
        "get_withdraw_history",
        "withdrawal history",
        withdraw_history(api, coin, status, limit).await,
    )
}

async fn withdraw_history(
    api: &dyn BinanceApi,
    coin: Option<&str>,
    status: Option<i64>,
    limit: i64,
) -> Result<String, ApiError> {
    require_credentials(api)?;
    let mut params = QueryParams::new().with("limit", clamp_history_limit(limit));
    params.insert_opt("coin", normalize(coin));
    params.insert_opt("status", status);

    let withdrawals: Vec<WithdrawRecord> =
        fetch(api, "/sapi/v1/capital/withdraw/history", params, true).await?;

    if withdrawals.is_empty() {
        return Ok("# 📤 No Withdrawal History Found\n".to_string());
    }

    let rows: Vec<Vec<String>> = withdrawals
        .iter()
        .map(|w| {
            vec![
                apply_time(&w.apply_time),
                w.coin.clone(),
                format_quantity(w.amount),
                w.network.clone().unwrap_or_else(|| "N/A".to_string()),
                format_quantity(w.transaction_fee),
                withdraw_status(w.status),
            ]
        })
        .collect();

    let mut markdown = String::from("# 📤 Withdrawal History\n\n");
    markdown.push_str(&field("Total Records", withdrawals.len()));
    markdown.push('\n');
    markdown.push_str(&build_table(
        &["Time", "Coin", "Amount", "Network", "Fee", "Status"],
        &rows,
    ));

    Ok(markdown)
}

/// Short `MM-DD HH:MM` form for either withdrawal time encoding
fn apply_time(time: &ApplyTime) -> String {
    match time {
        ApplyTime::Millis(ms) => format_short_time(*ms),
        ApplyTime::Text(text) => chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
            .map(|dt| dt.format("%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| text.clone()),
    }
}
