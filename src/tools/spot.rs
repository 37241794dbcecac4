//! Spot account: balances, open orders, trade history

use super::{clamp_history_limit, fetch, for_suffix, normalize, render, require_credentials};
use crate::binance::types::{MyTrade, OpenOrder, SpotAccount};
use crate::binance::{BinanceApi, QueryParams};
use crate::error::ApiError;
use crate::report::formatter::{
    build_table, bullet, check_mark, field, format_price, format_quantity, format_short_time,
    format_timestamp, format_usd,
};
use crate::report::status::trade_side;

/// Commission rates, permissions and non-zero balances
pub async fn get_account_info(api: &dyn BinanceApi) -> String {
    render("get_account_info", "account info", account_info(api).await)
}

async fn account_info(api: &dyn BinanceApi) -> Result<String, ApiError> {
    require_credentials(api)?;
    let account: SpotAccount = fetch(api, "/api/v3/account", QueryParams::new(), true).await?;

    let mut markdown = String::from("# 👤 Spot Account Information\n\n");
    markdown.push_str(&field("Maker Commission", format!("{} bps", account.maker_commission)));
    markdown.push_str(&field("Taker Commission", format!("{} bps", account.taker_commission)));
    markdown.push_str(&field("Can Trade", check_mark(account.can_trade)));
    markdown.push_str(&field("Can Withdraw", check_mark(account.can_withdraw)));
    markdown.push_str(&field("Can Deposit", check_mark(account.can_deposit)));
    markdown.push('\n');

    let rows: Vec<Vec<String>> = account
        .balances
        .iter()
        .filter(|b| b.is_non_zero())
        .map(|b| {
            vec![
                b.asset.clone(),
                format_quantity(b.free),
                format_quantity(b.locked),
                format_quantity(b.total()),
            ]
        })
        .collect();

    if rows.is_empty() {
        markdown.push_str("## 💼 No balances found\n");
    } else {
        markdown.push_str("## 💼 Non-Zero Balances\n\n");
        markdown.push_str(&build_table(&["Asset", "Free", "Locked", "Total"], &rows));
    }

    Ok(markdown)
}

/// Renders one open order as a `###` section
///
/// Futures orders also show the reduce-only flag.
pub(crate) fn render_order(order: &OpenOrder, futures: bool) -> String {
    let mut section = format!("### Order #{}\n", order.order_id);
    section.push_str(&bullet("Symbol", &order.symbol));
    section.push_str(&bullet("Side", &order.side));
    section.push_str(&bullet("Type", &order.order_type));
    section.push_str(&bullet("Price", format_price(order.price)));
    section.push_str(&bullet("Original Qty", format_quantity(order.orig_qty)));
    section.push_str(&bullet("Executed Qty", format_quantity(order.executed_qty)));
    section.push_str(&bullet("Status", &order.status));
    if futures {
        section.push_str(&bullet("Reduce Only", check_mark(order.reduce_only)));
    }
    section.push_str(&bullet("Time", format_timestamp(order.time)));
    section.push('\n');
    section
}

/// Open spot orders for one symbol or all symbols
pub async fn get_spot_open_orders(api: &dyn BinanceApi, symbol: Option<&str>) -> String {
    render("get_spot_open_orders", "open orders", spot_open_orders(api, symbol).await)
}

async fn spot_open_orders(api: &dyn BinanceApi, symbol: Option<&str>) -> Result<String, ApiError> {
    require_credentials(api)?;
    let symbol = normalize(symbol);
    let mut params = QueryParams::new();
    params.insert_opt("symbol", symbol.as_deref());

    let orders: Vec<OpenOrder> = fetch(api, "/api/v3/openOrders", params, true).await?;
    let suffix = for_suffix(symbol.as_deref());

    if orders.is_empty() {
        return Ok(format!("# 📋 No Open Orders{}\n", suffix));
    }

    let mut markdown = format!("# 📋 Open Spot Orders{}\n\n", suffix);
    markdown.push_str(&field("Total Open Orders", orders.len()));
    markdown.push('\n');
    for order in &orders {
        markdown.push_str(&render_order(order, false));
    }

    Ok(markdown)
}

/// Recent fills for one symbol, `limit` clamped to 1000
pub async fn get_spot_trade_history(api: &dyn BinanceApi, symbol: &str, limit: i64) -> String {
    render(
        "get_spot_trade_history",
        "trade history",
        spot_trade_history(api, symbol, limit).await,
    )
}

async fn spot_trade_history(
    api: &dyn BinanceApi,
    symbol: &str,
    limit: i64,
) -> Result<String, ApiError> {
    require_credentials(api)?;
    let symbol = symbol.trim().to_uppercase();
    let params = QueryParams::new()
        .with("symbol", &symbol)
        .with("limit", clamp_history_limit(limit));

    let trades: Vec<MyTrade> = fetch(api, "/api/v3/myTrades", params, true).await?;

    if trades.is_empty() {
        return Ok(format!("# 📜 No Trade History for {}\n", symbol));
    }

    let rows: Vec<Vec<String>> = trades
        .iter()
        .map(|t| {
            vec![
                format_short_time(t.time),
                trade_side(t.is_buyer).to_string(),
                format_price(t.price),
                format_quantity(t.qty),
                format!("{} {}", format_quantity(t.commission), t.commission_asset),
                format_usd(t.notional()),
            ]
        })
        .collect();

    let mut markdown = format!("# 📜 Trade History for {}\n\n", symbol);
    markdown.push_str(&field("Total Trades", trades.len()));
    markdown.push('\n');
    markdown.push_str(&build_table(
        &["Time", "Side", "Price", "Quantity", "Commission", "Total"],
        &rows,
    ));

    Ok(markdown)
}
