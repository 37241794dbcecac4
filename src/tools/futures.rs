//! USDT-M futures: account, open orders, income history

use super::spot::render_order;
use super::{clamp_history_limit, fetch, for_suffix, normalize, render, require_credentials};
use crate::binance::types::{FuturesAccount, IncomeRecord, OpenOrder};
use crate::binance::{BinanceApi, QueryParams};
use crate::error::ApiError;
use crate::report::formatter::{
    build_table, bullet, check_mark, field, format_decimal, format_price, format_quantity,
    format_short_time, format_usd, CURRENCY_DECIMALS,
};
use crate::report::status::position_side;

/// Wallet totals, funded assets and active positions
pub async fn get_futures_account_balance(api: &dyn BinanceApi) -> String {
    render(
        "get_futures_account_balance",
        "futures account",
        futures_account(api).await,
    )
}

async fn futures_account(api: &dyn BinanceApi) -> Result<String, ApiError> {
    require_credentials(api)?;
    let account: FuturesAccount = fetch(api, "/fapi/v2/account", QueryParams::new(), true).await?;

    let mut markdown = String::from("# 🎯 USDT-M Futures Account\n\n");
    markdown.push_str(&field("Total Wallet Balance", format_usd(account.total_wallet_balance)));
    markdown.push_str(&field(
        "Total Unrealized Profit",
        format_usd(account.total_unrealized_profit),
    ));
    markdown.push_str(&field("Total Margin Balance", format_usd(account.total_margin_balance)));
    markdown.push_str(&field("Available Balance", format_usd(account.available_balance)));
    markdown.push_str(&field("Max Withdraw Amount", format_usd(account.max_withdraw_amount)));
    markdown.push('\n');

    let rows: Vec<Vec<String>> = account
        .assets
        .iter()
        .filter(|a| a.wallet_balance > 0.0)
        .map(|a| {
            vec![
                a.asset.clone(),
                format_decimal(a.wallet_balance, CURRENCY_DECIMALS),
                format_decimal(a.unrealized_profit, CURRENCY_DECIMALS),
                format_decimal(a.margin_balance, CURRENCY_DECIMALS),
            ]
        })
        .collect();

    if !rows.is_empty() {
        markdown.push_str("## 💼 Asset Balances\n\n");
        markdown.push_str(&build_table(
            &["Asset", "Wallet Balance", "Unrealized Profit", "Margin Balance"],
            &rows,
        ));
        markdown.push('\n');
    }

    let positions: Vec<_> = account.active_positions().collect();
    if positions.is_empty() {
        markdown.push_str("## 📊 No Active Positions\n");
        return Ok(markdown);
    }

    markdown.push_str("## 📊 Active Positions\n\n");
    for pos in positions {
        markdown.push_str(&format!("### {} ({})\n", pos.symbol, position_side(pos.is_long())));
        markdown.push_str(&bullet("Position Amount", format_quantity(pos.position_amt)));
        markdown.push_str(&bullet("Entry Price", format_price(pos.entry_price)));
        markdown.push_str(&bullet("Unrealized Profit", format_usd(pos.unrealized_profit)));
        markdown.push_str(&bullet("Leverage", format!("{}x", pos.leverage)));
        markdown.push_str(&bullet("Isolated", check_mark(pos.isolated)));
        markdown.push('\n');
    }

    Ok(markdown)
}

/// Open futures orders for one symbol or all symbols
pub async fn get_futures_open_orders(api: &dyn BinanceApi, symbol: Option<&str>) -> String {
    render(
        "get_futures_open_orders",
        "futures open orders",
        futures_open_orders(api, symbol).await,
    )
}

async fn futures_open_orders(
    api: &dyn BinanceApi,
    symbol: Option<&str>,
) -> Result<String, ApiError> {
    require_credentials(api)?;
    let symbol = normalize(symbol);
    let mut params = QueryParams::new();
    params.insert_opt("symbol", symbol.as_deref());

    let orders: Vec<OpenOrder> = fetch(api, "/fapi/v1/openOrders", params, true).await?;
    let suffix = for_suffix(symbol.as_deref());

    if orders.is_empty() {
        return Ok(format!("# 📋 No Open Futures Orders{}\n", suffix));
    }

    let mut markdown = format!("# 📋 Open Futures Orders{}\n\n", suffix);
    markdown.push_str(&field("Total Open Orders", orders.len()));
    markdown.push('\n');
    for order in &orders {
        markdown.push_str(&render_order(order, true));
    }

    Ok(markdown)
}

/// Realized PnL, funding fees, commissions and transfers
///
/// `limit` is clamped to 1000. Totals per asset are listed in first-seen order.
pub async fn get_futures_income_history(
    api: &dyn BinanceApi,
    symbol: Option<&str>,
    income_type: Option<&str>,
    limit: i64,
) -> String {
    render(
        "get_futures_income_history",
        "income history",
        income_history(api, symbol, income_type, limit).await,
    )
}

async fn income_history(
    api: &dyn BinanceApi,
    symbol: Option<&str>,
    income_type: Option<&str>,
    limit: i64,
) -> Result<String, ApiError> {
    require_credentials(api)?;
    let mut params = QueryParams::new().with("limit", clamp_history_limit(limit));
    params.insert_opt("symbol", normalize(symbol));
    params.insert_opt("incomeType", normalize(income_type));

    let incomes: Vec<IncomeRecord> = fetch(api, "/fapi/v1/income", params, true).await?;

    if incomes.is_empty() {
        return Ok("# 💸 No Income History Found\n".to_string());
    }

    let rows: Vec<Vec<String>> = incomes
        .iter()
        .map(|i| {
            vec![
                format_short_time(i.time),
                i.symbol.clone(),
                i.income_type.clone(),
                format_quantity(i.income),
                i.asset.clone(),
            ]
        })
        .collect();

    let mut markdown = String::from("# 💸 Futures Income History\n\n");
    markdown.push_str(&field("Total Records", incomes.len()));
    markdown.push('\n');
    markdown.push_str(&build_table(&["Time", "Symbol", "Type", "Income", "Asset"], &rows));

    markdown.push_str("\n## 📈 Total Income by Asset\n\n");
    for (asset, total) in totals_by_asset(&incomes) {
        markdown.push_str(&bullet(asset, format_quantity(total)));
    }

    Ok(markdown)
}

/// Sums income per asset, keeping the order assets first appear in
pub fn totals_by_asset(incomes: &[IncomeRecord]) -> Vec<(&str, f64)> {
    let mut totals: Vec<(&str, f64)> = Vec::new();
    for income in incomes {
        match totals.iter_mut().find(|(asset, _)| *asset == income.asset) {
            Some((_, total)) => *total += income.income,
            None => totals.push((income.asset.as_str(), income.income)),
        }
    }
    totals
}
