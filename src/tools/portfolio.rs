//! Portfolio distribution across spot, futures and cross margin

use super::{fetch, render, require_credentials};
use crate::binance::types::{FuturesAccount, MarginAccount, SpotAccount};
use crate::binance::{BinanceApi, QueryParams};
use crate::error::ApiError;
use crate::report::formatter::{
    build_section_header, bullet, format_quantity, format_ratio, format_usd,
};

const SPOT_HEADING: &str = "💼 Spot Account";
const FUTURES_HEADING: &str = "🎯 USDT-M Futures";
const MARGIN_HEADING: &str = "🔄 Cross Margin";

/// One snapshot over all three account types
///
/// The three sub-requests are independent: a failure renders inline under
/// its own heading and the other sections are still produced.
pub async fn get_asset_distribution(api: &dyn BinanceApi) -> String {
    if let Err(err) = require_credentials(api) {
        return render("get_asset_distribution", "asset distribution", Err(err));
    }

    let (spot, futures, margin) = tokio::join!(
        spot_section(api),
        futures_section(api),
        margin_section(api)
    );

    let mut markdown = build_section_header("🎯 Portfolio Distribution Snapshot", 1);
    markdown.push_str(&section_or_error("spot", SPOT_HEADING, spot));
    markdown.push_str(&section_or_error("futures", FUTURES_HEADING, futures));
    markdown.push_str(&section_or_error("margin", MARGIN_HEADING, margin));
    markdown
}

fn section_or_error(section: &str, title: &str, result: Result<String, ApiError>) -> String {
    let heading = build_section_header(title, 2);
    match result {
        Ok(body) => format!("{}{}", heading, body),
        Err(err) => {
            tracing::warn!(
                section = %section,
                error_type = err.error_type(),
                error = %err,
                "Portfolio section unavailable"
            );
            let detail = err.to_string().replace(['\r', '\n'], " ");
            format!("{}❌ Error: {}\n\n", heading, detail)
        }
    }
}

async fn spot_section(api: &dyn BinanceApi) -> Result<String, ApiError> {
    let account: SpotAccount = fetch(api, "/api/v3/account", QueryParams::new(), true).await?;

    let mut balances: Vec<(&str, f64)> = account
        .balances
        .iter()
        .filter(|b| b.is_non_zero())
        .map(|b| (b.asset.as_str(), b.total()))
        .collect();
    balances.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut body = String::new();
    if balances.is_empty() {
        body.push_str("_No spot balances_\n");
    }
    for (asset, total) in balances {
        body.push_str(&bullet(asset, format_quantity(total)));
    }
    body.push('\n');
    Ok(body)
}

async fn futures_section(api: &dyn BinanceApi) -> Result<String, ApiError> {
    let account: FuturesAccount = fetch(api, "/fapi/v2/account", QueryParams::new(), true).await?;

    let mut body = String::new();
    body.push_str(&bullet("Total Wallet Balance", format_usd(account.total_wallet_balance)));
    body.push_str(&bullet("Unrealized Profit", format_usd(account.total_unrealized_profit)));
    let active = account.active_positions().count();
    if active > 0 {
        body.push_str(&bullet("Active Positions", active));
    }
    body.push('\n');
    Ok(body)
}

async fn margin_section(api: &dyn BinanceApi) -> Result<String, ApiError> {
    let account: MarginAccount =
        fetch(api, "/sapi/v1/margin/account", QueryParams::new(), true).await?;

    let mut body = String::new();
    body.push_str(&bullet(
        "Total Net Asset (BTC)",
        format_quantity(account.total_net_asset_of_btc),
    ));
    body.push_str(&bullet("Margin Level", format_ratio(account.margin_level)));
    body.push('\n');
    Ok(body)
}
