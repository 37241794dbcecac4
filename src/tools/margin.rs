//! Cross and isolated margin accounts

use super::{fetch, normalize, render, require_credentials};
use crate::binance::types::{IsolatedAsset, IsolatedMarginAccount, MarginAccount};
use crate::binance::{BinanceApi, QueryParams};
use crate::error::ApiError;
use crate::report::formatter::{
    build_table, bullet, check_mark, field, format_price, format_quantity, format_ratio,
};

/// Cross margin level, BTC totals, permissions and active assets
pub async fn get_margin_account(api: &dyn BinanceApi) -> String {
    render("get_margin_account", "margin account", margin_account(api).await)
}

async fn margin_account(api: &dyn BinanceApi) -> Result<String, ApiError> {
    require_credentials(api)?;
    let account: MarginAccount =
        fetch(api, "/sapi/v1/margin/account", QueryParams::new(), true).await?;

    let mut markdown = String::from("# 🔄 Cross Margin Account\n\n");
    markdown.push_str(&field("Margin Level", format_ratio(account.margin_level)));
    markdown.push_str(&field("Total Asset (BTC)", format_quantity(account.total_asset_of_btc)));
    markdown.push_str(&field(
        "Total Liability (BTC)",
        format_quantity(account.total_liability_of_btc),
    ));
    markdown.push_str(&field(
        "Total Net Asset (BTC)",
        format_quantity(account.total_net_asset_of_btc),
    ));
    markdown.push_str(&field("Can Trade", check_mark(account.trade_enabled)));
    markdown.push_str(&field("Can Transfer", check_mark(account.transfer_enabled)));
    markdown.push_str(&field("Can Borrow", check_mark(account.borrow_enabled)));
    markdown.push('\n');

    let rows: Vec<Vec<String>> = account
        .user_assets
        .iter()
        .filter(|a| a.is_active())
        .map(|a| {
            vec![
                a.asset.clone(),
                format_quantity(a.free),
                format_quantity(a.locked),
                format_quantity(a.borrowed),
                format_quantity(a.interest),
                format_quantity(a.net_asset),
            ]
        })
        .collect();

    if rows.is_empty() {
        markdown.push_str("## 💼 No margin assets found\n");
    } else {
        markdown.push_str("## 💼 Asset Details\n\n");
        markdown.push_str(&build_table(
            &["Asset", "Free", "Locked", "Borrowed", "Interest", "Net Asset"],
            &rows,
        ));
    }

    Ok(markdown)
}

/// Isolated margin pairs, optionally restricted to one symbol
pub async fn get_isolated_margin_account(api: &dyn BinanceApi, symbol: Option<&str>) -> String {
    render(
        "get_isolated_margin_account",
        "isolated margin account",
        isolated_margin_account(api, symbol).await,
    )
}

async fn isolated_margin_account(
    api: &dyn BinanceApi,
    symbol: Option<&str>,
) -> Result<String, ApiError> {
    require_credentials(api)?;
    let mut params = QueryParams::new();
    params.insert_opt("symbols", normalize(symbol));

    let account: IsolatedMarginAccount =
        fetch(api, "/sapi/v1/margin/isolated/account", params, true).await?;

    if account.assets.is_empty() {
        return Ok("# 🔄 No Isolated Margin Accounts Found\n".to_string());
    }

    let mut markdown = String::from("# 🔄 Isolated Margin Accounts\n\n");
    markdown.push_str(&field("Total Accounts", account.assets.len()));
    markdown.push_str(&field(
        "Total Net Asset (BTC)",
        format_quantity(account.total_net_asset_of_btc),
    ));
    markdown.push('\n');

    for pair in &account.assets {
        markdown.push_str(&format!("## {}\n\n", pair.symbol));
        markdown.push_str(&field("Margin Level", format_ratio(pair.margin_level)));
        markdown.push_str(&field("Margin Ratio", format_ratio(pair.margin_ratio)));
        markdown.push_str(&field("Liquidate Price", format_price(pair.liquidate_price)));
        markdown.push_str(&field("Can Trade", check_mark(pair.trade_enabled)));
        markdown.push('\n');

        markdown.push_str(&isolated_leg("Base Asset", &pair.base_asset));
        markdown.push_str(&isolated_leg("Quote Asset", &pair.quote_asset));
    }

    Ok(markdown)
}

fn isolated_leg(title: &str, asset: &IsolatedAsset) -> String {
    let mut section = format!("### {}\n", title);
    section.push_str(&bullet("Asset", &asset.asset));
    section.push_str(&bullet("Free", format_quantity(asset.free)));
    section.push_str(&bullet("Borrowed", format_quantity(asset.borrowed)));
    section.push_str(&bullet("Interest", format_quantity(asset.interest)));
    section.push_str(&bullet("Net Asset", format_quantity(asset.net_asset)));
    section.push('\n');
    section
}
