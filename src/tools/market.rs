//! Public market data: announcements, ticker price, 24h statistics

use super::{fetch, normalize, render};
use crate::binance::types::{AnnouncementResponse, Ticker24hr, TickerPriceResponse};
use crate::binance::{BinanceApi, QueryParams};
use crate::error::ApiError;
use crate::report::formatter::{
    build_list, build_section_header, build_table, field, format_decimal, format_percentage,
    format_price, format_timestamp, format_usd, CURRENCY_DECIMALS,
};

/// Most rows the announcement endpoint serves per page
pub const MAX_ANNOUNCEMENT_ROWS: u32 = 20;

/// Rows shown in the all-symbols ticker view
pub const TICKER_TABLE_ROWS: usize = 20;

/// Quote assets stripped to find the base asset of a symbol, longest first
const QUOTE_ASSETS: &[&str] = &[
    "FDUSD", "USDT", "USDC", "BUSD", "TUSD", "BTC", "ETH", "BNB", "EUR", "TRY", "BRL",
];

/// Clamps announcement paging to `0 <= count <= 20` and `page >= 1`
pub fn clamp_announcement_args(count: i64, page: i64) -> (u32, u32) {
    let count = count.clamp(0, i64::from(MAX_ANNOUNCEMENT_ROWS)) as u32;
    let page = page.clamp(1, i64::from(u32::MAX)) as u32;
    (count, page)
}

/// Base asset of a trading pair, e.g. `BTCUSDT` -> `BTC`
pub fn base_asset(symbol: &str) -> &str {
    QUOTE_ASSETS
        .iter()
        .find_map(|quote| {
            symbol
                .strip_suffix(quote)
                .filter(|base| !base.is_empty())
        })
        .unwrap_or_else(|| symbol.get(..3).unwrap_or(symbol))
}

/// Latest announcements as a Markdown link list
pub async fn fetch_latest_announcements(api: &dyn BinanceApi, count: i64, page: i64) -> String {
    let (count, page) = clamp_announcement_args(count, page);
    render(
        "fetch_latest_announcements",
        "announcements",
        announcements(api, count, page).await,
    )
}

async fn announcements(api: &dyn BinanceApi, count: u32, page: u32) -> Result<String, ApiError> {
    let value = api.announcements(page, count).await?;
    let response: AnnouncementResponse = serde_json::from_value(value)?;

    if !response.is_success() {
        return Ok(format!(
            "❌ API error: {}",
            response.message.as_deref().unwrap_or("Unknown error")
        ));
    }

    if response.data.is_empty() {
        return Ok("# No Announcements Found\n".to_string());
    }

    let items: Vec<String> = response
        .data
        .iter()
        .map(|ann| {
            format!(
                "[{}]({}) _({})_",
                ann.title.as_deref().unwrap_or("No Title"),
                ann.url.as_deref().unwrap_or("No URL"),
                format_timestamp(ann.time.unwrap_or(0)),
            )
        })
        .collect();

    let mut markdown = build_section_header("📢 Binance Announcements", 1);
    markdown.push_str(&build_list(&items, false));
    Ok(markdown)
}

/// Price of one symbol, or the first 20 symbols when none is given
pub async fn get_ticker_price(api: &dyn BinanceApi, symbol: Option<&str>) -> String {
    render("get_ticker_price", "ticker price", ticker_price(api, symbol).await)
}

async fn ticker_price(api: &dyn BinanceApi, symbol: Option<&str>) -> Result<String, ApiError> {
    let mut params = QueryParams::new();
    params.insert_opt("symbol", normalize(symbol));

    let response: TickerPriceResponse = fetch(api, "/api/v3/ticker/price", params, false).await?;

    let markdown = match response {
        TickerPriceResponse::Many(tickers) => {
            let rows: Vec<Vec<String>> = tickers
                .iter()
                .take(TICKER_TABLE_ROWS)
                .map(|t| vec![t.symbol.clone(), format_price(t.price)])
                .collect();

            let mut markdown = format!("# 💰 Price Tickers (Top {})\n\n", TICKER_TABLE_ROWS);
            markdown.push_str(&build_table(&["Symbol", "Price"], &rows));
            if tickers.len() > TICKER_TABLE_ROWS {
                markdown.push_str(&format!(
                    "\n_Showing {} of {} symbols. Specify a symbol for detailed info._\n",
                    TICKER_TABLE_ROWS,
                    tickers.len()
                ));
            }
            markdown
        }
        TickerPriceResponse::One(ticker) => {
            let mut markdown = format!("# 💰 {} Price\n\n", ticker.symbol);
            markdown.push_str(&field("Current Price", format_price(ticker.price)));
            markdown
        }
    };

    Ok(markdown)
}

/// 24-hour rolling statistics for one symbol
pub async fn get_24hr_ticker(api: &dyn BinanceApi, symbol: &str) -> String {
    render("get_24hr_ticker", "24hr ticker", ticker_24hr(api, symbol).await)
}

async fn ticker_24hr(api: &dyn BinanceApi, symbol: &str) -> Result<String, ApiError> {
    let symbol = symbol.trim().to_uppercase();
    let params = QueryParams::new().with("symbol", &symbol);

    let t: Ticker24hr = fetch(api, "/api/v3/ticker/24hr", params, false).await?;

    let mut markdown = format!("# 📊 24hr Statistics for {}\n\n", t.symbol);
    markdown.push_str(&field(
        "Price Change",
        format!(
            "{} ({})",
            format_price(t.price_change),
            format_percentage(t.price_change_percent)
        ),
    ));
    markdown.push_str(&field("High Price", format_price(t.high_price)));
    markdown.push_str(&field("Low Price", format_price(t.low_price)));
    markdown.push_str(&field("Current Price", format_price(t.last_price)));
    markdown.push_str(&field(
        "Volume",
        format!(
            "{} {}",
            format_decimal(t.volume, CURRENCY_DECIMALS),
            base_asset(&t.symbol)
        ),
    ));
    markdown.push_str(&field("Quote Volume", format_usd(t.quote_volume)));
    markdown.push_str(&field("Number of Trades", t.count));

    Ok(markdown)
}
