// Unit tests for public market data tools

use crate::mock_api::{MockApi, ANNOUNCEMENTS};
use binance_assistant::error::ApiError;
use binance_assistant::mcp::types::AnnouncementParams;
use binance_assistant::tools::{fetch_latest_announcements, get_24hr_ticker, get_ticker_price};
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_announcements_clamp_count_and_page() {
        let api = MockApi::anonymous().respond(
            ANNOUNCEMENTS,
            json!({"code": "000000", "message": null, "data": []}),
        );

        fetch_latest_announcements(&api, 50, 0).await;

        let call = api.single_call();
        assert_eq!(call.param("rows"), Some("20"));
        assert_eq!(call.param("page"), Some("1"));
    }

    #[tokio::test]
    async fn test_announcements_negative_page_from_arguments() {
        let api = MockApi::anonymous().respond(
            ANNOUNCEMENTS,
            json!({"code": "000000", "message": null, "data": []}),
        );
        let args: AnnouncementParams =
            serde_json::from_value(json!({"count": 5, "page": -2})).unwrap();

        fetch_latest_announcements(&api, args.count, args.page).await;

        let call = api.single_call();
        assert_eq!(call.param("page"), Some("1"));
        assert_eq!(call.param("rows"), Some("5"));
    }

    #[tokio::test]
    async fn test_announcements_render_links() {
        let api = MockApi::anonymous().respond(
            ANNOUNCEMENTS,
            json!({
                "code": "000000",
                "data": [
                    {"title": "Binance Will List XYZ", "url": "https://www.binance.com/a/1", "time": 1_704_164_645_000i64},
                    {"url": "https://www.binance.com/a/2"}
                ]
            }),
        );

        let md = fetch_latest_announcements(&api, 2, 1).await;

        assert!(md.starts_with("# 📢 Binance Announcements\n\n"));
        assert!(md.contains(
            "- [Binance Will List XYZ](https://www.binance.com/a/1) _(2024-01-02 03:04:05)_\n"
        ));
        assert!(md.contains("- [No Title](https://www.binance.com/a/2)"));
    }

    #[tokio::test]
    async fn test_announcements_api_error_code() {
        let api = MockApi::anonymous().respond(
            ANNOUNCEMENTS,
            json!({"code": "100001", "message": "rate limited", "data": null}),
        );

        let md = fetch_latest_announcements(&api, 5, 1).await;
        assert_eq!(md, "❌ API error: rate limited");
    }

    #[tokio::test]
    async fn test_ticker_single_symbol_price() {
        let api = MockApi::anonymous().respond(
            "/api/v3/ticker/price",
            json!({"symbol": "LTCBTC", "price": "0.1"}),
        );

        let md = get_ticker_price(&api, Some("ltcbtc")).await;

        assert!(md.starts_with("# 💰 LTCBTC Price\n\n"));
        assert!(md.contains("**Current Price:** $0.10000000"));

        let call = api.single_call();
        assert_eq!(call.param("symbol"), Some("LTCBTC"));
        assert!(!call.signed);
    }

    #[tokio::test]
    async fn test_ticker_all_symbols_truncated_to_twenty() {
        let tickers: Vec<_> = (0..25)
            .map(|i| json!({"symbol": format!("SYM{}USDT", i), "price": "1.5"}))
            .collect();
        let api = MockApi::anonymous().respond("/api/v3/ticker/price", json!(tickers));

        let md = get_ticker_price(&api, None).await;

        assert!(md.starts_with("# 💰 Price Tickers (Top 20)"));
        assert!(md.contains("| SYM19USDT | $1.50000000 |"));
        assert!(!md.contains("SYM20USDT"));
        assert!(md.contains("_Showing 20 of 25 symbols. Specify a symbol for detailed info._"));
        assert!(api.single_call().params.is_empty());
    }

    #[tokio::test]
    async fn test_ticker_without_credentials_still_works() {
        let api = MockApi::anonymous().respond(
            "/api/v3/ticker/price",
            json!([{"symbol": "BTCUSDT", "price": "42000.00"}]),
        );

        let md = get_ticker_price(&api, Some("  ")).await;
        assert!(md.contains("| BTCUSDT | $42000.00000000 |"));
        assert!(!md.contains("_Showing"));
    }

    #[tokio::test]
    async fn test_24hr_ticker_statistics() {
        let api = MockApi::anonymous().respond(
            "/api/v3/ticker/24hr",
            json!({
                "symbol": "BTCUSDT",
                "priceChange": "-120.5",
                "priceChangePercent": "-0.286",
                "highPrice": "43000",
                "lowPrice": "41000",
                "lastPrice": "42000",
                "volume": "1520.123",
                "quoteVolume": "1234.5",
                "count": 98765
            }),
        );

        let md = get_24hr_ticker(&api, "btcusdt").await;

        assert!(md.starts_with("# 📊 24hr Statistics for BTCUSDT"));
        assert!(md.contains("**Price Change:** $-120.50000000 (-0.29%)"));
        assert!(md.contains("**Volume:** 1520.12 BTC"));
        assert!(md.contains("**Quote Volume:** $1234.50"));
        assert!(md.contains("**Number of Trades:** 98765"));
    }

    #[tokio::test]
    async fn test_market_failure_renders_single_line() {
        let api = MockApi::anonymous().fail(
            "/api/v3/ticker/24hr",
            ApiError::Http {
                status: 400,
                body: "{\"code\":-1121,\n\"msg\":\"Invalid symbol.\"}".to_string(),
            },
        );

        let md = get_24hr_ticker(&api, "NOPE").await;

        assert!(md.starts_with("❌ Failed to fetch 24hr ticker: HTTP 400:"));
        assert!(md.contains("Invalid symbol."));
        assert!(!md.contains('\n'));
    }
}
