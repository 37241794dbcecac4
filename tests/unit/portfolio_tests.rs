// Unit tests for the portfolio distribution snapshot

use crate::mock_api::MockApi;
use binance_assistant::error::ApiError;
use binance_assistant::tools::{get_asset_distribution, NOT_CONFIGURED_MESSAGE};
use serde_json::json;

fn spot() -> serde_json::Value {
    json!({
        "makerCommission": 10, "takerCommission": 10,
        "canTrade": true, "canWithdraw": true, "canDeposit": true,
        "balances": [
            {"asset": "BNB", "free": "2", "locked": "0"},
            {"asset": "USDT", "free": "500", "locked": "0"},
            {"asset": "DOGE", "free": "0", "locked": "0"}
        ]
    })
}

fn futures() -> serde_json::Value {
    json!({
        "totalWalletBalance": "250", "totalUnrealizedProfit": "3.456",
        "totalMarginBalance": "253.456", "availableBalance": "200", "maxWithdrawAmount": "200",
        "assets": [],
        "positions": [
            {"symbol": "BTCUSDT", "positionAmt": "0.01", "entryPrice": "42000", "unrealizedProfit": "3.456", "leverage": "10", "isolated": false}
        ]
    })
}

fn margin() -> serde_json::Value {
    json!({
        "marginLevel": "999", "totalAssetOfBtc": "0.1", "totalLiabilityOfBtc": "0",
        "totalNetAssetOfBtc": "0.1", "tradeEnabled": true, "transferEnabled": true,
        "borrowEnabled": true, "userAssets": []
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_distribution_requires_credentials() {
        let api = MockApi::anonymous();
        assert_eq!(get_asset_distribution(&api).await, NOT_CONFIGURED_MESSAGE);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_distribution_all_sections() {
        let api = MockApi::authenticated()
            .respond("/api/v3/account", spot())
            .respond("/fapi/v2/account", futures())
            .respond("/sapi/v1/margin/account", margin());

        let md = get_asset_distribution(&api).await;

        assert!(md.starts_with("# 🎯 Portfolio Distribution Snapshot\n\n"));

        // Spot balances sorted by total, descending; zero balances skipped
        let usdt = md.find("- **USDT:** 500.00000000").unwrap();
        let bnb = md.find("- **BNB:** 2.00000000").unwrap();
        assert!(usdt < bnb);
        assert!(!md.contains("DOGE"));

        assert!(md.contains("- **Total Wallet Balance:** $250.00"));
        assert!(md.contains("- **Unrealized Profit:** $3.46"));
        assert!(md.contains("- **Active Positions:** 1"));
        assert!(md.contains("- **Total Net Asset (BTC):** 0.10000000"));
        assert!(md.contains("- **Margin Level:** 999.0000"));
        assert_eq!(api.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_distribution_partial_failure() {
        let api = MockApi::authenticated()
            .respond("/api/v3/account", spot())
            .fail(
                "/fapi/v2/account",
                ApiError::Http {
                    status: 401,
                    body: "futures not enabled".to_string(),
                },
            )
            .respond("/sapi/v1/margin/account", margin());

        let md = get_asset_distribution(&api).await;

        let spot_at = md.find("## 💼 Spot Account").unwrap();
        let futures_at = md.find("## 🎯 USDT-M Futures").unwrap();
        let margin_at = md.find("## 🔄 Cross Margin").unwrap();
        assert!(spot_at < futures_at && futures_at < margin_at);

        assert!(md.contains("## 🎯 USDT-M Futures\n\n❌ Error: HTTP 401: futures not enabled\n\n"));
        assert!(md.contains("- **USDT:** 500.00000000"));
        assert!(md.contains("- **Margin Level:** 999.0000"));
    }

    #[tokio::test]
    async fn test_distribution_empty_spot() {
        let mut body = spot();
        body["balances"] = json!([]);
        let api = MockApi::authenticated()
            .respond("/api/v3/account", body)
            .respond("/fapi/v2/account", futures())
            .respond("/sapi/v1/margin/account", margin());

        let md = get_asset_distribution(&api).await;
        assert!(md.contains("## 💼 Spot Account\n\n_No spot balances_\n"));
    }
}
