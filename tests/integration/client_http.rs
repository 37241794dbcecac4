// BinanceClient request/response behavior over real HTTP

use binance_assistant::binance::params::hmac_sha256_hex;
use binance_assistant::binance::{BinanceApi, BinanceClient, QueryParams, API_KEY_HEADER};
use binance_assistant::config::{BinanceConfig, Credentials, Environment};
use binance_assistant::error::ApiError;
use binance_assistant::tools::get_ticker_price;
use reqwest::Method;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves exactly one request with `status` and `body`, returning the raw request head
async fn one_shot_server(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            buf.extend_from_slice(&chunk[..n]);
            if n == 0 || buf.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&buf).to_string()
    });

    (base_url, handle)
}

fn client(base_url: &str, credentials: Credentials) -> BinanceClient {
    let config = BinanceConfig::new(Environment::Production, credentials)
        .with_base_url(base_url)
        .with_announcement_url(format!("{}/bapi/notice", base_url));
    BinanceClient::new(config).unwrap()
}

/// Request target (path and query) from the first request line
fn request_target(raw: &str) -> &str {
    raw.lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap()
}

fn has_api_key_header(raw: &str, key: &str) -> bool {
    let expected = format!("{}: {}", API_KEY_HEADER.to_ascii_lowercase(), key);
    raw.lines()
        .any(|line| line.to_ascii_lowercase() == expected.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_public_request_without_credentials_omits_key_header() {
        let (base_url, server) =
            one_shot_server(200, r#"{"symbol":"BTCUSDT","price":"42000.00"}"#).await;
        let client = client(&base_url, Credentials::default());

        let value = client
            .request(
                Method::GET,
                "/api/v3/ticker/price",
                QueryParams::new().with("symbol", "BTCUSDT"),
                false,
            )
            .await
            .unwrap();

        assert_eq!(value["price"], "42000.00");

        let raw = server.await.unwrap();
        assert_eq!(request_target(&raw), "/api/v3/ticker/price?symbol=BTCUSDT");
        assert!(!raw.to_ascii_lowercase().contains("x-mbx-apikey"));
    }

    #[tokio::test]
    async fn test_key_header_sent_on_public_request_when_configured() {
        let (base_url, server) = one_shot_server(200, r#"[]"#).await;
        let client = client(&base_url, Credentials::new("my-key", "my-secret"));

        client
            .request(Method::GET, "/api/v3/ticker/price", QueryParams::new(), false)
            .await
            .unwrap();

        let raw = server.await.unwrap();
        assert!(has_api_key_header(&raw, "my-key"));
        assert_eq!(request_target(&raw), "/api/v3/ticker/price");
    }

    #[tokio::test]
    async fn test_signed_request_carries_timestamp_and_signature() {
        let (base_url, server) = one_shot_server(200, r#"{"balances":[]}"#).await;
        let client = client(&base_url, Credentials::new("my-key", "my-secret"));

        client
            .request(
                Method::GET,
                "/api/v3/myTrades",
                QueryParams::new().with("symbol", "BTCUSDT").with("limit", 10),
                true,
            )
            .await
            .unwrap();

        let raw = server.await.unwrap();
        let target = request_target(&raw);
        let query = target.split_once('?').unwrap().1;

        assert!(query.starts_with("symbol=BTCUSDT&limit=10&timestamp="));
        assert_eq!(query.matches("timestamp=").count(), 1);
        assert_eq!(query.matches("signature=").count(), 1);

        let (payload, signature) = query.rsplit_once("&signature=").unwrap();
        assert_eq!(signature.len(), 64);
        assert_eq!(hmac_sha256_hex("my-secret", payload).unwrap(), signature);
        assert!(has_api_key_header(&raw, "my-key"));
    }

    #[tokio::test]
    async fn test_post_is_accepted() {
        let (base_url, server) = one_shot_server(200, r#"{"ok":true}"#).await;
        let client = client(&base_url, Credentials::default());

        let value = client
            .request(Method::POST, "/api/v3/userDataStream", QueryParams::new(), false)
            .await
            .unwrap();

        assert_eq!(value["ok"], true);
        assert!(server.await.unwrap().starts_with("POST "));
    }

    #[tokio::test]
    async fn test_non_success_status_maps_to_http_error() {
        let body = r#"{"code":-1121,"msg":"Invalid symbol."}"#;
        let (base_url, server) = one_shot_server(400, body).await;
        let client = client(&base_url, Credentials::default());

        let err = client
            .request(Method::GET, "/api/v3/ticker/24hr", QueryParams::new(), false)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                body: body.to_string(),
            }
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_json_maps_to_parse_error() {
        let (base_url, server) = one_shot_server(200, "not json").await;
        let client = client(&base_url, Credentials::default());

        let err = client
            .request(Method::GET, "/api/v3/ticker/price", QueryParams::new(), false)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Parse(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unsupported_method_rejected_before_network() {
        // Nothing listens on this port; the call must fail without connecting
        let client = client("http://127.0.0.1:9", Credentials::default());

        let err = client
            .request(Method::DELETE, "/api/v3/order", QueryParams::new(), false)
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::UnsupportedMethod("DELETE".to_string()));
    }

    #[tokio::test]
    async fn test_announcements_use_page_and_rows_without_key() {
        let (base_url, server) =
            one_shot_server(200, r#"{"code":"000000","message":null,"data":[]}"#).await;
        let client = client(&base_url, Credentials::new("my-key", "my-secret"));

        let value = client.announcements(2, 5).await.unwrap();
        assert_eq!(value["code"], "000000");

        let raw = server.await.unwrap();
        assert_eq!(request_target(&raw), "/bapi/notice?page=2&rows=5");
        assert!(!raw.to_ascii_lowercase().contains("x-mbx-apikey"));
    }

    #[tokio::test]
    async fn test_tool_end_to_end_over_http() {
        let (base_url, server) =
            one_shot_server(200, r#"{"symbol":"LTCBTC","price":"0.10000000"}"#).await;
        let client = client(&base_url, Credentials::default());

        let md = get_ticker_price(&client, Some("ltcbtc")).await;

        assert!(md.contains("**Current Price:** $0.10000000"));
        assert_eq!(
            request_target(&server.await.unwrap()),
            "/api/v3/ticker/price?symbol=LTCBTC"
        );
    }

    #[tokio::test]
    async fn test_connection_failure_renders_error_line() {
        let client = client("http://127.0.0.1:9", Credentials::default());

        let md = get_ticker_price(&client, None).await;

        assert!(md.starts_with("❌ Failed to fetch ticker price:"));
        assert!(!md.contains('\n'));
    }

    #[tokio::test]
    async fn test_timeout_reports_configured_limit() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let server = tokio::spawn(async move {
            // Hold the connection open without answering
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let config = BinanceConfig::new(Environment::Production, Credentials::default())
            .with_base_url(base_url)
            .with_timeout(Duration::from_secs(1));
        let client = BinanceClient::new(config).unwrap();

        let err = client
            .request(Method::GET, "/api/v3/ticker/price", QueryParams::new(), false)
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::Timeout(1));
        assert_eq!(err.to_string(), "Request timeout after 1s");
        server.abort();
    }
}
