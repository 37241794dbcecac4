// In-memory BinanceApi double
//
// Responses are canned per endpoint; every call is recorded so tests can
// assert on the parameters a tool sent.

use async_trait::async_trait;
use binance_assistant::binance::{BinanceApi, QueryParams};
use binance_assistant::error::ApiError;
use reqwest::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

pub const ANNOUNCEMENTS: &str = "announcements";

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub endpoint: String,
    pub params: Vec<(String, String)>,
    pub signed: bool,
}

impl RecordedCall {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

pub struct MockApi {
    credentials: bool,
    responses: Mutex<HashMap<String, Result<Value, ApiError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockApi {
    /// Double with both API key and secret configured
    pub fn authenticated() -> Self {
        Self {
            credentials: true,
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Double with no credentials
    pub fn anonymous() -> Self {
        Self {
            credentials: false,
            ..Self::authenticated()
        }
    }

    pub fn respond(self, endpoint: &str, body: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), Ok(body));
        self
    }

    pub fn fail(self, endpoint: &str, err: ApiError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), Err(err));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The only recorded call; panics when there is not exactly one
    pub fn single_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {:?}", calls);
        calls[0].clone()
    }

    fn reply(&self, call: RecordedCall) -> Result<Value, ApiError> {
        let endpoint = call.endpoint.clone();
        self.calls.lock().unwrap().push(call);
        self.responses
            .lock()
            .unwrap()
            .get(&endpoint)
            .cloned()
            .unwrap_or_else(|| {
                Err(ApiError::Http {
                    status: 404,
                    body: format!("no canned response for {}", endpoint),
                })
            })
    }
}

#[async_trait]
impl BinanceApi for MockApi {
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: QueryParams,
        signed: bool,
    ) -> Result<Value, ApiError> {
        self.reply(RecordedCall {
            method,
            endpoint: endpoint.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            signed,
        })
    }

    async fn announcements(&self, page: u32, rows: u32) -> Result<Value, ApiError> {
        self.reply(RecordedCall {
            method: Method::GET,
            endpoint: ANNOUNCEMENTS.to_string(),
            params: vec![
                ("page".to_string(), page.to_string()),
                ("rows".to_string(), rows.to_string()),
            ],
            signed: false,
        })
    }

    fn has_credentials(&self) -> bool {
        self.credentials
    }
}
