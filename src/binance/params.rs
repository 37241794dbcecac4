//! Query parameters and request signing
//!
//! Binance signs the exact URL-encoded query string, so parameters keep their
//! insertion order from construction through to the wire.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::ApiError;

type HmacSha256 = Hmac<Sha256>;

pub const TIMESTAMP_PARAM: &str = "timestamp";
pub const SIGNATURE_PARAM: &str = "signature";

/// Ordered query parameters with map-like insertion
///
/// Inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl ToString) -> &mut Self {
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
        self
    }

    /// Inserts only when `value` is present
    pub fn insert_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(idx).1)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `application/x-www-form-urlencoded` rendering in insertion order
    pub fn to_query_string(&self) -> String {
        let mut url = reqwest::Url::parse("http://localhost/").expect("static URL is valid");
        if !self.pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(self.iter());
        }
        url.query().unwrap_or_default().to_string()
    }

    /// Appends `timestamp` and `signature`, replacing any previous values.
    ///
    /// Returns the query string that was signed, which is also what gets sent
    /// minus the trailing signature pair.
    pub fn sign(&mut self, secret: &str, timestamp_ms: i64) -> Result<String, ApiError> {
        self.remove(SIGNATURE_PARAM);
        self.remove(TIMESTAMP_PARAM);
        self.insert(TIMESTAMP_PARAM, timestamp_ms);

        let payload = self.to_query_string();
        let signature = hmac_sha256_hex(secret, &payload)?;
        self.insert(SIGNATURE_PARAM, signature);

        Ok(payload)
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            let key: String = k.into();
            params.insert(&key, v);
        }
        params
    }
}

/// Lowercase hex HMAC-SHA256 of `payload` keyed with `secret`
pub fn hmac_sha256_hex(secret: &str, payload: &str) -> Result<String, ApiError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| ApiError::Signing(format!("Invalid secret key: {}", e)))?;
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
