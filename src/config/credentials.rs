//! API Credential Management
//!
//! Binance API credentials loaded from environment variables.
//! Credentials are never logged and are masked when displayed.

use std::fmt;

/// Secure string wrapper that masks sensitive data in logs
///
/// Debug output shows only `SecretString(***)` and Display shows the
/// truncated form `first4...last4`.
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: String) -> Self {
        SecretString(value)
    }

    /// Returns a reference to the inner string
    ///
    /// Only use this when actually building a request. Never log the value.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Masked form for safe logging: `first4...last4`
    pub fn masked(&self) -> String {
        let s = &self.0;
        if s.chars().count() <= 8 {
            return "***".to_string();
        }
        let head: String = s.chars().take(4).collect();
        let tail: String = s
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("{}...{}", head, tail)
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretString(***)")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        SecretString::new(s)
    }
}

/// Binance API key and secret
///
/// Either half may be absent; private tools require both.
#[derive(Clone, Debug, Default)]
pub struct Credentials {
    /// Binance API key (public identifier)
    pub api_key: Option<SecretString>,
    /// Binance secret key (private signing key)
    pub api_secret: Option<SecretString>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: non_empty(api_key.into()),
            api_secret: non_empty(api_secret.into()),
        }
    }

    /// Reads `BINANCE_API_KEY` and `BINANCE_API_SECRET` through `lookup`.
    ///
    /// Values are trimmed; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: lookup("BINANCE_API_KEY").and_then(non_empty),
            api_secret: lookup("BINANCE_API_SECRET").and_then(non_empty),
        }
    }

    /// True when both the key and the secret are present
    pub fn is_complete(&self) -> bool {
        self.api_key.is_some() && self.api_secret.is_some()
    }
}

fn non_empty(value: String) -> Option<SecretString> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(SecretString::new(trimmed.to_string()))
    }
}
