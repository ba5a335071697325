//! Kalshi exchange credentials and endpoints.

use super::diagnostic::Diagnostics;
use super::env::EnvReader;
use crate::error::ConfigError;

const PRODUCTION_API_URL: &str = "https://trading-api.kalshi.com";
const PRODUCTION_WS_URL: &str = "wss://trading-api.kalshi.com/trade-api/ws/v2";
const SANDBOX_API_URL: &str = "https://api-sandbox.kalshi.com";
const SANDBOX_WS_URL: &str = "wss://trading-api-sandbox.kalshi.com/trade-api/ws/v2";

/// Kalshi API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeConfig {
    pub api_key: String,
    pub api_secret: String,
    /// Route traffic to the Kalshi sandbox.
    pub sandbox: bool,
    /// REST endpoint, derived from `sandbox`.
    pub base_url: String,
    /// WebSocket endpoint, derived from `sandbox`.
    pub ws_url: String,
}

impl ExchangeConfig {
    pub(crate) fn from_env(reader: &mut EnvReader<'_>) -> Self {
        let sandbox = reader.flag("KALSHI_SANDBOX", false);
        let (base_url, ws_url) = endpoints(sandbox);

        Self {
            api_key: reader.secret("KALSHI_API_KEY"),
            api_secret: reader.secret("KALSHI_API_SECRET"),
            sandbox,
            base_url: base_url.to_string(),
            ws_url: ws_url.to_string(),
        }
    }

    pub(crate) fn validate(&self, diagnostics: &mut Diagnostics) {
        if self.api_key.is_empty() {
            diagnostics.push(ConfigError::MissingField {
                field: "KALSHI_API_KEY",
            });
        }
        if self.api_secret.is_empty() {
            diagnostics.push(ConfigError::MissingField {
                field: "KALSHI_API_SECRET",
            });
        }
    }
}

/// REST and WebSocket endpoints for the selected environment.
#[must_use]
pub fn endpoints(sandbox: bool) -> (&'static str, &'static str) {
    if sandbox {
        (SANDBOX_API_URL, SANDBOX_WS_URL)
    } else {
        (PRODUCTION_API_URL, PRODUCTION_WS_URL)
    }
}
