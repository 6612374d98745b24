//! # Widget Configuration
//!
//! Configuration for the order gateway.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TABLESIDE_API_URL=https://orders.example.com                       │
//! │     TABLESIDE_TIMEOUT_SECS=10                                          │
//! │                                                                         │
//! │  2. Default Values (lowest priority)                                   │
//! │     http://localhost:5000, 30 second timeout                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The endpoint paths themselves (`/order`, `/call_waiter/<id>`,
//! `/request_bill/<id>`) are part of the backend contract and are not
//! configurable.

use std::time::Duration;

use tracing::{debug, warn};

/// Environment variable overriding the backend base URL.
pub const ENV_API_URL: &str = "TABLESIDE_API_URL";

/// Environment variable overriding the request timeout, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "TABLESIDE_TIMEOUT_SECS";

/// Default backend base URL (the development server).
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Order gateway configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the restaurant backend; endpoint paths are appended.
    pub base_url: String,

    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Creates a config pointing at the given backend with the default
    /// timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Resolves configuration from the environment, falling back to
    /// defaults.
    ///
    /// An unparsable `TABLESIDE_TIMEOUT_SECS` is logged and ignored rather
    /// than refused: a misconfigured host should still be able to order.
    pub fn from_env() -> Self {
        let base_url = match std::env::var(ENV_API_URL) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_API_URL.to_string(),
        };

        let timeout = match std::env::var(ENV_TIMEOUT_SECS) {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(value = %raw, "ignoring invalid {}", ENV_TIMEOUT_SECS);
                    DEFAULT_TIMEOUT
                }
            },
            Err(_) => DEFAULT_TIMEOUT,
        };

        let config = ApiConfig { base_url, timeout };
        debug!(base_url = %config.base_url, timeout_secs = config.timeout.as_secs(), "api config resolved");
        config
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_new_keeps_default_timeout() {
        let config = ApiConfig::new("https://orders.example.com");
        assert_eq!(config.base_url, "https://orders.example.com");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }
}
