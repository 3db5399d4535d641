//! Auto-fill configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// Default provider base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// Default number of search candidates inspected per lookup.
pub const DEFAULT_CANDIDATES: usize = 3;

/// Upper bound on candidates, whatever the environment says.
pub const MAX_CANDIDATES: usize = 3;

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutofillConfig {
    /// Provider API key. Without one every lookup fails fast.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Search results to request and inspect, 1..=MAX_CANDIDATES.
    pub candidates: usize,
    /// Timeout applied to each outbound request.
    pub timeout: Duration,
}

impl Default for AutofillConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            candidates: DEFAULT_CANDIDATES,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl AutofillConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `SPOONACULAR_API_KEY`: provider API key (auto-fill disabled when unset)
    /// - `LARDER_AUTOFILL_BASE_URL`: provider base URL
    /// - `LARDER_AUTOFILL_CANDIDATES`: candidates per lookup (default: 3, max: 3)
    /// - `LARDER_AUTOFILL_TIMEOUT_MS`: per-request timeout (default: 5000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("SPOONACULAR_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let base_url =
            env::var("LARDER_AUTOFILL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let candidates = match env::var("LARDER_AUTOFILL_CANDIDATES") {
            Ok(v) => parse_var::<usize>("LARDER_AUTOFILL_CANDIDATES", &v)?,
            Err(_) => DEFAULT_CANDIDATES,
        };

        let timeout_ms = match env::var("LARDER_AUTOFILL_TIMEOUT_MS") {
            Ok(v) => parse_var::<u64>("LARDER_AUTOFILL_TIMEOUT_MS", &v)?,
            Err(_) => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            api_key,
            base_url,
            candidates: candidates.clamp(1, MAX_CANDIDATES),
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    /// Config with an API key and defaults for everything else.
    pub fn with_api_key(api_key: &str) -> Self {
        Self {
            api_key: Some(api_key.to_string()),
            ..Self::default()
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var() {
        assert_eq!(parse_var::<usize>("X", " 2 ").unwrap(), 2);
        assert!(matches!(
            parse_var::<u64>("X", "soon"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_with_api_key_uses_defaults() {
        let config = AutofillConfig::with_api_key("k");
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.candidates, DEFAULT_CANDIDATES);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
