//! Transit service configuration

use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the DRT stop/departure API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitConfig {
    /// Base URL of the API (without the `/v2` suffix)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://drtapi.geek1011.net".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("drt-launcher/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for TransitConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl TransitConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        validate_base_url(&self.base_url)?;

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// Check that a base URL is non-empty and parses as an absolute http(s) URL
pub(crate) fn validate_base_url(base_url: &str) -> Result<Url, String> {
    if base_url.trim().is_empty() {
        return Err("base_url must not be empty".to_string());
    }

    let url = Url::parse(base_url.trim()).map_err(|e| format!("invalid base_url: {e}"))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(format!("base_url must be an http(s) URL: {base_url}"));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TransitConfig::default();
        assert_eq!(config.base_url, "https://drtapi.geek1011.net");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.user_agent.starts_with("drt-launcher/"));
    }

    #[test]
    fn test_testing_config() {
        let config = TransitConfig::for_testing();
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_validation_success() {
        let config = TransitConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = TransitConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_non_http_base_url() {
        let config = TransitConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = TransitConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = TransitConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: TransitConfig = serde_json::from_str(r#"{ "timeout_secs": 3 }"#).unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.base_url, "https://drtapi.geek1011.net");
    }
}
