//! Frontend configuration module
//!
//! This module provides configuration for the API endpoint and request
//! behavior of the web client.

use std::time::Duration;

/// Fallback API base URL when none is provided at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Fixed timeout applied to every outgoing request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Frontend configuration for the REST backend connection.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL all API paths are joined onto.
    pub api_base_url: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("VERIDA_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Get the per-request timeout
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url.is_empty());
        assert!(config.api_base_url.starts_with("http"));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_frontend_config_new() {
        let config = FrontendConfig::new();
        assert!(config.api_base_url().ends_with("/api"));
    }

    #[test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.api_base_url(), config2.api_base_url());
        assert_eq!(config1.request_timeout(), config2.request_timeout());
    }
}
