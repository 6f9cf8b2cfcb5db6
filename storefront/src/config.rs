//! Storefront configuration.
//!
//! Environment-driven settings with sensible local defaults, resolved once
//! at store creation and carried in the environment.

/// Environment variable naming the API base URL.
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";

/// Default API base URL for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Runtime configuration for the storefront state layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Base URL of the backing API.
    pub api_base_url: String,
}

impl StorefrontConfig {
    /// Builds configuration from process environment variables, falling back
    /// to local-development defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var(API_URL_ENV)
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)] // Test assertions
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_api() {
        let config = StorefrontConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn builder_overrides_base_url() {
        let config = StorefrontConfig::default().with_api_base_url("https://shop.example.com");
        assert_eq!(config.api_base_url, "https://shop.example.com");
    }
}
