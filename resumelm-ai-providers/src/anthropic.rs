//! Anthropic provider implementation.

use crate::provider::{Provider, ProviderConfig, ProviderError};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;

/// Anthropic provider.
#[derive(Debug)]
pub struct AnthropicProvider {
    config: ProviderConfig,
    client: Client,
    api_key: HeaderValue,
}

impl AnthropicProvider {
    /// Default API version.
    pub const DEFAULT_API_VERSION: &'static str = "2023-06-01";

    /// Default API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.anthropic.com";

    /// Environment variable holding the server key.
    pub const ENV_KEY: &'static str = "ANTHROPIC_API_KEY";

    /// Create a new Anthropic provider with an API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderError> {
        Self::from_config(ProviderConfig::new().with_api_key(api_key))
    }

    /// Create from configuration.
    pub fn from_config(config: ProviderConfig) -> Result<Self, ProviderError> {
        let mut api_key = HeaderValue::from_str(config.require_api_key(Self::ENV_KEY)?)
            .map_err(|_| ProviderError::InvalidHeader("x-api-key"))?;
        api_key.set_sensitive(true);

        Ok(Self {
            client: config.build_client(),
            config,
            api_key,
        })
    }
}

impl Provider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn base_url(&self) -> &str {
        Self::DEFAULT_BASE_URL
    }

    fn client(&self) -> &Client {
        &self.client
    }

    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert("x-api-key", self.api_key.clone());
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(Self::DEFAULT_API_VERSION),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        headers
    }

    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anthropic_provider_new() {
        let provider = AnthropicProvider::new("sk-ant-test").unwrap();
        assert_eq!(provider.name(), "anthropic");
        assert!(provider.is_configured());
    }

    #[test]
    fn test_anthropic_provider_base_url() {
        let provider = AnthropicProvider::new("key").unwrap();
        assert_eq!(provider.base_url(), "https://api.anthropic.com");
    }

    #[test]
    fn test_anthropic_provider_headers() {
        let provider = AnthropicProvider::new("sk-ant-test").unwrap();
        let headers = provider.default_headers();

        assert_eq!(headers.get("x-api-key").unwrap(), "sk-ant-test");
        assert_eq!(headers.get("anthropic-version").unwrap(), "2023-06-01");
        assert!(headers.contains_key(CONTENT_TYPE));
    }

    #[test]
    fn test_anthropic_key_header_is_sensitive() {
        let provider = AnthropicProvider::new("sk-ant-test").unwrap();
        assert!(provider.default_headers().get("x-api-key").unwrap().is_sensitive());
    }

    #[test]
    fn test_anthropic_provider_missing_key() {
        let result = AnthropicProvider::from_config(ProviderConfig::new());
        assert!(matches!(
            result,
            Err(ProviderError::MissingApiKey("ANTHROPIC_API_KEY"))
        ));
    }
}
