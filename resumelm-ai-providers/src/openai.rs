//! OpenAI provider implementation.

use crate::provider::{bearer_header, Provider, ProviderConfig, ProviderError};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

/// OpenAI provider.
#[derive(Debug)]
pub struct OpenAIProvider {
    config: ProviderConfig,
    client: Client,
    auth: HeaderValue,
}

impl OpenAIProvider {
    /// Default API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";

    /// Environment variable holding the server key.
    pub const ENV_KEY: &'static str = "OPENAI_API_KEY";

    /// Create a new OpenAI provider with an API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderError> {
        Self::from_config(ProviderConfig::new().with_api_key(api_key))
    }

    /// Create from configuration.
    pub fn from_config(config: ProviderConfig) -> Result<Self, ProviderError> {
        let auth = bearer_header(config.require_api_key(Self::ENV_KEY)?)?;
        Ok(Self {
            client: config.build_client(),
            config,
            auth,
        })
    }
}

impl Provider for OpenAIProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn base_url(&self) -> &str {
        Self::DEFAULT_BASE_URL
    }

    fn client(&self) -> &Client {
        &self.client
    }

    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.auth.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }
}
