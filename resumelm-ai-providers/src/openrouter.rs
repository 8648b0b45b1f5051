//! OpenRouter provider implementation.
//!
//! OpenRouter speaks the OpenAI wire format and routes `vendor/model` ids to
//! the upstream vendor.

use crate::provider::{bearer_header, Provider, ProviderConfig, ProviderError};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

/// Application name reported to OpenRouter.
pub const APP_TITLE: &str = "ResumeLM";

/// OpenRouter provider.
#[derive(Debug)]
pub struct OpenRouterProvider {
    config: ProviderConfig,
    client: Client,
    auth: HeaderValue,
    referer: HeaderValue,
}

impl OpenRouterProvider {
    /// Default API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://openrouter.ai/api/v1";

    /// Environment variable holding the server key.
    pub const ENV_KEY: &'static str = "OPENROUTER_API_KEY";

    /// Referer used when no site URL is configured.
    pub const DEFAULT_REFERER: &'static str = "http://localhost:3000";

    /// Create a new OpenRouter provider.
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
            referer: HeaderValue::from_static(Self::DEFAULT_REFERER),
        })
    }

    /// Set the `HTTP-Referer` attribution header.
    pub fn with_referer(mut self, referer: &str) -> Result<Self, ProviderError> {
        self.referer =
            HeaderValue::from_str(referer).map_err(|_| ProviderError::InvalidHeader("HTTP-Referer"))?;
        Ok(self)
    }
}

impl Provider for OpenRouterProvider {
    fn name(&self) -> &str {
        "openrouter"
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
        // OpenRouter attribution
        headers.insert("HTTP-Referer", self.referer.clone());
        headers.insert("X-Title", HeaderValue::from_static(APP_TITLE));
        headers
    }

    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }
}
