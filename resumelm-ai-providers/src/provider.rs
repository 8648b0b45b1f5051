//! Provider trait and common configuration.
//!
//! A provider represents an AI API service with authentication and configuration.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use std::fmt;
use std::sync::Arc;

/// Provider trait - provides authenticated access to an AI API.
///
/// Providers handle:
/// - Authentication (API keys)
/// - Base URLs and endpoint configuration
/// - HTTP client configuration
pub trait Provider: Send + Sync + fmt::Debug {
    /// Provider name (e.g., "openai", "anthropic").
    fn name(&self) -> &str;

    /// Base URL for the API.
    fn base_url(&self) -> &str;

    /// Get an HTTP client configured for this provider.
    fn client(&self) -> &Client;

    /// Get default headers for requests.
    fn default_headers(&self) -> HeaderMap;

    /// Check if the provider is configured (has credentials).
    fn is_configured(&self) -> bool {
        true
    }
}

/// Type alias for boxed providers.
pub type BoxedProvider = Arc<dyn Provider>;

/// Common configuration for providers.
#[derive(Clone, Default)]
pub struct ProviderConfig {
    /// API key for authentication.
    pub api_key: Option<String>,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ProviderConfig {
    /// Create a new empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Return the API key, rejecting missing or empty values.
    pub fn require_api_key(&self, env_key: &'static str) -> Result<&str, ProviderError> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ProviderError::MissingApiKey(env_key)),
        }
    }

    /// Build an HTTP client with this config.
    pub fn build_client(&self) -> Client {
        Client::builder().build().unwrap_or_default()
    }
}

/// `Authorization: Bearer <key>` header.
pub(crate) fn bearer_header(key: &str) -> Result<HeaderValue, ProviderError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", key))
        .map_err(|_| ProviderError::InvalidHeader("authorization"))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Provider error types.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Missing API key.
    #[error("Missing API key: {0}")]
    MissingApiKey(&'static str),

    /// A credential or setting could not be encoded as a header.
    #[error("Invalid value for header {0}")]
    InvalidHeader(&'static str),
}
