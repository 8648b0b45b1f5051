//! Resolved clients and the provider dispatch table.

use crate::env::ServerEnv;
use crate::provider::{BoxedProvider, ProviderError};
use crate::{AnthropicProvider, OpenAIProvider, OpenRouterProvider};
use reqwest::header::HeaderMap;
use reqwest::Client;
use resumelm_ai_models::ProviderId;
use std::fmt;
use std::sync::Arc;

/// Where the credential of a resolved client came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialOrigin {
    /// Server key of the provider that serves the request.
    ServerEnv {
        /// Variable the key was read from.
        env_key: &'static str,
    },
    /// Server key of another provider, taken after the requested one had none.
    Fallback {
        /// Provider that was requested.
        from: ProviderId,
        /// Variable the key was read from.
        env_key: &'static str,
    },
    /// Key the user saved in settings.
    UserKey {
        /// Provider the key belongs to.
        service: ProviderId,
    },
}

/// A provider client bound to one model and one credential.
///
/// Created per request and dropped afterwards. Building one performs no
/// network I/O.
#[derive(Clone)]
pub struct ResolvedClient {
    provider_id: ProviderId,
    provider: BoxedProvider,
    model_id: String,
    origin: CredentialOrigin,
}

impl ResolvedClient {
    /// Provider that will serve the request.
    #[must_use]
    pub fn provider_id(&self) -> ProviderId {
        self.provider_id
    }

    /// Provider name (e.g. "openrouter").
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Model id sent to the provider.
    #[must_use]
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Credential origin.
    #[must_use]
    pub fn origin(&self) -> CredentialOrigin {
        self.origin
    }

    /// Base URL of the provider API.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.provider.base_url()
    }

    /// Headers to attach to every request, including auth.
    #[must_use]
    pub fn headers(&self) -> HeaderMap {
        self.provider.default_headers()
    }

    /// HTTP client for the provider.
    #[must_use]
    pub fn http_client(&self) -> &Client {
        self.provider.client()
    }

    /// Underlying provider.
    #[must_use]
    pub fn provider(&self) -> &BoxedProvider {
        &self.provider
    }

    /// Full identifier, e.g. `openai:gpt-4o-mini`.
    #[must_use]
    pub fn identifier(&self) -> String {
        format!("{}:{}", self.provider_name(), self.model_id)
    }
}

impl fmt::Debug for ResolvedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedClient")
            .field("provider", &self.provider_id)
            .field("model", &self.model_id)
            .field("origin", &self.origin)
            .finish()
    }
}

/// Build a client for `provider` serving `model_id` with `credential`.
///
/// This is the only place provider clients are constructed. An empty
/// credential is rejected.
pub fn build_client(
    provider: ProviderId,
    model_id: &str,
    credential: &str,
    origin: CredentialOrigin,
    env: &ServerEnv,
) -> Result<ResolvedClient, ProviderError> {
    let built: BoxedProvider = match provider {
        ProviderId::OpenAI => Arc::new(OpenAIProvider::new(credential)?),
        ProviderId::Anthropic => Arc::new(AnthropicProvider::new(credential)?),
        ProviderId::OpenRouter => {
            Arc::new(OpenRouterProvider::new(credential)?.with_referer(env.referer())?)
        }
    };

    tracing::debug!(
        provider = %provider,
        model = model_id,
        origin = ?origin,
        "Built provider client"
    );

    Ok(ResolvedClient {
        provider_id: provider,
        provider: built,
        model_id: model_id.to_string(),
        origin,
    })
}
