//! Provider clients and credential resolution for resumelm-ai.
//!
//! This crate turns a request config into a client bound to one provider,
//! one model and one credential:
//!
//! - **OpenAI** - direct API
//! - **Anthropic** - direct API
//! - **OpenRouter** - routed `vendor/model` ids
//!
//! ## Example
//!
//! ```rust
//! use resumelm_ai_models::{AiConfig, ProviderId};
//! use resumelm_ai_providers::{ClientResolver, ServerEnv};
//!
//! let env = ServerEnv::from_pairs([("OPENAI_API_KEY", "sk-server")]);
//! let resolver = ClientResolver::new(env);
//!
//! // Anonymous request: default low-cost model on the server key.
//! let client = resolver.initialize_ai_client(None, false, false)?;
//! assert_eq!(client.model_id(), "gpt-4o-mini");
//!
//! // Paid model: the user's own key is required.
//! let config = AiConfig::new("claude-sonnet-4-20250514")
//!     .with_api_key(ProviderId::Anthropic, "sk-ant-user");
//! let client = resolver.initialize_ai_client(Some(&config), false, false)?;
//! assert_eq!(client.provider_name(), "anthropic");
//! # Ok::<(), resumelm_ai_providers::ResolveError>(())
//! ```
//!
//! ## Credentials
//!
//! Server keys are read from `OPENAI_API_KEY`, `ANTHROPIC_API_KEY` and
//! `OPENROUTER_API_KEY`. `NEXT_PUBLIC_SITE_URL` is sent to OpenRouter as the
//! referer. The environment is captured once into a [`ServerEnv`].

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod anthropic;
mod client;
mod env;
mod error;
pub mod fallback;
mod openai;
mod openrouter;
mod provider;
mod resolver;

pub use anthropic::AnthropicProvider;
pub use client::{build_client, CredentialOrigin, ResolvedClient};
pub use env::{ServerEnv, SITE_URL_ENV};
pub use error::{ResolveError, ResolveResult};
pub use fallback::{FallbackTarget, FALLBACK_CHAIN};
pub use openai::OpenAIProvider;
pub use openrouter::{OpenRouterProvider, APP_TITLE};
pub use provider::{BoxedProvider, Provider, ProviderConfig, ProviderError};
pub use resolver::{initialize_ai_client, ClientResolver};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        initialize_ai_client, BoxedProvider, ClientResolver, CredentialOrigin, Provider,
        ProviderError, ResolveError, ResolvedClient, ServerEnv,
    };
}
