//! # resumelm-ai
//!
//! Model selection and credential resolution for ResumeLM's AI features
//! (resume assist, profile extraction, career chat and reports).
//!
//! Every LLM-backed feature asks the same question: given the model the user
//! picked, their subscription, and the keys they saved, which provider and
//! credential should this request run on? This crate answers it.
//!
//! ## Quick Start
//!
//! ```rust
//! use resumelm_ai::prelude::*;
//!
//! let env = ServerEnv::from_pairs([("OPENROUTER_API_KEY", "sk-or")]);
//! let resolver = ClientResolver::new(env);
//!
//! let config = AiConfig::new("openai/gpt-oss-120b");
//! assert!(is_model_available(&config.model, false, &config.api_keys));
//!
//! let client = resolver.initialize_ai_client(Some(&config), false, false)?;
//! assert_eq!(client.provider_name(), "openrouter");
//! # Ok::<(), ResolveError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`resumelm_ai_models`] - registry, availability, request config
//! - [`resumelm_ai_providers`] - provider clients, fallback chain, resolver
//!
//! ## Errors
//!
//! Resolution fails with a [`ResolveError`]. Route handlers should show
//! [`ResolveError::user_message`] to users and log the error itself.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub use resumelm_ai_models as models;
pub use resumelm_ai_providers as providers;

pub use resumelm_ai_models::{
    check_model_availability, get_model_by_id, get_model_provider, get_provider_by_id,
    group_models_by_provider, is_model_available, AiConfig, ApiKey, Availability,
    AvailabilityReason, ModelGroup, ModelInfo, ProviderId, ProviderInfo, StoredPreferences,
};
pub use resumelm_ai_providers::{
    initialize_ai_client, ClientResolver, CredentialOrigin, ResolveError, ResolveResult,
    ResolvedClient, ServerEnv,
};

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Does nothing if a global subscriber is already set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        check_model_availability, get_model_by_id, group_models_by_provider, initialize_ai_client,
        is_model_available, AiConfig, ApiKey, Availability, ClientResolver, CredentialOrigin,
        ProviderId, ResolveError, ResolvedClient, ServerEnv, StoredPreferences,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_init_tracing_twice() {
        super::init_tracing();
        super::init_tracing();
    }

    #[test]
    fn test_stored_preferences_to_client() {
        let config = StoredPreferences::new(
            None,
            Some(r#"[{"service":"anthropic","key":"sk-ant-user"}]"#.to_string()),
        )
        .into_config();

        let client = ClientResolver::new(ServerEnv::new())
            .initialize_ai_client(Some(&config), false, false)
            .unwrap();

        assert_eq!(client.model_id(), "claude-sonnet-4-20250514");
        assert_eq!(
            client.origin(),
            CredentialOrigin::UserKey {
                service: ProviderId::Anthropic
            }
        );
    }

    #[test]
    fn test_selector_listing() {
        let groups = group_models_by_provider();
        let unavailable: Vec<_> = groups
            .iter()
            .flat_map(|g| g.models.iter())
            .filter(|m| !is_model_available(m.id, false, &[]))
            .map(|m| m.id)
            .collect();

        assert_eq!(unavailable, vec!["gpt-4.1", "gpt-5", "claude-sonnet-4-20250514"]);
    }
}
