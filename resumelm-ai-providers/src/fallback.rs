//! Server-key fallback chain.
//!
//! When a request may run on server credentials but the preferred provider
//! has no key, the resolver walks this list in order. OpenAI comes before
//! Anthropic.

use crate::env::ServerEnv;
use resumelm_ai_models::ProviderId;

/// One entry of the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackTarget {
    /// Provider to call.
    pub provider: ProviderId,
    /// Server variable holding its key.
    pub env_key: &'static str,
    /// Low-cost model used when falling back to this provider.
    pub default_model: &'static str,
}

/// Ordered fallback chain.
pub static FALLBACK_CHAIN: [FallbackTarget; 2] = [
    FallbackTarget {
        provider: ProviderId::OpenAI,
        env_key: "OPENAI_API_KEY",
        default_model: "gpt-4o-mini",
    },
    FallbackTarget {
        provider: ProviderId::Anthropic,
        env_key: "ANTHROPIC_API_KEY",
        default_model: "claude-haiku-4-5-20251001",
    },
];

impl FallbackTarget {
    /// The server key for this target, if configured.
    pub fn key<'a>(&self, env: &'a ServerEnv) -> Option<&'a str> {
        env.get(self.env_key)
    }
}

/// Env variable names of the whole chain, in order.
pub fn chain_env_keys() -> Vec<&'static str> {
    FALLBACK_CHAIN.iter().map(|t| t.env_key).collect()
}

/// First chain entry with a configured key.
pub fn first_available(env: &ServerEnv) -> Option<(&'static FallbackTarget, &str)> {
    FALLBACK_CHAIN
        .iter()
        .find_map(|target| target.key(env).map(|key| (target, key)))
}

/// Chain entries other than `provider`, in order.
pub fn alternatives_to(provider: ProviderId) -> impl Iterator<Item = &'static FallbackTarget> {
    FALLBACK_CHAIN.iter().filter(move |t| t.provider != provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumelm_ai_models::{get_model_by_id, provider_info};

    #[test]
    fn test_chain_matches_registry() {
        for target in &FALLBACK_CHAIN {
            assert_eq!(provider_info(target.provider).env_key, target.env_key);
            let model = get_model_by_id(target.default_model).unwrap();
            assert_eq!(model.provider, target.provider);
            assert!(model.features.is_free);
        }
    }

    #[test]
    fn test_openai_precedes_anthropic() {
        let env = ServerEnv::new()
            .with_var("ANTHROPIC_API_KEY", "sk-ant")
            .with_var("OPENAI_API_KEY", "sk-oai");

        let (target, key) = first_available(&env).unwrap();
        assert_eq!(target.provider, ProviderId::OpenAI);
        assert_eq!(key, "sk-oai");
    }

    #[test]
    fn test_first_available_skips_missing() {
        let env = ServerEnv::new().with_var("ANTHROPIC_API_KEY", "sk-ant");
        let (target, _) = first_available(&env).unwrap();
        assert_eq!(target.default_model, "claude-haiku-4-5-20251001");

        assert!(first_available(&ServerEnv::new()).is_none());
    }

    #[test]
    fn test_alternatives_to() {
        let alternatives: Vec<_> = alternatives_to(ProviderId::Anthropic)
            .map(|t| t.provider)
            .collect();
        assert_eq!(alternatives, vec![ProviderId::OpenAI]);

        assert_eq!(alternatives_to(ProviderId::OpenRouter).count(), 2);
    }

    #[test]
    fn test_chain_env_keys() {
        assert_eq!(chain_env_keys(), vec!["OPENAI_API_KEY", "ANTHROPIC_API_KEY"]);
    }
}
