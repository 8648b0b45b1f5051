//! Static model and provider registry.
//!
//! The registry is compiled into the binary and never mutated. Lookups
//! return `'static` references into the tables below.
//!
//! Model ids that contain a `/` (for example `openai/gpt-oss-120b`) are
//! *routed* ids: they are served through OpenRouter rather than by the
//! owning provider directly.

use crate::error::{RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator marking an OpenRouter-routed model id.
pub const ROUTING_SEPARATOR: char = '/';

/// Model used when the user has not stored a preference.
pub const DEFAULT_MODEL_ID: &str = "claude-sonnet-4-20250514";

/// Provider identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// OpenAI.
    OpenAI,
    /// Anthropic.
    Anthropic,
    /// OpenRouter (multi-provider routing).
    OpenRouter,
}

impl ProviderId {
    /// String id as stored in settings and used in the registry.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenAI => "openai",
            ProviderId::Anthropic => "anthropic",
            ProviderId::OpenRouter => "openrouter",
        }
    }

    /// Static information for this provider.
    #[must_use]
    pub fn info(&self) -> &'static ProviderInfo {
        provider_info(*self)
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = RegistryError;

    fn from_str(s: &str) -> RegistryResult<Self> {
        match s {
            "openai" => Ok(ProviderId::OpenAI),
            "anthropic" => Ok(ProviderId::Anthropic),
            "openrouter" => Ok(ProviderId::OpenRouter),
            other => Err(RegistryError::UnknownProvider(other.to_string())),
        }
    }
}

/// Static description of a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    /// Provider id.
    pub id: ProviderId,
    /// Display name.
    pub name: &'static str,
    /// Environment variable holding the server-side key.
    pub env_key: &'static str,
    /// Where users obtain their own key.
    pub api_link: Option<&'static str>,
    /// Logo asset path.
    pub logo: Option<&'static str>,
}

/// Feature flags attached to a model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModelFeatures {
    /// Usable without a user-supplied key.
    pub is_free: bool,
    /// Shown with a "Recommended" badge.
    pub is_recommended: bool,
    /// Known to be flaky upstream.
    pub is_unstable: bool,
}

impl ModelFeatures {
    const NONE: Self = Self {
        is_free: false,
        is_recommended: false,
        is_unstable: false,
    };

    const FREE: Self = Self {
        is_free: true,
        ..Self::NONE
    };

    const RECOMMENDED: Self = Self {
        is_recommended: true,
        ..Self::NONE
    };

    const UNSTABLE: Self = Self {
        is_unstable: true,
        ..Self::NONE
    };
}

/// Static description of a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    /// Model id sent to the provider.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Owning provider.
    pub provider: ProviderId,
    /// Feature flags.
    pub features: ModelFeatures,
}

impl ModelInfo {
    /// Whether this model is reached through OpenRouter.
    #[must_use]
    pub fn is_routed(&self) -> bool {
        is_routed_id(self.id)
    }

    /// Provider information for the owning provider.
    #[must_use]
    pub fn provider_info(&self) -> &'static ProviderInfo {
        provider_info(self.provider)
    }
}

/// Whether a raw model id is an OpenRouter-routed id.
#[must_use]
pub fn is_routed_id(model_id: &str) -> bool {
    model_id.contains(ROUTING_SEPARATOR)
}

static PROVIDERS: [ProviderInfo; 3] = [
    ProviderInfo {
        id: ProviderId::OpenAI,
        name: "OpenAI",
        env_key: "OPENAI_API_KEY",
        api_link: Some("https://platform.openai.com/api-keys"),
        logo: Some("/logos/openai.png"),
    },
    ProviderInfo {
        id: ProviderId::Anthropic,
        name: "Anthropic",
        env_key: "ANTHROPIC_API_KEY",
        api_link: Some("https://console.anthropic.com/settings/keys"),
        logo: Some("/logos/claude.png"),
    },
    ProviderInfo {
        id: ProviderId::OpenRouter,
        name: "OpenRouter",
        env_key: "OPENROUTER_API_KEY",
        api_link: Some("https://openrouter.ai/keys"),
        logo: Some("/logos/openrouter.png"),
    },
];

static MODELS: [ModelInfo; 8] = [
    // ---- OpenAI ----
    ModelInfo {
        id: "gpt-4o-mini",
        name: "GPT-4o Mini",
        provider: ProviderId::OpenAI,
        features: ModelFeatures::FREE,
    },
    ModelInfo {
        id: "gpt-4.1",
        name: "GPT-4.1",
        provider: ProviderId::OpenAI,
        features: ModelFeatures::NONE,
    },
    ModelInfo {
        id: "gpt-5",
        name: "GPT-5",
        provider: ProviderId::OpenAI,
        features: ModelFeatures::RECOMMENDED,
    },
    ModelInfo {
        id: "openai/gpt-oss-120b",
        name: "GPT OSS 120B",
        provider: ProviderId::OpenAI,
        features: ModelFeatures::NONE,
    },
    // ---- Anthropic ----
    ModelInfo {
        id: "claude-sonnet-4-20250514",
        name: "Claude Sonnet 4",
        provider: ProviderId::Anthropic,
        features: ModelFeatures::RECOMMENDED,
    },
    ModelInfo {
        id: "claude-haiku-4-5-20251001",
        name: "Claude Haiku 4.5",
        provider: ProviderId::Anthropic,
        features: ModelFeatures::FREE,
    },
    // ---- OpenRouter ----
    ModelInfo {
        id: "moonshotai/kimi-k2",
        name: "Kimi K2",
        provider: ProviderId::OpenRouter,
        features: ModelFeatures::NONE,
    },
    ModelInfo {
        id: "deepseek/deepseek-chat-v3.1",
        name: "DeepSeek V3.1",
        provider: ProviderId::OpenRouter,
        features: ModelFeatures::UNSTABLE,
    },
];

/// All providers in registry order.
#[must_use]
pub fn all_providers() -> &'static [ProviderInfo] {
    &PROVIDERS
}

/// All models in registry order.
#[must_use]
pub fn all_models() -> &'static [ModelInfo] {
    &MODELS
}

/// Look up a model by id.
#[must_use]
pub fn get_model_by_id(id: &str) -> Option<&'static ModelInfo> {
    MODELS.iter().find(|m| m.id == id)
}

/// Look up a provider by its string id.
#[must_use]
pub fn get_provider_by_id(id: &str) -> Option<&'static ProviderInfo> {
    PROVIDERS.iter().find(|p| p.id.as_str() == id)
}

/// Provider information for a typed id.
#[must_use]
pub fn provider_info(id: ProviderId) -> &'static ProviderInfo {
    match id {
        ProviderId::OpenAI => &PROVIDERS[0],
        ProviderId::Anthropic => &PROVIDERS[1],
        ProviderId::OpenRouter => &PROVIDERS[2],
    }
}

/// Provider that owns the given model.
#[must_use]
pub fn get_model_provider(model_id: &str) -> Option<&'static ProviderInfo> {
    get_model_by_id(model_id).map(ModelInfo::provider_info)
}

/// Models of one provider, for listing in a selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelGroup {
    /// Provider id.
    pub provider: ProviderId,
    /// Provider display name.
    pub name: &'static str,
    /// Models in registry order.
    pub models: Vec<&'static ModelInfo>,
}

/// Bucket models by owning provider, in registry order.
///
/// Providers without any model are left out.
#[must_use]
pub fn group_models_by_provider() -> Vec<ModelGroup> {
    PROVIDERS
        .iter()
        .filter_map(|provider| {
            let models: Vec<_> = MODELS.iter().filter(|m| m.provider == provider.id).collect();
            if models.is_empty() {
                None
            } else {
                Some(ModelGroup {
                    provider: provider.id,
                    name: provider.name,
                    models,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_every_model_has_a_registered_provider() {
        for model in all_models() {
            let provider = get_model_provider(model.id).unwrap();
            assert_eq!(provider.id, model.provider);
            assert!(get_provider_by_id(provider.id.as_str()).is_some());
        }
    }

    #[test]
    fn test_provider_info_matches_table() {
        for provider in all_providers() {
            assert_eq!(provider_info(provider.id), provider);
        }
    }

    #[test]
    fn test_model_ids_are_unique() {
        let mut ids: Vec<_> = all_models().iter().map(|m| m.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all_models().len());
    }

    #[test]
    fn test_default_model_is_registered() {
        assert!(get_model_by_id(DEFAULT_MODEL_ID).is_some());
    }

    #[test]
    fn test_lookup_missing() {
        assert!(get_model_by_id("gpt-2").is_none());
        assert!(get_provider_by_id("cohere").is_none());
        assert!(get_model_provider("gpt-2").is_none());
    }

    #[rstest]
    #[case("gpt-4o-mini", false)]
    #[case("openai/gpt-oss-120b", true)]
    #[case("moonshotai/kimi-k2", true)]
    #[case("claude-sonnet-4-20250514", false)]
    fn test_is_routed(#[case] id: &str, #[case] routed: bool) {
        assert_eq!(get_model_by_id(id).unwrap().is_routed(), routed);
    }

    #[rstest]
    #[case("openai", ProviderId::OpenAI)]
    #[case("anthropic", ProviderId::Anthropic)]
    #[case("openrouter", ProviderId::OpenRouter)]
    fn test_provider_id_round_trip(#[case] raw: &str, #[case] id: ProviderId) {
        assert_eq!(raw.parse::<ProviderId>().unwrap(), id);
        assert_eq!(id.to_string(), raw);
        assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{raw}\""));
    }

    #[test]
    fn test_provider_id_unknown() {
        let err = "cohere".parse::<ProviderId>().unwrap_err();
        assert_eq!(err, RegistryError::UnknownProvider("cohere".to_string()));
    }

    #[test]
    fn test_group_models_by_provider() {
        let groups = group_models_by_provider();
        let order: Vec<_> = groups.iter().map(|g| g.provider).collect();
        assert_eq!(
            order,
            vec![ProviderId::OpenAI, ProviderId::Anthropic, ProviderId::OpenRouter]
        );

        let flattened: Vec<_> = groups.iter().flat_map(|g| g.models.iter().map(|m| m.id)).collect();
        let registry: Vec<_> = all_models().iter().map(|m| m.id).collect();
        assert_eq!(flattened, registry);

        assert_eq!(groups[1].name, "Anthropic");
        assert!(groups
            .iter()
            .all(|g| g.models.iter().all(|m| m.provider == g.provider)));
    }
}
