//! Client resolution.
//!
//! Picks the provider, model and credential a request runs against. Branches
//! are checked in this order and the first match wins:
//!
//! 1. **Pro with config**: the provider's server key is required. Routed ids
//!    in the OpenAI bucket additionally need the OpenRouter server key and are
//!    sent through OpenRouter. There is no cross-provider fallback here.
//! 2. **No config**: walk the [fallback chain](crate::fallback) and use the
//!    first configured provider with its default model.
//! 3. **Config, not Pro**: free or routed models run on server keys (routed
//!    through OpenRouter, otherwise the provider's key, then the other chain
//!    providers). Any other model needs the user's own key.

use crate::client::{build_client, CredentialOrigin, ResolvedClient};
use crate::env::ServerEnv;
use crate::error::{ResolveError, ResolveResult};
use crate::fallback::{alternatives_to, chain_env_keys, first_available, FALLBACK_CHAIN};
use resumelm_ai_models::{get_model_by_id, provider_info, AiConfig, ModelInfo, ProviderId};

/// Resolves request configs into provider clients.
#[derive(Debug, Clone, Default)]
pub struct ClientResolver {
    env: ServerEnv,
}

impl ClientResolver {
    /// Create a resolver over a server environment snapshot.
    pub fn new(env: ServerEnv) -> Self {
        Self { env }
    }

    /// Create a resolver over the current process environment.
    pub fn from_env() -> Self {
        Self::new(ServerEnv::from_process())
    }

    /// The environment this resolver reads.
    #[must_use]
    pub fn env(&self) -> &ServerEnv {
        &self.env
    }

    /// Resolve a client for one request.
    ///
    /// `use_thinking` is accepted for callers that already pass it and has no
    /// effect on resolution.
    pub fn initialize_ai_client(
        &self,
        config: Option<&AiConfig>,
        is_pro: bool,
        use_thinking: bool,
    ) -> ResolveResult<ResolvedClient> {
        let _ = use_thinking;

        match config {
            Some(config) if is_pro => self.resolve_pro(config),
            None => self.resolve_default(),
            Some(config) => self.resolve_standard(config),
        }
    }

    fn resolve_pro(&self, config: &AiConfig) -> ResolveResult<ResolvedClient> {
        let model = lookup_model(&config.model)?;
        let provider = model.provider_info();

        let env_key = self
            .env
            .get(provider.env_key)
            .ok_or(ResolveError::ProviderCredentialMissing {
                provider: provider.name,
                env_key: provider.env_key,
            })?;

        if provider.id == ProviderId::OpenAI && model.is_routed() {
            let router = provider_info(ProviderId::OpenRouter);
            let router_key =
                self.env
                    .get(router.env_key)
                    .ok_or(ResolveError::ProviderCredentialMissing {
                        provider: router.name,
                        env_key: router.env_key,
                    })?;

            tracing::debug!(model = model.id, "Pro request routed through OpenRouter");
            return self.build(
                ProviderId::OpenRouter,
                model.id,
                router_key,
                CredentialOrigin::ServerEnv {
                    env_key: router.env_key,
                },
            );
        }

        tracing::debug!(provider = %provider.id, model = model.id, "Pro request on server key");
        self.build(
            provider.id,
            model.id,
            env_key,
            CredentialOrigin::ServerEnv {
                env_key: provider.env_key,
            },
        )
    }

    fn resolve_default(&self) -> ResolveResult<ResolvedClient> {
        let preferred = &FALLBACK_CHAIN[0];

        let Some((target, key)) = first_available(&self.env) else {
            return Err(ResolveError::NoCredentialAvailable {
                model: preferred.default_model.to_string(),
                tried: chain_env_keys(),
            });
        };

        let origin = if target.provider == preferred.provider {
            CredentialOrigin::ServerEnv {
                env_key: target.env_key,
            }
        } else {
            CredentialOrigin::Fallback {
                from: preferred.provider,
                env_key: target.env_key,
            }
        };

        tracing::debug!(
            provider = %target.provider,
            model = target.default_model,
            "Anonymous request on default model"
        );
        self.build(target.provider, target.default_model, key, origin)
    }

    fn resolve_standard(&self, config: &AiConfig) -> ResolveResult<ResolvedClient> {
        let model = lookup_model(&config.model)?;

        if model.features.is_free || model.is_routed() {
            self.resolve_server_funded(model)
        } else {
            self.resolve_user_key(model, config)
        }
    }

    fn resolve_server_funded(&self, model: &'static ModelInfo) -> ResolveResult<ResolvedClient> {
        if model.is_routed() {
            let router = provider_info(ProviderId::OpenRouter);
            let key = self
                .env
                .get(router.env_key)
                .ok_or_else(|| ResolveError::NoCredentialAvailable {
                    model: model.id.to_string(),
                    tried: vec![router.env_key],
                })?;

            return self.build(
                ProviderId::OpenRouter,
                model.id,
                key,
                CredentialOrigin::ServerEnv {
                    env_key: router.env_key,
                },
            );
        }

        let provider = model.provider_info();
        if let Some(key) = self.env.get(provider.env_key) {
            return self.build(
                provider.id,
                model.id,
                key,
                CredentialOrigin::ServerEnv {
                    env_key: provider.env_key,
                },
            );
        }

        let mut tried = vec![provider.env_key];
        for target in alternatives_to(provider.id) {
            if let Some(key) = target.key(&self.env) {
                tracing::info!(
                    from = %provider.id,
                    to = %target.provider,
                    model = target.default_model,
                    "Server key missing, falling back to another provider"
                );
                return self.build(
                    target.provider,
                    target.default_model,
                    key,
                    CredentialOrigin::Fallback {
                        from: provider.id,
                        env_key: target.env_key,
                    },
                );
            }
            tried.push(target.env_key);
        }

        Err(ResolveError::NoCredentialAvailable {
            model: model.id.to_string(),
            tried,
        })
    }

    fn resolve_user_key(
        &self,
        model: &'static ModelInfo,
        config: &AiConfig,
    ) -> ResolveResult<ResolvedClient> {
        let service = if model.is_routed() {
            ProviderId::OpenRouter
        } else {
            model.provider
        };

        let key = config
            .user_key(service)
            .ok_or_else(|| ResolveError::MissingUserCredential {
                provider: provider_info(service).name,
                model: model.id.to_string(),
            })?;

        tracing::debug!(provider = %service, model = model.id, "Request on user key");
        self.build(service, model.id, key, CredentialOrigin::UserKey { service })
    }

    fn build(
        &self,
        provider: ProviderId,
        model_id: &str,
        credential: &str,
        origin: CredentialOrigin,
    ) -> ResolveResult<ResolvedClient> {
        build_client(provider, model_id, credential, origin, &self.env)
            .map_err(|source| ResolveError::Provider { origin, source })
    }
}

fn lookup_model(model: &str) -> ResolveResult<&'static ModelInfo> {
    get_model_by_id(model).ok_or_else(|| ResolveError::UnknownModel {
        model: model.to_string(),
    })
}

/// Resolve a client against the current process environment.
///
/// Shorthand for [`ClientResolver::from_env`] followed by
/// [`ClientResolver::initialize_ai_client`].
pub fn initialize_ai_client(
    config: Option<&AiConfig>,
    is_pro: bool,
    use_thinking: bool,
) -> ResolveResult<ResolvedClient> {
    ClientResolver::from_env().initialize_ai_client(config, is_pro, use_thinking)
}
