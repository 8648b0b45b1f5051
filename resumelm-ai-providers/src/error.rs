//! Client resolution errors.

use crate::client::CredentialOrigin;
use crate::provider::ProviderError;
use resumelm_ai_models::provider_info;
use thiserror::Error;

/// Why a client could not be resolved.
///
/// All variants are raised synchronously and none is worth retrying: the
/// user has to supply a key or pick another model.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Requested model is not in the registry.
    #[error("Unknown model: {model}")]
    UnknownModel {
        /// Requested model id.
        model: String,
    },

    /// Pro request, but the server has no key for the provider.
    #[error("{provider} API key not found ({env_key})")]
    ProviderCredentialMissing {
        /// Provider display name.
        provider: &'static str,
        /// Variable that was checked.
        env_key: &'static str,
    },

    /// Every server credential option was exhausted.
    #[error("No API key available for {model}. Please configure one of: {}", tried.join(", "))]
    NoCredentialAvailable {
        /// Model that was being resolved.
        model: String,
        /// Variables that were checked, in order.
        tried: Vec<&'static str>,
    },

    /// Paid model, but the user saved no key for its provider.
    #[error("{provider} API key not found in user configuration (model {model})")]
    MissingUserCredential {
        /// Provider display name.
        provider: &'static str,
        /// Requested model id.
        model: String,
    },

    /// Provider client construction failed.
    #[error("{source}")]
    Provider {
        /// Where the rejected credential came from.
        origin: CredentialOrigin,
        /// Construction failure.
        #[source]
        source: ProviderError,
    },
}

impl ResolveError {
    /// Resolution errors never succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Message safe to show to end users.
    ///
    /// Contains no key material and no server variable names.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ResolveError::UnknownModel { model } => {
                format!("The model \"{}\" is not supported. Please choose another model.", model)
            }
            ResolveError::ProviderCredentialMissing { provider, .. } => format!(
                "{} is temporarily unavailable. Please choose another model.",
                provider
            ),
            ResolveError::NoCredentialAvailable { .. } => {
                "AI features are temporarily unavailable. Please try again later.".to_string()
            }
            ResolveError::MissingUserCredential { provider, .. } => format!(
                "Please add your {} API key in settings or upgrade to Pro to use this model.",
                provider
            ),
            ResolveError::Provider {
                origin: CredentialOrigin::UserKey { service },
                ..
            } => format!(
                "Your saved {} API key could not be used. Please check it in settings.",
                provider_info(*service).name
            ),
            ResolveError::Provider { .. } => {
                "AI features are temporarily unavailable. Please try again later.".to_string()
            }
        }
    }
}

/// Result type for client resolution.
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;
    use resumelm_ai_models::ProviderId;

    #[test]
    fn test_display() {
        let err = ResolveError::ProviderCredentialMissing {
            provider: "Anthropic",
            env_key: "ANTHROPIC_API_KEY",
        };
        assert_eq!(err.to_string(), "Anthropic API key not found (ANTHROPIC_API_KEY)");

        let err = ResolveError::NoCredentialAvailable {
            model: "gpt-4o-mini".to_string(),
            tried: vec!["OPENAI_API_KEY", "ANTHROPIC_API_KEY"],
        };
        assert_eq!(
            err.to_string(),
            "No API key available for gpt-4o-mini. Please configure one of: OPENAI_API_KEY, ANTHROPIC_API_KEY"
        );
    }

    #[test]
    fn test_user_message_hides_env_names() {
        let errors = [
            ResolveError::ProviderCredentialMissing {
                provider: "OpenAI",
                env_key: "OPENAI_API_KEY",
            },
            ResolveError::NoCredentialAvailable {
                model: "gpt-4o-mini".to_string(),
                tried: vec!["OPENAI_API_KEY"],
            },
            ResolveError::Provider {
                origin: CredentialOrigin::ServerEnv {
                    env_key: "OPENAI_API_KEY",
                },
                source: ProviderError::MissingApiKey("OPENAI_API_KEY"),
            },
        ];

        for err in &errors {
            assert!(!err.user_message().contains("_API_KEY"), "{}", err);
            assert!(!err.is_retryable());
        }
    }

    #[test]
    fn test_user_message_names_provider() {
        let err = ResolveError::MissingUserCredential {
            provider: "Anthropic",
            model: "claude-sonnet-4-20250514".to_string(),
        };
        assert!(err.user_message().contains("Anthropic"));
    }

    #[test]
    fn test_provider_failure_message_follows_origin() {
        let user = ResolveError::Provider {
            origin: CredentialOrigin::UserKey {
                service: ProviderId::OpenAI,
            },
            source: ProviderError::InvalidHeader("authorization"),
        };
        assert!(user.user_message().contains("saved OpenAI API key"));

        let server = ResolveError::Provider {
            origin: CredentialOrigin::ServerEnv {
                env_key: "OPENROUTER_API_KEY",
            },
            source: ProviderError::InvalidHeader("HTTP-Referer"),
        };
        assert!(!server.user_message().contains("saved"));
        assert!(!server.user_message().contains("settings"));
        assert_eq!(server.to_string(), "Invalid value for header HTTP-Referer");
    }
}
