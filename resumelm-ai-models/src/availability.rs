//! Model availability rules.
//!
//! A model is selectable when any of these hold, checked in order:
//!
//! 1. the user is a Pro subscriber,
//! 2. the model is free-tier,
//! 3. the model id is routed through OpenRouter,
//! 4. the user saved a key for the model's provider.
//!
//! Rule 3 relies on the server holding an OpenRouter key. This crate has no
//! view of the server environment and assumes the deployment carries it; the
//! providers crate offers a variant that checks the key.

use crate::config::{find_user_key, ApiKey};
use crate::registry::{get_model_by_id, ModelInfo, ProviderId};
use serde::Serialize;

/// Why a model is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityReason {
    /// Pro subscription covers every provider.
    ProSubscription,
    /// Free-tier model.
    FreeTier,
    /// Routed through the server's OpenRouter key.
    Routed,
    /// User supplied a key for the provider.
    UserKey,
}

/// Outcome of an availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum Availability {
    /// Model can be used.
    Available {
        /// First rule that matched.
        reason: AvailabilityReason,
    },
    /// A key for `provider` (or a Pro subscription) is needed.
    RequiresKey {
        /// Provider the key must belong to.
        provider: ProviderId,
    },
    /// Model id is not in the registry.
    UnknownModel,
}

impl Availability {
    /// Whether the model can be used.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available { .. })
    }

    /// Text shown when the user picks an unavailable model.
    #[must_use]
    pub fn unavailable_message(&self) -> Option<String> {
        match self {
            Availability::Available { .. } => None,
            Availability::RequiresKey { provider } => Some(format!(
                "Please add your {} API key first",
                provider.info().name
            )),
            Availability::UnknownModel => Some("This model is not available".to_string()),
        }
    }
}

/// Evaluate the rules for an already resolved model.
///
/// `routed_allowed` is false when the caller knows the server has no
/// OpenRouter key.
#[must_use]
pub fn evaluate(
    model: &ModelInfo,
    is_pro_subscriber: bool,
    user_keys: &[ApiKey],
    routed_allowed: bool,
) -> Availability {
    let reason = if is_pro_subscriber {
        Some(AvailabilityReason::ProSubscription)
    } else if model.features.is_free {
        Some(AvailabilityReason::FreeTier)
    } else if model.is_routed() && routed_allowed {
        Some(AvailabilityReason::Routed)
    } else if find_user_key(user_keys, model.provider).is_some() {
        Some(AvailabilityReason::UserKey)
    } else {
        None
    };

    match reason {
        Some(reason) => Availability::Available { reason },
        None => Availability::RequiresKey {
            provider: model.provider,
        },
    }
}

/// Check whether a model can be used and why.
#[must_use]
pub fn check_model_availability(
    model_id: &str,
    is_pro_subscriber: bool,
    user_keys: &[ApiKey],
) -> Availability {
    match get_model_by_id(model_id) {
        Some(model) => evaluate(model, is_pro_subscriber, user_keys, true),
        None => Availability::UnknownModel,
    }
}

/// Whether a model can be used by this user.
#[must_use]
pub fn is_model_available(model_id: &str, is_pro_subscriber: bool, user_keys: &[ApiKey]) -> bool {
    check_model_availability(model_id, is_pro_subscriber, user_keys).is_available()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::all_models;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_pro_never_blocked() {
        for model in all_models() {
            assert!(is_model_available(model.id, true, &[]), "{}", model.id);
        }
    }

    #[test]
    fn test_without_keys_only_free_or_routed() {
        for model in all_models() {
            let expected = model.features.is_free || model.is_routed();
            assert_eq!(is_model_available(model.id, false, &[]), expected, "{}", model.id);
        }
    }

    #[test]
    fn test_matching_user_key_unlocks() {
        for model in all_models().iter().filter(|m| !m.features.is_free) {
            let keys = [ApiKey::new(model.provider, "x")];
            assert!(is_model_available(model.id, false, &keys), "{}", model.id);
        }
    }

    #[rstest]
    #[case("gpt-4.1", AvailabilityReason::UserKey, ProviderId::OpenAI)]
    #[case("claude-sonnet-4-20250514", AvailabilityReason::UserKey, ProviderId::Anthropic)]
    fn test_reason_user_key(
        #[case] model: &str,
        #[case] reason: AvailabilityReason,
        #[case] provider: ProviderId,
    ) {
        let keys = [ApiKey::new(provider, "x")];
        assert_eq!(
            check_model_availability(model, false, &keys),
            Availability::Available { reason }
        );
    }

    #[test]
    fn test_wrong_provider_key_does_not_unlock() {
        let keys = [ApiKey::new(ProviderId::Anthropic, "x")];
        assert_eq!(
            check_model_availability("gpt-4.1", false, &keys),
            Availability::RequiresKey {
                provider: ProviderId::OpenAI
            }
        );
    }

    #[test]
    fn test_reason_precedence() {
        assert_eq!(
            check_model_availability("gpt-4o-mini", true, &[]),
            Availability::Available {
                reason: AvailabilityReason::ProSubscription
            }
        );
        assert_eq!(
            check_model_availability("gpt-4o-mini", false, &[]),
            Availability::Available {
                reason: AvailabilityReason::FreeTier
            }
        );
        assert_eq!(
            check_model_availability("moonshotai/kimi-k2", false, &[]),
            Availability::Available {
                reason: AvailabilityReason::Routed
            }
        );
    }

    #[test]
    fn test_routed_without_server_key() {
        let model = crate::registry::get_model_by_id("moonshotai/kimi-k2").unwrap();
        assert_eq!(
            evaluate(model, false, &[], false),
            Availability::RequiresKey {
                provider: ProviderId::OpenRouter
            }
        );
    }

    #[test]
    fn test_unknown_model() {
        assert!(!is_model_available("gpt-2", true, &[]));
        assert_eq!(
            check_model_availability("gpt-2", false, &[]),
            Availability::UnknownModel
        );
    }

    #[test]
    fn test_unavailable_message() {
        let message = check_model_availability("gpt-4.1", false, &[]).unavailable_message();
        assert_eq!(message.as_deref(), Some("Please add your OpenAI API key first"));

        assert!(check_model_availability("gpt-4o-mini", false, &[])
            .unavailable_message()
            .is_none());
    }
}
