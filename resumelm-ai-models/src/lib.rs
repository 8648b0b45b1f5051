//! # resumelm-ai-models
//!
//! Static model and provider registry for resumelm-ai.
//!
//! This crate knows which models exist, which provider owns each one, and
//! whether a given user may select a model:
//!
//! - **Registry**: [`get_model_by_id`], [`get_provider_by_id`],
//!   [`get_model_provider`], [`group_models_by_provider`]
//! - **Availability**: [`is_model_available`], [`check_model_availability`]
//! - **Request config**: [`AiConfig`], [`ApiKey`], [`StoredPreferences`]
//!
//! It performs no I/O. Turning a config into a callable client lives in
//! `resumelm-ai-providers`.
//!
//! ## Example
//!
//! ```rust
//! use resumelm_ai_models::{is_model_available, ApiKey, ProviderId};
//!
//! let keys = vec![ApiKey::new(ProviderId::OpenAI, "sk-...")];
//! assert!(is_model_available("gpt-4.1", false, &keys));
//! assert!(!is_model_available("claude-sonnet-4-20250514", false, &keys));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod availability;
pub mod config;
pub mod error;
pub mod registry;

pub use availability::{
    check_model_availability, is_model_available, Availability, AvailabilityReason,
};
pub use config::{
    find_user_key, AiConfig, ApiKey, StoredPreferences, API_KEYS_STORAGE_KEY, MODEL_STORAGE_KEY,
};
pub use error::{RegistryError, RegistryResult};
pub use registry::{
    all_models, all_providers, get_model_by_id, get_model_provider, get_provider_by_id,
    group_models_by_provider, is_routed_id, provider_info, ModelFeatures, ModelGroup, ModelInfo,
    ProviderId, ProviderInfo, DEFAULT_MODEL_ID, ROUTING_SEPARATOR,
};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        get_model_by_id, get_model_provider, get_provider_by_id, group_models_by_provider,
        is_model_available, AiConfig, ApiKey, Availability, ModelInfo, ProviderId, ProviderInfo,
    };
}
