//! Server environment snapshot.
//!
//! The resolver never reads `std::env` directly. It works on a [`ServerEnv`]
//! captured once, so resolution is a pure function of its inputs and tests do
//! not touch process state.

use resumelm_ai_models::availability::evaluate;
use resumelm_ai_models::{
    all_providers, get_model_by_id, provider_info, ApiKey, Availability, ProviderId,
};
use std::collections::HashMap;
use std::fmt;

/// Public site URL, sent to OpenRouter as the referer.
pub const SITE_URL_ENV: &str = "NEXT_PUBLIC_SITE_URL";

/// Immutable view of the server-side credentials and settings.
#[derive(Clone, Default)]
pub struct ServerEnv {
    vars: HashMap<String, String>,
}

impl ServerEnv {
    /// Empty environment: no server keys at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the relevant variables from the process environment.
    pub fn from_process() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from explicit name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v)| !v.is_empty())
            .collect();
        Self { vars }
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let names = all_providers()
            .iter()
            .map(|p| p.env_key)
            .chain(std::iter::once(SITE_URL_ENV));
        Self::from_pairs(names.filter_map(|name| lookup(name).map(|value| (name, value))))
    }

    /// Set one variable.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        let name = name.into();
        if value.is_empty() {
            self.vars.remove(&name);
        } else {
            self.vars.insert(name, value);
        }
        self
    }

    /// Value of a variable; empty values count as unset.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Server key for a provider.
    #[must_use]
    pub fn provider_key(&self, provider: ProviderId) -> Option<&str> {
        self.get(provider_info(provider).env_key)
    }

    /// Whether the server holds a key for a provider.
    #[must_use]
    pub fn has_provider_key(&self, provider: ProviderId) -> bool {
        self.provider_key(provider).is_some()
    }

    /// Referer for OpenRouter attribution.
    #[must_use]
    pub fn referer(&self) -> &str {
        self.get(SITE_URL_ENV)
            .unwrap_or(crate::OpenRouterProvider::DEFAULT_REFERER)
    }

    /// Availability check that applies the routed-model rule strictly,
    /// requiring the server OpenRouter key.
    #[must_use]
    pub fn check_model_availability(
        &self,
        model_id: &str,
        is_pro_subscriber: bool,
        user_keys: &[ApiKey],
    ) -> Availability {
        match get_model_by_id(model_id) {
            Some(model) => evaluate(
                model,
                is_pro_subscriber,
                user_keys,
                self.has_provider_key(ProviderId::OpenRouter),
            ),
            None => Availability::UnknownModel,
        }
    }

    /// See [`ServerEnv::check_model_availability`].
    #[must_use]
    pub fn is_model_available(
        &self,
        model_id: &str,
        is_pro_subscriber: bool,
        user_keys: &[ApiKey],
    ) -> bool {
        self.check_model_availability(model_id, is_pro_subscriber, user_keys)
            .is_available()
    }
}

impl fmt::Debug for ServerEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut present: Vec<_> = self.vars.keys().map(String::as_str).collect();
        present.sort_unstable();
        f.debug_struct("ServerEnv").field("present", &present).finish()
    }
}
