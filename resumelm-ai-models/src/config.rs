//! Per-request AI configuration and user-supplied keys.

use crate::registry::{ProviderId, DEFAULT_MODEL_ID};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Local storage key holding the selected model id.
pub const MODEL_STORAGE_KEY: &str = "resumelm-default-model";

/// Local storage key holding the user's API keys as JSON.
pub const API_KEYS_STORAGE_KEY: &str = "resumelm-api-keys";

/// A key the user saved for one provider.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    /// Provider the key belongs to.
    pub service: ProviderId,
    /// Secret value.
    pub key: String,
}

impl ApiKey {
    /// Create a new key entry.
    pub fn new(service: ProviderId, key: impl Into<String>) -> Self {
        Self {
            service,
            key: key.into(),
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("service", &self.service)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Keep the entries that describe a known provider.
///
/// Entries with an unknown `service` or a malformed shape are skipped one by
/// one; the remaining keys are kept in order.
fn keep_known_keys(entries: Vec<Value>) -> Vec<ApiKey> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let service = entry
                .get("service")
                .and_then(Value::as_str)
                .map(str::to_owned);
            match serde_json::from_value::<ApiKey>(entry) {
                Ok(key) => Some(key),
                Err(_) => {
                    tracing::warn!(index, service = ?service, "Skipping unrecognised API key entry");
                    None
                }
            }
        })
        .collect()
}

fn deserialize_api_keys<'de, D>(deserializer: D) -> Result<Vec<ApiKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<Value>::deserialize(deserializer)?;
    Ok(keep_known_keys(entries))
}

/// Find the first non-empty key saved for `service`.
#[must_use]
pub fn find_user_key(keys: &[ApiKey], service: ProviderId) -> Option<&str> {
    keys.iter()
        .find(|k| k.service == service)
        .map(|k| k.key.as_str())
        .filter(|k| !k.is_empty())
}

/// Model choice plus user keys for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConfig {
    /// Requested model id.
    pub model: String,
    /// Keys the user saved in settings. Entries for unknown services are dropped.
    #[serde(default, deserialize_with = "deserialize_api_keys")]
    pub api_keys: Vec<ApiKey>,
}

impl AiConfig {
    /// Create a config with no user keys.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            api_keys: Vec::new(),
        }
    }

    /// Add a user key.
    #[must_use]
    pub fn with_api_key(mut self, service: ProviderId, key: impl Into<String>) -> Self {
        self.api_keys.push(ApiKey::new(service, key));
        self
    }

    /// Replace all user keys.
    #[must_use]
    pub fn with_api_keys(mut self, keys: Vec<ApiKey>) -> Self {
        self.api_keys = keys;
        self
    }

    /// The user's key for `service`, if any.
    #[must_use]
    pub fn user_key(&self, service: ProviderId) -> Option<&str> {
        find_user_key(&self.api_keys, service)
    }
}

/// Raw values persisted by the web client.
///
/// Both values are optional; the key list is a JSON array of
/// `{"service": "...", "key": "..."}` objects.
#[derive(Debug, Clone, Default)]
pub struct StoredPreferences {
    /// Value stored under [`MODEL_STORAGE_KEY`].
    pub model: Option<String>,
    /// Value stored under [`API_KEYS_STORAGE_KEY`].
    pub api_keys_json: Option<String>,
}

impl StoredPreferences {
    /// Create from raw stored values.
    pub fn new(model: Option<String>, api_keys_json: Option<String>) -> Self {
        Self {
            model,
            api_keys_json,
        }
    }

    /// Build the request config.
    ///
    /// A missing or empty model falls back to [`DEFAULT_MODEL_ID`]. Key JSON that
    /// is not an array is dropped and an empty key list is used. Inside an
    /// array only the unrecognised entries are dropped.
    #[must_use]
    pub fn into_config(self) -> AiConfig {
        let model = self
            .model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());

        let api_keys = match self.api_keys_json.as_deref() {
            None | Some("") => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<Value>>(raw) {
                Ok(entries) => keep_known_keys(entries),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring unparseable stored API keys");
                    Vec::new()
                }
            },
        };

        AiConfig { model, api_keys }
    }
}
