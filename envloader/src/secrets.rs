//! Remote secret source and the flat mapping parsed from it.

use crate::error::{BoxError, EnvError};
use serde::Deserialize;
use std::collections::HashMap;

/// Names the secret to fetch. Empty or unset disables the fetch.
pub const SECRET_NAME_VAR: &str = "SECRET_NAME";

/// Region handed to the secret store.
pub const REGION_VAR: &str = "REGION";

/// A remote store holding one JSON secret per name.
///
/// Implemented for closures, which is convenient in tests:
///
/// ```rust
/// use envloader::{BoxError, SecretStore};
///
/// let store = |_name: &str, _region: &str| -> Result<String, BoxError> {
///     Ok(r#"{"api_key":"s3cr3t"}"#.to_string())
/// };
/// assert!(store.fetch("prod/app", "us-east-1").is_ok());
/// ```
pub trait SecretStore {
    /// Fetch the raw secret string stored under `secret_name`.
    fn fetch(&self, secret_name: &str, region: &str) -> Result<String, BoxError>;
}

impl<F> SecretStore for F
where
    F: Fn(&str, &str) -> Result<String, BoxError>,
{
    fn fetch(&self, secret_name: &str, region: &str) -> Result<String, BoxError> {
        self(secret_name, region)
    }
}

/// Flat key to value table parsed from one secret.
///
/// Deserializes from a JSON object whose values are all strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Secrets {
    entries: HashMap<String, String>,
}

impl Secrets {
    /// Parse a secret blob that must be a JSON object of string values.
    pub fn from_json(secret_name: &str, blob: &str) -> Result<Self, EnvError> {
        serde_json::from_str(blob).map_err(|source| EnvError::SecretParse {
            secret_name: secret_name.to_string(),
            source,
        })
    }

    /// Value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the secret held no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Secrets
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Fetch and parse the secret named by `SECRET_NAME`, if any.
///
/// Returns `Ok(None)` when `SECRET_NAME` is unset or empty.
pub(crate) fn fetch_secrets(store: &dyn SecretStore) -> Result<Option<Secrets>, EnvError> {
    let secret_name = std::env::var(SECRET_NAME_VAR).unwrap_or_default();
    if secret_name.is_empty() {
        tracing::debug!("{} is not set, skipping secret fetch", SECRET_NAME_VAR);
        return Ok(None);
    }
    let region = std::env::var(REGION_VAR).unwrap_or_default();

    tracing::debug!(secret_name = %secret_name, region = %region, "fetching secret");
    let blob = store
        .fetch(&secret_name, &region)
        .map_err(|source| EnvError::SecretFetch {
            secret_name: secret_name.clone(),
            source,
        })?;

    let secrets = Secrets::from_json(&secret_name, &blob)?;
    tracing::debug!(secret_name = %secret_name, entries = secrets.len(), "secret loaded");
    Ok(Some(secrets))
}
