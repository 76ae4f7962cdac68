/// Typed view of one key in a [`PreferenceStore`].
use std::sync::Arc;

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wrapkit_config::PreferenceStore;

/// Persisted preference with a fallback.
///
/// Reads return the stored value when present and decodable as `T`, the
/// default otherwise. Writes go straight to the backing store.
#[derive(Debug, Clone)]
pub struct UserDefault<T> {
    key: String,
    default: T,
    store: Arc<PreferenceStore>,
}

impl<T: Serialize + DeserializeOwned + Clone> UserDefault<T> {
    pub fn new(key: impl Into<String>, default: T, store: Arc<PreferenceStore>) -> Self {
        Self {
            key: key.into(),
            default,
            store,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> T {
        self.store
            .get(&self.key)
            .unwrap_or_else(|| self.default.clone())
    }

    pub fn set(&self, value: &T) -> Result<()> {
        self.store.set(&self.key, value)
    }

    /// Removes the stored value so reads return the default again.
    pub fn reset(&self) -> Result<()> {
        self.store.remove(&self.key)?;
        Ok(())
    }

    pub fn is_stored(&self) -> bool {
        self.store.contains(&self.key)
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }
}
