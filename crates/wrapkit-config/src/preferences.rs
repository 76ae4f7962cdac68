/// Persisted key/value preferences backed by a JSON document.
///
/// Values are stored as `serde_json::Value` so any `Serialize` type can be
/// written under a string key. A file-backed store writes through on every
/// change; an in-memory store never touches disk.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// File name of the default preferences document.
const PREFERENCES_FILE: &str = "preferences.json";

/// Environment variable overriding the data directory.
const DATA_DIR_ENV: &str = "WRAPKIT_DATA_DIR";

/// Resolves the data directory path.
///
/// Resolution order:
/// 1. `WRAPKIT_DATA_DIR` environment variable
/// 2. `.data/` directory next to the executable
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    let exe = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("."));
    exe.parent().unwrap_or(Path::new(".")).join(".data")
}

/// Shared preference store.
///
/// Thread-safe: reads take a shared lock, writes take an exclusive lock
/// for the update and the write-through. Share via `Arc<PreferenceStore>`.
pub struct PreferenceStore {
    /// Backing file; `None` keeps everything in memory.
    path: Option<PathBuf>,
    values: RwLock<Map<String, Value>>,
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("path", &self.path)
            .field("len", &self.values.read().len())
            .finish()
    }
}

impl PreferenceStore {
    /// Returns the default preferences path inside the resolved data dir.
    pub fn default_path() -> PathBuf {
        resolve_data_dir().join(PREFERENCES_FILE)
    }

    /// Creates an empty store that is never persisted.
    pub fn in_memory() -> Arc<Self> {
        Arc::new(Self {
            path: None,
            values: RwLock::new(Map::new()),
        })
    }

    /// Opens the store at `path`.
    ///
    /// A missing file yields an empty store (the file is created on the
    /// first write). An unreadable or unparsable file is logged and the
    /// store starts empty; the broken file is only replaced on the next
    /// successful write.
    pub fn open(path: &Path) -> Arc<Self> {
        let values = if path.exists() {
            match Self::read_document(path) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!("Ignoring preferences at {}: {e:#}", path.display());
                    Map::new()
                }
            }
        } else {
            Map::new()
        };

        Arc::new(Self {
            path: Some(path.to_path_buf()),
            values: RwLock::new(values),
        })
    }

    /// Returns the backing file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Decodes the value stored under `key`.
    ///
    /// Returns `None` when the key is missing or its value does not decode
    /// as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.values.read().get(key).cloned()?;
        match serde_json::from_value(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Preference '{key}' has an unexpected type: {e}");
                None
            }
        }
    }

    /// Returns the raw JSON stored under `key`.
    pub fn get_raw(&self, key: &str) -> Option<Value> {
        self.values.read().get(key).cloned()
    }

    /// Stores `value` under `key` and writes the document through.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be encoded or the file write
    /// fails. The in-memory value is updated either way.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let encoded = serde_json::to_value(value)
            .with_context(|| format!("Failed to encode preference '{key}'"))?;
        self.set_raw(key, encoded)
    }

    /// Stores raw JSON under `key` and writes the document through.
    ///
    /// # Errors
    ///
    /// Returns an error if the file write fails.
    pub fn set_raw(&self, key: &str, value: Value) -> Result<()> {
        let mut values = self.values.write();
        values.insert(key.to_string(), value);
        self.persist(&values)
    }

    /// Removes `key`. Returns whether it was present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file write fails.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let mut values = self.values.write();
        if values.remove(key).is_none() {
            return Ok(false);
        }
        self.persist(&values)?;
        Ok(true)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.read().contains_key(key)
    }

    /// Returns all keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.values.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Removes every key.
    ///
    /// # Errors
    ///
    /// Returns an error if the file write fails.
    pub fn clear(&self) -> Result<()> {
        let mut values = self.values.write();
        values.clear();
        self.persist(&values)
    }

    fn read_document(path: &Path) -> Result<Map<String, Value>> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preferences: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse preferences: {}", path.display()))
    }

    /// Writes the whole document as pretty-printed JSON. No-op in memory.
    fn persist(&self, values: &Map<String, Value>) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create preferences directory: {}", parent.display())
            })?;
        }
        let json =
            serde_json::to_string_pretty(values).context("Failed to serialize preferences")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write preferences: {}", path.display()))
    }
}
