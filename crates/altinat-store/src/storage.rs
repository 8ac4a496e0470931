//! Key/value storage backends

use crate::io::{atomic_write, parse_or_default, read_optional};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    #[error("failed to encode value for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// String-keyed store of JSON-serialized values.
///
/// Reads are best-effort: a value that cannot be read is reported as absent.
/// Writes replace the whole value for a key.
pub trait Storage {
    /// Raw value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the raw value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Decode the value under `key`, or `default` if missing or corrupt
    fn load<T>(&self, key: &str, default: T) -> T
    where
        Self: Sized,
        T: DeserializeOwned,
    {
        parse_or_default(self.get(key).as_deref(), default)
    }

    /// Serialize `value` and store it under `key`
    fn save<T>(&mut self, key: &str, value: &T) -> Result<(), StoreError>
    where
        Self: Sized,
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.set(key, &json)
    }
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        if validate_key(key).is_err() {
            return None;
        }
        let path = self.key_path(key);
        match read_optional(&path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(key, error = %e, "failed to read stored value");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        atomic_write(&self.key_path(key), value.as_bytes()).map_err(|source| {
            StoreError::Write {
                key: key.to_string(),
                source,
            }
        })
    }
}

/// In-process store, used where nothing should touch the disk
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing validation
    pub fn with_entry(mut self, key: &str, raw: &str) -> Self {
        self.entries.insert(key.to_string(), raw.to_string());
        self
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
