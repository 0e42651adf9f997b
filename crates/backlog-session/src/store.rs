//! Persistent session store
//!
//! A `SessionBackend` models browser session storage: key-value, scoped to
//! one logical session, shared across navigations within it, gone when the
//! session ends. `SessionCell` layers a typed, key-scoped view on top.

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

/// Raw key-scoped storage for one logical session
pub trait SessionBackend: Send + Sync {
    /// Read the raw value stored under `key`, if any
    fn read(&self, key: &str) -> Option<String>;

    /// Write a raw value under `key`, replacing any previous value
    fn write(&self, key: &str, raw: String);

    /// Remove the value stored under `key`
    fn clear(&self, key: &str);
}

/// In-memory backend with session-storage semantics
///
/// One instance is one session scope: everything sharing the `Arc` sees the
/// same entries, and dropping the last handle ends the session.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty session scope
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn write(&self, key: &str, raw: String) {
        self.entries.write().insert(key.to_string(), raw);
    }

    fn clear(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

/// Typed storage cell scoped to a single key
///
/// Values are JSON-encoded. A persisted blob that no longer decodes reads
/// as absent rather than failing the caller.
pub struct SessionCell<T> {
    backend: Arc<dyn SessionBackend>,
    key: String,
    _value: PhantomData<fn() -> T>,
}

impl<T> Clone for SessionCell<T> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            key: self.key.clone(),
            _value: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for SessionCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCell").field("key", &self.key).finish()
    }
}

impl<T: Serialize + DeserializeOwned> SessionCell<T> {
    /// Create a cell over `backend` scoped to `key`
    pub fn new(backend: Arc<dyn SessionBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            _value: PhantomData,
        }
    }

    /// The storage key this cell is scoped to
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored value; absent if nothing was stored or it no longer decodes
    pub fn get(&self) -> Option<T> {
        let raw = self.backend.read(&self.key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "Discarding undecodable session value");
                None
            }
        }
    }

    /// Store a value, replacing any previous one
    pub fn set(&self, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.backend.write(&self.key, raw),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "Failed to encode session value");
            }
        }
    }

    /// Clear the stored value
    pub fn clear(&self) {
        self.backend.clear(&self.key);
    }
}
