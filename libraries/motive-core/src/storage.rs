//! Persisted local state
//!
//! A string key/value store with the semantics of browser local storage:
//! a missing key is `None`, writes replace the whole value.

use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Key/value store for state that must survive restarts
///
/// Implemented by `motive-storage` on top of `SQLite` and by
/// [`InMemoryStore`] for tests and ephemeral sessions.
#[async_trait]
pub trait LocalStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; returns whether a value was present
    async fn remove_item(&self, key: &str) -> Result<bool>;
}

/// Volatile store backed by a `HashMap`
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut items = HashMap::new();
        items.insert(key.into(), value.into());
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl LocalStore for InMemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<bool> {
        Ok(self.items.write().await.remove(key).is_some())
    }
}
