//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::KeyValueStore;
use crate::Result;

/// An in-memory [`KeyValueStore`].
///
/// Cheap to clone; clones share the same underlying map. Suitable for tests
/// and single-process deployments.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Value) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_owned(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn put_get_delete_round_trip() -> Result<()> {
        let store = MemoryStore::new();

        assert_eq!(store.get("missing").await?, None);

        store.put("key", json!({"a": 1})).await?;
        assert_eq!(store.get("key").await?, Some(json!({"a": 1})));

        store.put("key", json!({"a": 2})).await?;
        assert_eq!(store.get("key").await?, Some(json!({"a": 2})));

        store.delete("key").await?;
        assert_eq!(store.get("key").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn clones_share_state() -> Result<()> {
        let store = MemoryStore::new();
        let clone = store.clone();

        store.put("shared", json!(true)).await?;
        assert_eq!(clone.get("shared").await?, Some(json!(true)));

        Ok(())
    }
}
