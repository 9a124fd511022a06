//! Injected key-value persistence for workspace state.
//!
//! Lists, saved searches, notes, cached enrichments and the recently-viewed
//! queue are all addressed by string key and stored as JSON values. The
//! backing store is an injected capability rather than a process-wide
//! singleton, so a browser-local store, an in-memory store and a real
//! backing service are interchangeable without touching callers.

mod memory;
mod workspace;

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

pub use memory::MemoryStore;
pub use workspace::{SavedList, SavedSearch, SearchFilters, Workspace};

/// A key-value store holding JSON-serializable values.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Writes `value` under `key`, replacing any previous value.
    async fn put(&self, key: &str, value: Value) -> Result<()>;

    /// Removes the value stored under `key`, if any.
    async fn delete(&self, key: &str) -> Result<()>;
}
