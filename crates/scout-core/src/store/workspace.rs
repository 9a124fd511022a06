//! Typed workspace state over the key-value store.

use jiff::Timestamp;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::KeyValueStore;
use crate::model::EnrichmentResult;
use crate::query::{SortBy, SortDir};
use crate::{Result, TRACING_TARGET_STORE};

/// Storage key for saved lists.
const LISTS_KEY: &str = "vc-lists";
/// Storage key for saved searches.
const SEARCHES_KEY: &str = "vc-saved-searches";
/// Storage key for the recently-viewed queue.
const RECENT_KEY: &str = "recently-viewed";
/// Maximum length of the recently-viewed queue.
const RECENT_LIMIT: usize = 5;

/// A user-defined list of companies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedList {
    /// List identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Member company identifiers, insertion-ordered, de-duplicated.
    pub company_ids: Vec<String>,
    /// When the list was created.
    pub created_at: Timestamp,
}

impl SavedList {
    /// Creates an empty list with a fresh identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            company_ids: Vec::new(),
            created_at: Timestamp::now(),
        }
    }
}

/// Filter parameters captured by a saved search.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub sort_dir: SortDir,
}

/// A named, reusable set of discovery filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
    /// Search identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// The captured filters.
    pub filters: SearchFilters,
    /// When the search was saved.
    pub saved_at: Timestamp,
}

impl SavedSearch {
    /// Captures `filters` under a fresh identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, filters: SearchFilters) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            filters,
            saved_at: Timestamp::now(),
        }
    }
}

/// Typed operations over the injected key-value store.
///
/// This is a thin wrapper that owns the key layout and the JSON encoding;
/// all persistence goes through the injected [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct Workspace<S> {
    store: S,
}

impl<S: KeyValueStore> Workspace<S> {
    /// Wraps the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    async fn get_or<T: DeserializeOwned>(&self, key: &str, fallback: T) -> Result<T> {
        match self.store.get(key).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(fallback),
        }
    }

    async fn put_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.store.put(key, serde_json::to_value(value)?).await
    }

    fn note_key(company_id: &str) -> String {
        format!("note-{company_id}")
    }

    fn enrichment_key(company_id: &str) -> String {
        format!("enrich-{company_id}")
    }

    // Lists

    /// Returns all saved lists.
    pub async fn lists(&self) -> Result<Vec<SavedList>> {
        self.get_or(LISTS_KEY, Vec::new()).await
    }

    /// Inserts or replaces a list, keyed by its identifier.
    pub async fn save_list(&self, list: SavedList) -> Result<()> {
        let mut lists = self.lists().await?;
        match lists.iter_mut().find(|existing| existing.id == list.id) {
            Some(existing) => *existing = list,
            None => lists.push(list),
        }
        self.put_json(LISTS_KEY, &lists).await
    }

    /// Deletes a list by identifier.
    pub async fn delete_list(&self, id: Uuid) -> Result<()> {
        let mut lists = self.lists().await?;
        lists.retain(|list| list.id != id);
        self.put_json(LISTS_KEY, &lists).await
    }

    /// Adds a company to a list, ignoring duplicates and unknown lists.
    pub async fn add_to_list(&self, list_id: Uuid, company_id: &str) -> Result<()> {
        let mut lists = self.lists().await?;
        if let Some(list) = lists.iter_mut().find(|list| list.id == list_id)
            && !list.company_ids.iter().any(|id| id == company_id)
        {
            list.company_ids.push(company_id.to_owned());
            tracing::debug!(
                target: TRACING_TARGET_STORE,
                list_id = %list_id,
                company_id,
                "Company added to list"
            );
            return self.put_json(LISTS_KEY, &lists).await;
        }
        Ok(())
    }

    /// Removes a company from a list.
    pub async fn remove_from_list(&self, list_id: Uuid, company_id: &str) -> Result<()> {
        let mut lists = self.lists().await?;
        if let Some(list) = lists.iter_mut().find(|list| list.id == list_id) {
            list.company_ids.retain(|id| id != company_id);
            return self.put_json(LISTS_KEY, &lists).await;
        }
        Ok(())
    }

    // Saved searches

    /// Returns all saved searches.
    pub async fn saved_searches(&self) -> Result<Vec<SavedSearch>> {
        self.get_or(SEARCHES_KEY, Vec::new()).await
    }

    /// Appends a saved search.
    pub async fn save_search(&self, search: SavedSearch) -> Result<()> {
        let mut searches = self.saved_searches().await?;
        searches.push(search);
        self.put_json(SEARCHES_KEY, &searches).await
    }

    /// Deletes a saved search by identifier.
    pub async fn delete_search(&self, id: Uuid) -> Result<()> {
        let mut searches = self.saved_searches().await?;
        searches.retain(|search| search.id != id);
        self.put_json(SEARCHES_KEY, &searches).await
    }

    // Notes

    /// Returns the note for a company, empty when none was saved.
    pub async fn note(&self, company_id: &str) -> Result<String> {
        self.get_or(&Self::note_key(company_id), String::new()).await
    }

    /// Saves the note for a company.
    pub async fn save_note(&self, company_id: &str, note: &str) -> Result<()> {
        self.put_json(&Self::note_key(company_id), &note).await
    }

    // Enrichment cache

    /// Returns the cached enrichment for a company, if any.
    pub async fn cached_enrichment(&self, company_id: &str) -> Result<Option<EnrichmentResult>> {
        self.get_or(&Self::enrichment_key(company_id), None).await
    }

    /// Caches an enrichment payload for a company.
    pub async fn cache_enrichment(
        &self,
        company_id: &str,
        result: &EnrichmentResult,
    ) -> Result<()> {
        self.put_json(&Self::enrichment_key(company_id), result).await
    }

    // Recently viewed

    /// Returns the recently-viewed company ids, most recent first.
    pub async fn recently_viewed(&self) -> Result<Vec<String>> {
        self.get_or(RECENT_KEY, Vec::new()).await
    }

    /// Marks a company as viewed.
    ///
    /// The queue is de-duplicated, most-recent-first and bounded to
    /// [`RECENT_LIMIT`] entries.
    pub async fn mark_viewed(&self, company_id: &str) -> Result<()> {
        let mut recent = self.recently_viewed().await?;
        recent.retain(|id| id != company_id);
        recent.insert(0, company_id.to_owned());
        recent.truncate(RECENT_LIMIT);
        self.put_json(RECENT_KEY, &recent).await
    }
}
