//! Record store abstraction and the in-memory adapter

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::Result;

/// Named collection a lead document is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Quotes,
    Bookings,
    Contacts,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Quotes => "quotes",
            Collection::Bookings => "bookings",
            Collection::Contacts => "contacts",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Document persistence keyed by collection. Documents are untyped JSON
/// objects; shape is enforced by the caller.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(&self, collection: Collection, document: serde_json::Value) -> Result<()>;

    /// Documents in storage order, at most `limit` of them.
    async fn list(&self, collection: Collection, limit: usize) -> Result<Vec<serde_json::Value>>;

    async fn health_check(&self) -> Result<()>;

    fn kind(&self) -> &'static str;
}

pub type DynRecordStore = Arc<dyn RecordStore>;

#[derive(Clone, Default)]
pub struct MemoryRecordStore {
    collections: Arc<RwLock<HashMap<Collection, Vec<serde_json::Value>>>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .get(&collection)
            .map(Vec::len)
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: Collection) -> bool {
        self.len(collection) == 0
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn insert(&self, collection: Collection, document: serde_json::Value) -> Result<()> {
        self.collections
            .write()
            .entry(collection)
            .or_default()
            .push(document);
        Ok(())
    }

    async fn list(&self, collection: Collection, limit: usize) -> Result<Vec<serde_json::Value>> {
        let collections = self.collections.read();

        Ok(collections
            .get(&collection)
            .map(|documents| documents.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_insert_and_list_in_insertion_order() {
        let store = MemoryRecordStore::new();
        store.insert(Collection::Quotes, json!({"id": "1"})).await.unwrap();
        store.insert(Collection::Quotes, json!({"id": "2"})).await.unwrap();
        store.insert(Collection::Quotes, json!({"id": "3"})).await.unwrap();

        let documents = store.list(Collection::Quotes, 1000).await.unwrap();
        let ids: Vec<_> = documents.iter().map(|d| d["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = MemoryRecordStore::new();
        store.insert(Collection::Bookings, json!({"id": "b"})).await.unwrap();

        assert!(store.list(Collection::Quotes, 10).await.unwrap().is_empty());
        assert_eq!(store.len(Collection::Bookings), 1);
        assert!(store.is_empty(Collection::Contacts));
    }

    #[tokio::test]
    async fn test_list_honours_limit() {
        let store = MemoryRecordStore::new();
        for i in 0..5 {
            store.insert(Collection::Contacts, json!({ "n": i })).await.unwrap();
        }

        let documents = store.list(Collection::Contacts, 2).await.unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[1]["n"], 1);
    }

    #[test]
    fn test_collection_names() {
        assert_eq!(Collection::Quotes.name(), "quotes");
        assert_eq!(Collection::Bookings.to_string(), "bookings");
        assert_eq!(Collection::Contacts.name(), "contacts");
    }
}
