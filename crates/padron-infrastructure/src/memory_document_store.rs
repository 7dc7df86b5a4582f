//! In-memory document store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use uuid::Uuid;

use padron_core::Result;
use padron_core::record::{Document, DocumentStore};

/// Collection-oriented document store held entirely in memory.
///
/// Assigns UUID-v4 ids. Used by tests and by offline runs when no store URL
/// is configured. Clones share the same collections.
#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<Mutex<HashMap<String, HashMap<String, Map<String, Value>>>>>,
}

impl MemoryDocumentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn add(&self, collection: &str, fields: Map<String, Value>) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let mut collections = self.collections.lock().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields);
        Ok(id)
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>> {
        let collections = self.collections.lock().await;
        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .map(|(id, fields)| Document {
                        id: id.clone(),
                        fields: fields.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let mut collections = self.collections.lock().await;
        if let Some(documents) = collections.get_mut(collection) {
            documents.remove(id);
        }
        Ok(())
    }
}
