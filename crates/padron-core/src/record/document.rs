//! Remote document store trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// A stored document: the store-assigned id plus the raw field map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

/// An abstract collection-oriented document store.
///
/// The record layer depends only on this minimal capability set (add a
/// document and get the assigned id back, enumerate a collection, delete by
/// id), not on any specific store's query language or consistency model.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Adds a document to `collection` and returns the store-assigned id.
    async fn add(&self, collection: &str, fields: Map<String, Value>) -> Result<String>;

    /// Enumerates all documents in `collection`. Ordering is store-defined.
    async fn list(&self, collection: &str) -> Result<Vec<Document>>;

    /// Deletes a document by id.
    ///
    /// Idempotent: deleting an id that does not exist succeeds.
    async fn delete(&self, collection: &str, id: &str) -> Result<()>;
}
