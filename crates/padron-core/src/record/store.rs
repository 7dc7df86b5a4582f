//! Record store: CRUD boundary over the remote document collection.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::Result;
use crate::record::document::DocumentStore;
use crate::record::model::{RecordDraft, UserRecord};

/// CRUD boundary over a remote collection of user records.
///
/// Keeps a locally cached list reflecting the last successful `list` call.
/// Every successful mutation is followed by a full refresh rather than an
/// optimistic local patch, so the cache always reflects server-assigned
/// state. Mutations serialize through a single lock; a mutate-plus-refresh
/// pair can therefore never interleave with another mutation, while readers
/// see either the old or the new cache, never a partial one.
#[derive(Clone)]
pub struct RecordStore {
    store: Arc<dyn DocumentStore>,
    collection: String,
    cache: Arc<Mutex<Vec<UserRecord>>>,
    mutation: Arc<Mutex<()>>,
}

impl RecordStore {
    /// Creates a store over the given document collection.
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
            cache: Arc::new(Mutex::new(Vec::new())),
            mutation: Arc::new(Mutex::new(())),
        }
    }

    /// Fetches all records and fully replaces the cache.
    ///
    /// Ordering is store-defined. On failure the prior cache is left
    /// untouched and the error propagates.
    pub async fn list(&self) -> Result<Vec<UserRecord>> {
        let documents = self.store.list(&self.collection).await?;
        let mut records = Vec::with_capacity(documents.len());
        for document in documents {
            records.push(UserRecord::from_document(document)?);
        }

        let mut cache = self.cache.lock().await;
        *cache = records.clone();
        Ok(records)
    }

    /// Submits a new record and refreshes the cache.
    ///
    /// The draft's password is digested on submission. On submit failure
    /// nothing local changes and the error propagates, so the caller keeps
    /// the in-progress form. A refresh failure after a successful submit is
    /// logged and does not fail the create; the cache then lags until the
    /// next successful `list`.
    pub async fn create(&self, draft: RecordDraft) -> Result<UserRecord> {
        let _guard = self.mutation.lock().await;

        let mut record = draft.into_record();
        let fields = record.to_fields()?;
        let id = self.store.add(&self.collection, fields).await?;
        record.id = Some(id.clone());
        tracing::info!("Created record '{}'", id);

        if let Err(e) = self.list().await {
            tracing::warn!("Cache refresh after create failed: {}", e);
        }
        Ok(record)
    }

    /// Deletes a record by id and refreshes the cache.
    ///
    /// Idempotent: deleting an id the store no longer holds succeeds and
    /// leaves the record set as it was.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.mutation.lock().await;

        self.store.delete(&self.collection, id).await?;
        tracing::info!("Deleted record '{}'", id);

        if let Err(e) = self.list().await {
            tracing::warn!("Cache refresh after delete failed: {}", e);
        }
        Ok(())
    }

    /// The records from the last successful `list`, without a round-trip.
    pub async fn cached(&self) -> Vec<UserRecord> {
        self.cache.lock().await.clone()
    }
}
