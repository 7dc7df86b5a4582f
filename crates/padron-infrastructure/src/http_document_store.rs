//! HTTP document store client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use padron_core::record::{Document, DocumentStore};
use padron_core::{PadronError, Result};

/// Client for a collection-oriented document store exposed over HTTP.
///
/// Wire contract:
///
/// - `POST {base}/{collection}` with the field map as JSON body, response
///   `{"id": "<assigned id>"}`
/// - `GET {base}/{collection}`, response an array of documents, each the
///   field map with `id` inlined
/// - `DELETE {base}/{collection}/{id}`, `404` counts as success so deletes
///   stay idempotent regardless of the store's own semantics
///
/// Uses the client's default timeout; there is no retry here. A failed call
/// surfaces as a `Store` error, marked transient for network-class failures,
/// and the caller decides whether to try again.
#[derive(Clone)]
pub struct HttpDocumentStore {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct AddResponse {
    id: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireDocument {
    id: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl From<WireDocument> for Document {
    fn from(wire: WireDocument) -> Self {
        Document {
            id: wire.id,
            fields: wire.fields,
        }
    }
}

impl HttpDocumentStore {
    /// Creates a client for the store at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, id)
    }
}

/// Maps a transport-level failure, marking network-class errors transient.
fn transport_error(operation: &str, err: reqwest::Error) -> PadronError {
    let message = format!("{} failed: {}", operation, err);
    if err.is_timeout() || err.is_connect() {
        PadronError::store_transient(message)
    } else {
        PadronError::store(message)
    }
}

/// Maps a non-success response status, marking server errors transient.
fn status_error(operation: &str, status: StatusCode) -> PadronError {
    let message = format!("{} failed with status {}", operation, status);
    if status.is_server_error() {
        PadronError::store_transient(message)
    } else {
        PadronError::store(message)
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn add(&self, collection: &str, fields: Map<String, Value>) -> Result<String> {
        let url = self.collection_url(collection);
        let response = self
            .client
            .post(&url)
            .json(&fields)
            .send()
            .await
            .map_err(|e| transport_error("add document", e))?;

        if !response.status().is_success() {
            return Err(status_error("add document", response.status()));
        }

        let body: AddResponse = response
            .json()
            .await
            .map_err(|e| PadronError::store(format!("add document: malformed response: {}", e)))?;
        tracing::debug!("Added document '{}' to '{}'", body.id, collection);
        Ok(body.id)
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>> {
        let url = self.collection_url(collection);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error("list documents", e))?;

        if !response.status().is_success() {
            return Err(status_error("list documents", response.status()));
        }

        let documents: Vec<WireDocument> = response.json().await.map_err(|e| {
            PadronError::store(format!("list documents: malformed response: {}", e))
        })?;
        Ok(documents.into_iter().map(Document::from).collect())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let url = self.document_url(collection, id);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| transport_error("delete document", e))?;

        // Already-gone documents count as deleted.
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("Document '{}' already absent from '{}'", id, collection);
            return Ok(());
        }
        if !response.status().is_success() {
            return Err(status_error("delete document", response.status()));
        }
        Ok(())
    }
}
