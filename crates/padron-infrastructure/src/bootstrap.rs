//! Registry wiring.

use std::path::PathBuf;
use std::sync::Arc;

use padron_core::config::RegistryConfig;
use padron_core::record::DocumentStore;
use padron_core::session::StaticCredentialVerifier;
use padron_core::{Registry, Result};

use crate::http_document_store::HttpDocumentStore;
use crate::json_key_value_storage::JsonKeyValueStorage;
use crate::memory_document_store::MemoryDocumentStore;
use crate::paths::PadronPaths;

/// Builds a registry from config, with state at the default location.
pub fn build_registry(config: &RegistryConfig) -> Result<Registry> {
    build_registry_at(config, PadronPaths::state_file()?)
}

/// Builds a registry from config with an explicit state file path.
///
/// The document store is picked from config: an HTTP client when a base URL
/// is configured, otherwise an in-memory store.
pub fn build_registry_at(config: &RegistryConfig, state_file: PathBuf) -> Result<Registry> {
    let store: Arc<dyn DocumentStore> = match &config.store.base_url {
        Some(base_url) => {
            tracing::info!("Using HTTP document store at {}", base_url);
            Arc::new(HttpDocumentStore::new(base_url))
        }
        None => {
            tracing::info!("No store URL configured, using in-memory document store");
            Arc::new(MemoryDocumentStore::new())
        }
    };

    Ok(Registry::new(
        Arc::new(JsonKeyValueStorage::new(state_file)),
        Arc::new(StaticCredentialVerifier::new(
            &config.credentials.username,
            &config.credentials.password,
        )),
        store,
        config.store.collection.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builds_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let registry =
            build_registry_at(&RegistryConfig::default(), dir.path().join("state.json")).unwrap();

        registry.session().initialize().await;
        assert!(!registry.session().is_logged_in().await);
        assert!(registry.records().list().await.unwrap().is_empty());
    }
}
