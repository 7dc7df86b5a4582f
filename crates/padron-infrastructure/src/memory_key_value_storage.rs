//! In-memory key-value storage.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use padron_core::Result;
use padron_core::session::KeyValueStorage;

/// Key-value storage held entirely in memory.
///
/// Nothing survives a restart; meant for tests and ephemeral runs. Clones
/// share the same map.
#[derive(Clone, Default)]
pub struct MemoryKeyValueStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKeyValueStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryKeyValueStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.values.lock().await.remove(key);
        Ok(())
    }
}
