//! File-backed key-value storage.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use padron_core::session::KeyValueStorage;
use padron_core::{PadronError, Result};

/// Durable key-value storage backed by a single JSON object file.
///
/// Writes go through a temporary file followed by an atomic rename, so the
/// file on disk is always a complete JSON document. A write lock serializes
/// mutations; reads go straight to the file.
pub struct JsonKeyValueStorage {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonKeyValueStorage {
    /// Creates a storage handle for the given file path.
    ///
    /// The file and its parent directory are created lazily on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn load(&self) -> Result<HashMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                if content.trim().is_empty() {
                    return Ok(HashMap::new());
                }
                Ok(serde_json::from_str(&content)?)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, values: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(values)?;

        // Write to a sibling temp file, then rename atomically.
        let tmp_path = self.path.with_extension("tmp");
        let mut tmp_file = tokio::fs::File::create(&tmp_path).await?;
        tmp_file.write_all(json.as_bytes()).await?;
        tmp_file.sync_all().await?;
        drop(tmp_file);

        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorage for JsonKeyValueStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.load().await?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut values = self.load().await.unwrap_or_else(|e| {
            tracing::warn!("Unreadable state file, starting fresh: {}", e);
            HashMap::new()
        });
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
            .await
            .map_err(|e| PadronError::persistence(format!("failed to write state file: {}", e)))
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut values = self.load().await.unwrap_or_else(|e| {
            tracing::warn!("Unreadable state file, starting fresh: {}", e);
            HashMap::new()
        });
        values.remove(key);
        self.save(&values)
            .await
            .map_err(|e| PadronError::persistence(format!("failed to write state file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_in(dir: &tempfile::TempDir) -> JsonKeyValueStorage {
        JsonKeyValueStorage::new(dir.path().join("state.json"))
    }

    #[tokio::test]
    async fn test_get_on_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        assert_eq!(storage.get("isLoggedIn").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        storage.set("isLoggedIn", "true").await.unwrap();
        assert_eq!(
            storage.get("isLoggedIn").await.unwrap(),
            Some("true".to_string())
        );
    }

    #[tokio::test]
    async fn test_values_survive_new_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        JsonKeyValueStorage::new(&path)
            .set("isLoggedIn", "true")
            .await
            .unwrap();

        let reopened = JsonKeyValueStorage::new(&path);
        assert_eq!(
            reopened.get("isLoggedIn").await.unwrap(),
            Some("true".to_string())
        );
    }

    #[tokio::test]
    async fn test_remove_deletes_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        storage.set("isLoggedIn", "true").await.unwrap();
        storage.remove("isLoggedIn").await.unwrap();
        assert_eq!(storage.get("isLoggedIn").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_absent_key_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        storage.remove("isLoggedIn").await.unwrap();
    }

    #[tokio::test]
    async fn test_file_on_disk_is_valid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let storage = JsonKeyValueStorage::new(&path);

        storage.set("isLoggedIn", "true").await.unwrap();
        storage.set("other", "value").await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: HashMap<String, String> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[tokio::test]
    async fn test_set_keeps_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        storage.set("a", "1").await.unwrap();
        storage.set("b", "2").await.unwrap();
        assert_eq!(storage.get("a").await.unwrap(), Some("1".to_string()));
    }
}
