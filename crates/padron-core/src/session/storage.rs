//! Durable key-value storage trait.

use async_trait::async_trait;

use crate::error::Result;

/// An abstract durable key-value store.
///
/// This is the external collaborator the session flag is persisted through,
/// decoupling `SessionManager` from the concrete storage mechanism (a local
/// file, platform preferences, a database). Only the single session-flag key
/// is stored today, but the contract is a general string map.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Reads the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}
