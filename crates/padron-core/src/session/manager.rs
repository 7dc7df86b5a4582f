//! Session manager: the single source of truth for the login state.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{PadronError, Result};
use crate::session::model::{SESSION_KEY, SESSION_MARKER, SessionState};
use crate::session::storage::KeyValueStorage;
use crate::session::verifier::CredentialVerifier;

/// Process-wide authentication state, durable across restarts.
///
/// Both collaborators are injected: the durable key-value store holding the
/// session flag, and the credential verifier. The manager is cheap to clone
/// and every clone shares the same state.
///
/// State machine: `LoggedOut` (initial) and `LoggedIn`. `login()` moves to
/// `LoggedIn` only after the flag write succeeded; a failed login attempt
/// leaves the state untouched.
#[derive(Clone)]
pub struct SessionManager {
    storage: Arc<dyn KeyValueStorage>,
    verifier: Arc<dyn CredentialVerifier>,
    state: Arc<Mutex<SessionState>>,
}

impl SessionManager {
    /// Creates a manager in the initial `LoggedOut` state.
    ///
    /// Call [`initialize`](Self::initialize) afterwards to restore persisted
    /// state from a prior run.
    pub fn new(storage: Arc<dyn KeyValueStorage>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            storage,
            verifier,
            state: Arc::new(Mutex::new(SessionState::LoggedOut)),
        }
    }

    /// Restores the session state persisted by a prior run.
    ///
    /// One storage read; the state becomes `LoggedIn` only when the stored
    /// value matches the sentinel marker exactly. A storage failure degrades
    /// to `LoggedOut` with a warning instead of surfacing an error, so a
    /// broken flag file never blocks startup.
    pub async fn initialize(&self) {
        let stored = match self.storage.get(SESSION_KEY).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read session flag, assuming logged out: {}", e);
                None
            }
        };

        let mut state = self.state.lock().await;
        *state = SessionState::from_stored(stored.as_deref());
    }

    /// Persists the session marker and moves to `LoggedIn`.
    ///
    /// The in-memory state only flips after the write succeeded; on a write
    /// failure the state stays as it was and a `Persistence` error surfaces.
    pub async fn login(&self) -> Result<()> {
        self.storage
            .set(SESSION_KEY, SESSION_MARKER)
            .await
            .map_err(|e| PadronError::persistence(format!("failed to persist login: {}", e)))?;

        let mut state = self.state.lock().await;
        *state = SessionState::LoggedIn;
        tracing::info!("Session logged in");
        Ok(())
    }

    /// Removes the persisted marker and moves to `LoggedOut`.
    pub async fn logout(&self) -> Result<()> {
        self.storage
            .remove(SESSION_KEY)
            .await
            .map_err(|e| PadronError::persistence(format!("failed to clear login: {}", e)))?;

        let mut state = self.state.lock().await;
        *state = SessionState::LoggedOut;
        tracing::info!("Session logged out");
        Ok(())
    }

    /// Verifies the pair and logs in on success.
    ///
    /// On a verifier mismatch the state is left unchanged and
    /// `InvalidCredentials` is returned for the UI to surface as a notice.
    pub async fn login_with_credentials(&self, username: &str, password: &str) -> Result<()> {
        if !self.verifier.verify(username, password) {
            tracing::debug!("Login rejected for username '{}'", username);
            return Err(PadronError::InvalidCredentials);
        }
        self.login().await
    }

    /// Current in-memory state.
    pub async fn state(&self) -> SessionState {
        *self.state.lock().await
    }

    /// True when the current state is `LoggedIn`.
    pub async fn is_logged_in(&self) -> bool {
        self.state().await.is_logged_in()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex as StdMutex;

    use super::*;
    use crate::session::verifier::StaticCredentialVerifier;

    // Mock KeyValueStorage backed by a plain HashMap.
    struct MockStorage {
        values: StdMutex<HashMap<String, String>>,
        fail_writes: bool,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                values: StdMutex::new(HashMap::new()),
                fail_writes: false,
            }
        }

        fn failing() -> Self {
            Self {
                values: StdMutex::new(HashMap::new()),
                fail_writes: true,
            }
        }
    }

    #[async_trait::async_trait]
    impl KeyValueStorage for MockStorage {
        async fn get(&self, key: &str) -> crate::error::Result<Option<String>> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> crate::error::Result<()> {
            if self.fail_writes {
                return Err(PadronError::io("disk full"));
            }
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> crate::error::Result<()> {
            if self.fail_writes {
                return Err(PadronError::io("disk full"));
            }
            self.values.lock().unwrap().remove(key);
            Ok(())
        }
    }

    fn manager_over(storage: Arc<MockStorage>) -> SessionManager {
        SessionManager::new(storage, Arc::new(StaticCredentialVerifier::new("user", "password")))
    }

    #[tokio::test]
    async fn test_initial_state_is_logged_out() {
        let manager = manager_over(Arc::new(MockStorage::new()));
        manager.initialize().await;
        assert!(!manager.is_logged_in().await);
    }

    #[tokio::test]
    async fn test_login_with_valid_credentials() {
        let manager = manager_over(Arc::new(MockStorage::new()));
        manager.login_with_credentials("user", "password").await.unwrap();
        assert!(manager.is_logged_in().await);
    }

    #[tokio::test]
    async fn test_login_with_invalid_credentials() {
        let manager = manager_over(Arc::new(MockStorage::new()));
        let err = manager
            .login_with_credentials("user", "wrong")
            .await
            .unwrap_err();
        assert!(err.is_invalid_credentials());
        assert_eq!(manager.state().await, SessionState::LoggedOut);
    }

    #[tokio::test]
    async fn test_login_persists_across_restart() {
        let storage = Arc::new(MockStorage::new());

        let manager = manager_over(storage.clone());
        manager.login().await.unwrap();

        // Fresh manager over the same storage simulates a process restart.
        let restarted = manager_over(storage);
        restarted.initialize().await;
        assert!(restarted.is_logged_in().await);
    }

    #[tokio::test]
    async fn test_logout_clears_persisted_marker() {
        let storage = Arc::new(MockStorage::new());

        let manager = manager_over(storage.clone());
        manager.login().await.unwrap();
        manager.logout().await.unwrap();

        assert!(storage.values.lock().unwrap().get(SESSION_KEY).is_none());

        let restarted = manager_over(storage);
        restarted.initialize().await;
        assert!(!restarted.is_logged_in().await);
    }

    #[tokio::test]
    async fn test_failed_persist_leaves_state_logged_out() {
        let manager = manager_over(Arc::new(MockStorage::failing()));
        let err = manager.login().await.unwrap_err();
        assert!(err.is_persistence());
        assert!(!manager.is_logged_in().await);
    }

    #[tokio::test]
    async fn test_initialize_degrades_on_storage_failure() {
        struct BrokenStorage;

        #[async_trait::async_trait]
        impl KeyValueStorage for BrokenStorage {
            async fn get(&self, _key: &str) -> crate::error::Result<Option<String>> {
                Err(PadronError::io("corrupt state file"))
            }
            async fn set(&self, _key: &str, _value: &str) -> crate::error::Result<()> {
                Ok(())
            }
            async fn remove(&self, _key: &str) -> crate::error::Result<()> {
                Ok(())
            }
        }

        let manager = SessionManager::new(
            Arc::new(BrokenStorage),
            Arc::new(StaticCredentialVerifier::new("user", "password")),
        );
        manager.initialize().await;
        assert!(!manager.is_logged_in().await);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let manager = manager_over(Arc::new(MockStorage::new()));
        let clone = manager.clone();
        manager.login().await.unwrap();
        assert!(clone.is_logged_in().await);
    }
}
