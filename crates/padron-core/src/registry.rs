//! Registry facade: the wired-up core a UI embeds.

use std::sync::Arc;

use crate::record::{DocumentStore, RecordStore};
use crate::session::{CredentialVerifier, KeyValueStorage, SessionManager};

/// The session manager and record store wired over their collaborators.
///
/// One instance per process; clones share state. The UI layer holds this
/// handle, passes it to whichever screen needs it, and renders whatever the
/// two components return. There is no ambient global to look up.
#[derive(Clone)]
pub struct Registry {
    session: SessionManager,
    records: RecordStore,
}

impl Registry {
    /// Wires a registry from its injected collaborators.
    pub fn new(
        storage: Arc<dyn KeyValueStorage>,
        verifier: Arc<dyn CredentialVerifier>,
        store: Arc<dyn DocumentStore>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            session: SessionManager::new(storage, verifier),
            records: RecordStore::new(store, collection),
        }
    }

    /// The process-wide session manager.
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// The record store.
    pub fn records(&self) -> &RecordStore {
        &self.records
    }
}
