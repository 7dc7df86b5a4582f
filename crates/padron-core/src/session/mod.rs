//! Session domain: login state, durable flag storage, credential checking.

mod manager;
mod model;
mod storage;
mod verifier;

pub use manager::SessionManager;
pub use model::{SESSION_KEY, SESSION_MARKER, SessionState};
pub use storage::KeyValueStorage;
pub use verifier::{CredentialVerifier, StaticCredentialVerifier};
