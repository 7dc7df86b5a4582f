//! Padron core: session and record store for a personal user registry.
//!
//! Two loosely coupled components make up the core:
//!
//! - [`session::SessionManager`]: the single source of truth for the
//!   logged-in/logged-out state, persisted through an injected
//!   [`session::KeyValueStorage`] so it survives restarts.
//! - [`record::RecordStore`]: CRUD over a remote collection of
//!   [`record::UserRecord`]s behind the [`record::DocumentStore`] trait,
//!   with a locally cached list refreshed after every mutation.
//!
//! Concrete collaborators (file-backed key-value storage, the HTTP document
//! store client) live in the `padron-infrastructure` crate. The UI layer is
//! an external collaborator: it triggers these operations on user gestures
//! and surfaces [`PadronError`] notices.

pub mod config;
pub mod error;
pub mod record;
pub mod registry;
pub mod session;

pub use error::{PadronError, Result};
pub use registry::Registry;
