//! Padron infrastructure: concrete collaborators for the core traits.
//!
//! - [`JsonKeyValueStorage`] / [`MemoryKeyValueStorage`]: durable and
//!   ephemeral implementations of `KeyValueStorage` for the session flag.
//! - [`HttpDocumentStore`] / [`MemoryDocumentStore`]: remote and in-memory
//!   implementations of `DocumentStore` for the record collection.
//! - [`config_loader`] and [`bootstrap`]: TOML config loading and registry
//!   wiring.

pub mod bootstrap;
pub mod config_loader;
pub mod http_document_store;
pub mod json_key_value_storage;
pub mod memory_document_store;
pub mod memory_key_value_storage;
pub mod paths;

pub use crate::bootstrap::{build_registry, build_registry_at};
pub use crate::config_loader::{load_config, load_default_config};
pub use crate::http_document_store::HttpDocumentStore;
pub use crate::json_key_value_storage::JsonKeyValueStorage;
pub use crate::memory_document_store::MemoryDocumentStore;
pub use crate::memory_key_value_storage::MemoryKeyValueStorage;
pub use crate::paths::PadronPaths;
