//! Record domain: user-registry entries and their remote store boundary.

mod document;
mod model;
mod store;

pub use document::{Document, DocumentStore};
pub use model::{RecordDraft, Sex, UserRecord};
pub use store::RecordStore;
