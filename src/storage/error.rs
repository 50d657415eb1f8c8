//! # Storage Errors
//!
//! Failures of the storage collaborator itself. "Not found" is not an error at this
//! layer; lookups return `Option` and the engine decides what absence means.

/// Errors raised while talking to the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
}
