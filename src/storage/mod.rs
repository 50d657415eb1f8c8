//! Persistence contract for orders and its in-process reference implementation.
//!
//! The engine only ever sees the [`OrderStore`] trait. The crate ships two
//! implementations of the transport behind it:
//!
//! - [`StoreActor`] / [`StoreClient`] - a Tokio task that owns a `HashMap` of orders and
//!   answers requests one at a time. Sequential processing is what makes the conditional
//!   writes ([`OrderStore::insert`], [`OrderStore::replace`]) atomic per key.
//! - [`mock::MockStore`] - hands out a [`StoreClient`] whose requests are answered from a
//!   queue of scripted expectations.
//!
//! # Architecture Note
//! `StoreClient` is only a channel sender, so it is cheap to clone and every clone talks to
//! the same actor. The actor stops once the last client is dropped.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use error::StorageError;
pub use message::{Response, StoreRequest};

use crate::model::Order;
use async_trait::async_trait;

/// Key-value persistence for orders, keyed by `order_id`.
///
/// Implementations must make each call atomic with respect to other calls on the same key.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Inserts or overwrites the record for `order_id`. No uniqueness check.
    async fn put(&self, order_id: String, order: Order) -> Result<(), StorageError>;

    /// Writes the record only if `order_id` is absent. Returns `false` (and writes nothing)
    /// when a record already exists.
    async fn insert(&self, order_id: String, order: Order) -> Result<bool, StorageError>;

    /// Overwrites the record only if `order_id` is present. Returns `false` (and writes
    /// nothing) when there is no record.
    async fn replace(&self, order_id: String, order: Order) -> Result<bool, StorageError>;

    /// Fetches a record. `None` means not found.
    async fn get(&self, order_id: &str) -> Result<Option<Order>, StorageError>;

    /// Removes a record and returns it. `None` means not found.
    async fn delete(&self, order_id: &str) -> Result<Option<Order>, StorageError>;

    /// Snapshot of every stored order. Iteration order is unspecified.
    async fn list_all(&self) -> Result<Vec<Order>, StorageError>;
}
