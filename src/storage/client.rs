//! # Store Client
//!
//! The cloneable handle that turns [`OrderStore`] calls into [`StoreRequest`] messages.

use super::error::StorageError;
use super::message::StoreRequest;
use super::OrderStore;
use crate::model::Order;
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a [`StoreActor`](super::StoreActor) (or a
/// [`MockStore`](super::mock::MockStore)).
///
/// * **Cloneable** - holds only a sender, so cloning is inexpensive.
/// * **Atomic per call** - each method is a single message, answered by the actor in one step.
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, StorageError>>) -> StoreRequest,
    ) -> Result<T, StorageError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StorageError::StoreClosed)?;
        response.await.map_err(|_| StorageError::StoreDropped)?
    }
}

#[async_trait]
impl OrderStore for StoreClient {
    async fn put(&self, order_id: String, order: Order) -> Result<(), StorageError> {
        self.request(|respond_to| StoreRequest::Put {
            order_id,
            order,
            respond_to,
        })
        .await
    }

    async fn insert(&self, order_id: String, order: Order) -> Result<bool, StorageError> {
        self.request(|respond_to| StoreRequest::Insert {
            order_id,
            order,
            respond_to,
        })
        .await
    }

    async fn replace(&self, order_id: String, order: Order) -> Result<bool, StorageError> {
        self.request(|respond_to| StoreRequest::Replace {
            order_id,
            order,
            respond_to,
        })
        .await
    }

    async fn get(&self, order_id: &str) -> Result<Option<Order>, StorageError> {
        let order_id = order_id.to_string();
        self.request(|respond_to| StoreRequest::Get {
            order_id,
            respond_to,
        })
        .await
    }

    async fn delete(&self, order_id: &str) -> Result<Option<Order>, StorageError> {
        let order_id = order_id.to_string();
        self.request(|respond_to| StoreRequest::Delete {
            order_id,
            respond_to,
        })
        .await
    }

    async fn list_all(&self) -> Result<Vec<Order>, StorageError> {
        self.request(|respond_to| StoreRequest::ListAll { respond_to })
            .await
    }
}
