//! # Store Messages
//!
//! The request type carried from a [`StoreClient`](super::StoreClient) to the
//! [`StoreActor`](super::StoreActor), one variant per [`OrderStore`](super::OrderStore) method.

use super::error::StorageError;
use crate::model::Order;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StorageError>>;

/// Internal message sent to the store actor.
#[derive(Debug)]
pub enum StoreRequest {
    Put {
        order_id: String,
        order: Order,
        respond_to: Response<()>,
    },
    Insert {
        order_id: String,
        order: Order,
        respond_to: Response<bool>,
    },
    Replace {
        order_id: String,
        order: Order,
        respond_to: Response<bool>,
    },
    Get {
        order_id: String,
        respond_to: Response<Option<Order>>,
    },
    Delete {
        order_id: String,
        respond_to: Response<Option<Order>>,
    },
    ListAll {
        respond_to: Response<Vec<Order>>,
    },
}

impl StoreRequest {
    /// Short name of the operation, used in logs and mock mismatch reports.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Put { .. } => "put",
            Self::Insert { .. } => "insert",
            Self::Replace { .. } => "replace",
            Self::Get { .. } => "get",
            Self::Delete { .. } => "delete",
            Self::ListAll { .. } => "list_all",
        }
    }
}
