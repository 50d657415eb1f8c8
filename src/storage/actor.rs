//! # Store Actor
//!
//! The server half of the in-process store. It owns the order map and the receiving end
//! of the request channel, and processes requests sequentially.

use super::client::StoreClient;
use super::message::StoreRequest;
use crate::model::Order;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The actor that owns every stored order.
///
/// # Concurrency Model
/// Requests are handled one at a time inside a single Tokio task, so the `store` needs no
/// `Mutex`. A conditional write such as `Insert` checks and writes within one message,
/// which is what gives the per-key atomicity the engine relies on for duplicate detection.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StoreActor::new(buffer_size)` returns the actor and its client.
/// 2.  **Run**: spawn `actor.run()` on the runtime.
/// 3.  **Use**: hand the client (or clones of it) to an [`OrderEngine`](crate::engine::OrderEngine).
///
/// ```rust
/// use order_tracker::engine::OrderEngine;
/// use order_tracker::storage::StoreActor;
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::new(16);
///     tokio::spawn(actor.run());
///
///     let engine = OrderEngine::new(client);
///     assert!(engine.list_orders(&Default::default()).await.unwrap().is_empty());
/// }
/// ```
pub struct StoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    store: HashMap<String, Order>,
}

impl StoreActor {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. When the channel is full,
    ///   client calls wait for space. Must be greater than zero.
    pub fn new(buffer_size: usize) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!("Store started");

        while let Some(msg) = self.receiver.recv().await {
            debug!(operation = msg.operation(), "Request");
            self.handle(msg);
        }

        info!(size = self.store.len(), "Store shutdown");
    }

    fn handle(&mut self, msg: StoreRequest) {
        match msg {
            StoreRequest::Put {
                order_id,
                order,
                respond_to,
            } => {
                self.store.insert(order_id.clone(), order);
                info!(%order_id, size = self.store.len(), "Stored");
                let _ = respond_to.send(Ok(()));
            }
            StoreRequest::Insert {
                order_id,
                order,
                respond_to,
            } => {
                let inserted = match self.store.entry(order_id.clone()) {
                    Entry::Occupied(_) => false,
                    Entry::Vacant(slot) => {
                        slot.insert(order);
                        true
                    }
                };
                if inserted {
                    info!(%order_id, size = self.store.len(), "Inserted");
                } else {
                    debug!(%order_id, "Insert skipped, key exists");
                }
                let _ = respond_to.send(Ok(inserted));
            }
            StoreRequest::Replace {
                order_id,
                order,
                respond_to,
            } => {
                let replaced = match self.store.get_mut(&order_id) {
                    Some(existing) => {
                        *existing = order;
                        true
                    }
                    None => false,
                };
                if replaced {
                    info!(%order_id, "Replaced");
                } else {
                    debug!(%order_id, "Replace skipped, key absent");
                }
                let _ = respond_to.send(Ok(replaced));
            }
            StoreRequest::Get {
                order_id,
                respond_to,
            } => {
                let order = self.store.get(&order_id).cloned();
                debug!(%order_id, found = order.is_some(), "Get");
                let _ = respond_to.send(Ok(order));
            }
            StoreRequest::Delete {
                order_id,
                respond_to,
            } => {
                let removed = self.store.remove(&order_id);
                if removed.is_some() {
                    info!(%order_id, size = self.store.len(), "Deleted");
                } else {
                    debug!(%order_id, "Delete skipped, key absent");
                }
                let _ = respond_to.send(Ok(removed));
            }
            StoreRequest::ListAll { respond_to } => {
                let orders: Vec<Order> = self.store.values().cloned().collect();
                debug!(count = orders.len(), "ListAll");
                let _ = respond_to.send(Ok(orders));
            }
        }
    }
}
