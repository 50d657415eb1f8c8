//! # Order Engine
//!
//! Business rules for orders: validation, id uniqueness, status changes and filtered
//! listing. The engine holds no state of its own beyond a store handle and a clock; it is
//! generic over any [`OrderStore`].
//!
//! ## Status Policy
//!
//! Any recognized status may replace any other, including `delivered -> pending`.
//! Unknown status strings are rejected with [`OrderError::Validation`] and never stored.
//!
//! ## Failure Logging
//!
//! Every public operation runs in its own span carrying the `order_id`. A returned error is
//! logged once at `WARN` by the span, so callers do not need to log it again.

pub mod error;
mod validation;

pub use error::OrderError;

use crate::model::{NewOrder, Order, OrderFilter};
use crate::storage::OrderStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Source of "now" for `created_at` / `updated_at`.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// The order engine.
///
/// Cloning is cheap when the store handle is (as [`StoreClient`](crate::storage::StoreClient)
/// is); all clones share the same storage.
#[derive(Clone)]
pub struct OrderEngine<S> {
    store: S,
    clock: Clock,
}

impl<S: OrderStore> OrderEngine<S> {
    /// Creates an engine over `store` using the system clock.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, Utc::now)
    }

    /// Creates an engine with an injected clock, e.g. a stepping clock in tests.
    pub fn with_clock(store: S, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        Self {
            store,
            clock: Arc::new(clock),
        }
    }

    /// Creates a new order with status `pending`.
    ///
    /// # Errors
    /// - [`OrderError::Validation`] for an empty `order_id` or `customer_id`, an empty item
    ///   list, or an item with an empty name or a quantity below 1. Nothing is written.
    /// - [`OrderError::Duplicate`] if the id is already taken.
    #[instrument(skip(self, params), fields(order_id = %params.order_id), err(Display, level = "warn"))]
    pub async fn create_order(&self, params: NewOrder) -> Result<Order, OrderError> {
        debug!(?params, "create_order called");
        validation::new_order(&params)?;

        let order = Order::new(params, (self.clock)());
        if !self
            .store
            .insert(order.order_id.clone(), order.clone())
            .await?
        {
            return Err(OrderError::Duplicate(order.order_id));
        }

        info!(customer_id = %order.customer_id, items = order.items.len(), "Order created");
        Ok(order)
    }

    /// Fetches one order.
    #[instrument(skip(self), err(Display, level = "warn"))]
    pub async fn get_order(&self, order_id: &str) -> Result<Order, OrderError> {
        validation::order_id(order_id)?;
        self.store
            .get(order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))
    }

    /// Replaces the status of an existing order and refreshes `updated_at`.
    ///
    /// Inputs are checked before the lookup, so an unknown status never reaches storage.
    #[instrument(skip(self), err(Display, level = "warn"))]
    pub async fn update_status(&self, order_id: &str, new_status: &str) -> Result<Order, OrderError> {
        validation::order_id(order_id)?;
        let status = validation::status(new_status)?;

        let mut order = self
            .store
            .get(order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;

        let previous = order.status;
        order.status = status;
        // A clock that steps backwards must not break updated_at >= created_at.
        order.updated_at = (self.clock)().max(order.updated_at);

        // The order may have been deleted since the read.
        if !self
            .store
            .replace(order_id.to_string(), order.clone())
            .await?
        {
            return Err(OrderError::NotFound(order_id.to_string()));
        }

        info!(from = %previous, to = %status, "Status updated");
        Ok(order)
    }

    /// Removes an order and returns the removed record.
    #[instrument(skip(self), err(Display, level = "warn"))]
    pub async fn delete_order(&self, order_id: &str) -> Result<Order, OrderError> {
        validation::order_id(order_id)?;
        let removed = self
            .store
            .delete(order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;

        info!("Order deleted");
        Ok(removed)
    }

    /// Lists the orders matching every supplied filter field.
    ///
    /// The result is sorted by `created_at`, then `order_id`.
    #[instrument(skip(self), err(Display, level = "warn"))]
    pub async fn list_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, OrderError> {
        let status = filter
            .status
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(validation::status)
            .transpose()?;
        let customer_id = filter.customer_id.as_deref().filter(|c| !c.is_empty());

        let mut orders: Vec<Order> = self
            .store
            .list_all()
            .await?
            .into_iter()
            .filter(|order| status.map_or(true, |s| order.status == s))
            .filter(|order| customer_id.map_or(true, |c| order.customer_id == c))
            .collect();
        orders.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.order_id.cmp(&b.order_id))
        });

        debug!(count = orders.len(), "list_orders done");
        Ok(orders)
    }
}
