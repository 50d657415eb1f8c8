//! Input checks run once at the engine boundary, before storage is touched.

use super::error::OrderError;
use crate::model::{NewOrder, OrderStatus, UnknownStatus};

pub(crate) fn order_id(order_id: &str) -> Result<(), OrderError> {
    if order_id.is_empty() {
        return Err(OrderError::validation("order_id", "must be a non-empty string"));
    }
    Ok(())
}

pub(crate) fn status(value: &str) -> Result<OrderStatus, OrderError> {
    value
        .parse()
        .map_err(|e: UnknownStatus| OrderError::validation("status", e.to_string()))
}

/// Checks every field of a creation payload. The first failure wins.
pub(crate) fn new_order(params: &NewOrder) -> Result<(), OrderError> {
    order_id(&params.order_id)?;

    if params.customer_id.is_empty() {
        return Err(OrderError::validation(
            "customer_id",
            "must be a non-empty string",
        ));
    }

    if params.items.is_empty() {
        return Err(OrderError::validation("items", "must contain at least one item"));
    }

    for (i, item) in params.items.iter().enumerate() {
        if item.name.is_empty() {
            return Err(OrderError::validation(
                format!("items[{i}].name"),
                "must be a non-empty string",
            ));
        }
        if item.quantity < 1 {
            return Err(OrderError::validation(
                format!("items[{i}].quantity"),
                format!("must be a positive integer, got {}", item.quantity),
            ));
        }
    }

    Ok(())
}
