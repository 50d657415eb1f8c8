//! Error types for the order engine.

use crate::storage::StorageError;
use thiserror::Error;

/// Errors returned by [`OrderEngine`](super::OrderEngine) operations.
///
/// None of these are fatal; the caller (normally a transport layer) decides how to report
/// them. [`OrderError::http_status`] gives the conventional HTTP mapping.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Input was malformed or missing, or named an unknown status.
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    /// The referenced order does not exist.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An order with this id already exists.
    #[error("Order already exists: {0}")]
    Duplicate(String),

    /// The storage collaborator failed.
    #[error("Order storage error: {0}")]
    Storage(#[from] StorageError),
}

impl OrderError {
    pub(crate) fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The offending field for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::NotFound(_) => 404,
            Self::Duplicate(_) => 409,
            Self::Storage(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(OrderError::validation("status", "unknown").http_status(), 400);
        assert_eq!(OrderError::NotFound("ORD001".into()).http_status(), 404);
        assert_eq!(OrderError::Duplicate("ORD001".into()).http_status(), 409);
        assert_eq!(OrderError::from(StorageError::StoreClosed).http_status(), 500);
    }

    #[test]
    fn test_validation_carries_field() {
        let err = OrderError::validation("items[1].quantity", "must be at least 1");
        assert_eq!(err.field(), Some("items[1].quantity"));
        assert_eq!(
            err.to_string(),
            "Invalid items[1].quantity: must be at least 1"
        );
        assert_eq!(OrderError::NotFound("ORD001".into()).field(), None);
    }
}
