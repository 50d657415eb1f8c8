//! # Mock Store & Testing Guide
//!
//! [`MockStore`] hands out a real [`StoreClient`], but the requests it sends are answered
//! from a queue of scripted expectations instead of a `HashMap`. Use it to test engine
//! logic that is awkward to reach with the real [`StoreActor`](super::StoreActor).
//!
//! | Feature | MockStore | StoreActor |
//! |---------|-----------|------------|
//! | **State** | None (expectations) | Real order map |
//! | **Error Injection** | Easy (`return_err`) | Not possible |
//! | **Call Checking** | `verify()` and strict ordering | None |
//! | **Use Case** | Failure paths, "no write happened" | Behaviour of the engine as a whole |
//!
//! Expectations are consumed in order. A request that does not match the next expectation
//! (different operation or different key) panics the mock task; the caller then sees
//! [`StorageError::StoreDropped`]. An empty expectation queue counts as a mismatch, which is
//! how a test proves that no storage call happened at all.
//!
//! ```rust
//! use order_tracker::engine::{OrderEngine, OrderError};
//! use order_tracker::storage::mock::MockStore;
//! use order_tracker::storage::StorageError;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::new();
//!     mock.expect_get("ORD001").return_err(StorageError::StoreClosed);
//!
//!     let engine = OrderEngine::new(mock.client());
//!     let result = engine.get_order("ORD001").await;
//!
//!     assert!(matches!(result, Err(OrderError::Storage(StorageError::StoreClosed))));
//!     mock.verify();
//! }
//! ```

use super::client::StoreClient;
use super::error::StorageError;
use super::message::StoreRequest;
use crate::model::Order;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// An expected request and the response to give it.
enum Expectation {
    Put {
        order_id: String,
        response: Result<(), StorageError>,
    },
    Insert {
        order_id: String,
        response: Result<bool, StorageError>,
    },
    Replace {
        order_id: String,
        response: Result<bool, StorageError>,
    },
    Get {
        order_id: String,
        response: Result<Option<Order>, StorageError>,
    },
    Delete {
        order_id: String,
        response: Result<Option<Order>, StorageError>,
    },
    ListAll {
        response: Result<Vec<Order>, StorageError>,
    },
}

type Expectations = Arc<Mutex<VecDeque<Expectation>>>;

/// A scripted store with expectation tracking.
///
/// # Example
/// ```ignore
/// let mut mock = MockStore::new();
/// mock.expect_insert("ORD001").return_ok(true);
/// mock.expect_get("ORD001").return_ok(None);
///
/// let engine = OrderEngine::new(mock.client());
/// // Use engine in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockStore {
    client: StoreClient,
    expectations: Expectations,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

fn check_key(operation: &str, expected: &str, actual: &str) {
    assert_eq!(
        expected, actual,
        "MockStore: {operation} called with unexpected order_id"
    );
}

impl MockStore {
    /// Creates a new mock store with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest>(100);
        let expectations: Expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Put {
                            order_id,
                            respond_to,
                            ..
                        },
                        Some(Expectation::Put {
                            order_id: expected,
                            response,
                        }),
                    ) => {
                        check_key("put", &expected, &order_id);
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Insert {
                            order_id,
                            respond_to,
                            ..
                        },
                        Some(Expectation::Insert {
                            order_id: expected,
                            response,
                        }),
                    ) => {
                        check_key("insert", &expected, &order_id);
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Replace {
                            order_id,
                            respond_to,
                            ..
                        },
                        Some(Expectation::Replace {
                            order_id: expected,
                            response,
                        }),
                    ) => {
                        check_key("replace", &expected, &order_id);
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Get {
                            order_id,
                            respond_to,
                        },
                        Some(Expectation::Get {
                            order_id: expected,
                            response,
                        }),
                    ) => {
                        check_key("get", &expected, &order_id);
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete {
                            order_id,
                            respond_to,
                        },
                        Some(Expectation::Delete {
                            order_id: expected,
                            response,
                        }),
                    ) => {
                        check_key("delete", &expected, &order_id);
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::ListAll { respond_to }, Some(Expectation::ListAll { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!(
                            "MockStore: unexpected {} request or expectation mismatch",
                            request.operation()
                        );
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient {
        self.client.clone()
    }

    pub fn expect_put(&mut self, order_id: impl Into<String>) -> ExpectationBuilder<()> {
        self.builder(order_id.into(), |order_id, response| Expectation::Put {
            order_id,
            response,
        })
    }

    pub fn expect_insert(&mut self, order_id: impl Into<String>) -> ExpectationBuilder<bool> {
        self.builder(order_id.into(), |order_id, response| Expectation::Insert {
            order_id,
            response,
        })
    }

    pub fn expect_replace(&mut self, order_id: impl Into<String>) -> ExpectationBuilder<bool> {
        self.builder(order_id.into(), |order_id, response| Expectation::Replace {
            order_id,
            response,
        })
    }

    pub fn expect_get(&mut self, order_id: impl Into<String>) -> ExpectationBuilder<Option<Order>> {
        self.builder(order_id.into(), |order_id, response| Expectation::Get {
            order_id,
            response,
        })
    }

    pub fn expect_delete(
        &mut self,
        order_id: impl Into<String>,
    ) -> ExpectationBuilder<Option<Order>> {
        self.builder(order_id.into(), |order_id, response| Expectation::Delete {
            order_id,
            response,
        })
    }

    pub fn expect_list_all(&mut self) -> ExpectationBuilder<Vec<Order>> {
        self.builder(String::new(), |_, response| Expectation::ListAll { response })
    }

    fn builder<T>(
        &self,
        order_id: String,
        make: fn(String, Result<T, StorageError>) -> Expectation,
    ) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            order_id,
            make,
            expectations: self.expectations.clone(),
        }
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.expectations.lock().unwrap().len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder that records the response for one expected request.
pub struct ExpectationBuilder<T> {
    order_id: String,
    make: fn(String, Result<T, StorageError>) -> Expectation,
    expectations: Expectations,
}

impl<T> ExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StorageError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, StorageError>) {
        let expectation = (self.make)(self.order_id, response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}
