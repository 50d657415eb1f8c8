//! Engine tests against a scripted store.
//!
//! Any storage call a test did not script panics the mock and comes back as
//! `StorageError::StoreDropped`, so asserting on the exact error also proves which
//! storage calls happened.

use chrono::{Duration, TimeZone, Utc};
use order_tracker::engine::{OrderEngine, OrderError};
use order_tracker::model::{NewOrder, Order, OrderFilter, OrderItem, OrderStatus};
use order_tracker::storage::mock::MockStore;
use order_tracker::storage::StorageError;

fn stored(order_id: &str, customer_id: &str, minute: i64) -> Order {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap() + Duration::minutes(minute);
    Order::new(
        NewOrder::new(order_id, customer_id, vec![OrderItem::new("Widget", 1)]),
        at,
    )
}

#[tokio::test]
async fn test_invalid_create_makes_no_storage_call() {
    let mock = MockStore::new();
    let engine = OrderEngine::new(mock.client());

    let payloads = [
        NewOrder::new("", "CUST001", vec![OrderItem::new("Widget", 1)]),
        NewOrder::new("ORD001", "", vec![OrderItem::new("Widget", 1)]),
        NewOrder::new("ORD001", "CUST001", vec![]),
        NewOrder::new("ORD001", "CUST001", vec![OrderItem::new("Widget", 0)]),
    ];
    for params in payloads {
        let result = engine.create_order(params).await;
        assert!(matches!(result, Err(OrderError::Validation { .. })));
    }

    mock.verify();
}

#[tokio::test]
async fn test_invalid_status_makes_no_storage_call() {
    let mock = MockStore::new();
    let engine = OrderEngine::new(mock.client());

    let err = engine.update_status("ORD001", "lost").await.unwrap_err();
    assert_eq!(err.field(), Some("status"));

    let err = engine
        .list_orders(&OrderFilter::new().with_status("lost"))
        .await
        .unwrap_err();
    assert_eq!(err.field(), Some("status"));

    mock.verify();
}

#[tokio::test]
async fn test_create_uses_conditional_insert() {
    let mut mock = MockStore::new();
    mock.expect_insert("ORD001").return_ok(true);
    mock.expect_insert("ORD001").return_ok(false);

    let engine = OrderEngine::new(mock.client());
    let params = NewOrder::new("ORD001", "CUST001", vec![OrderItem::new("Widget", 2)]);

    let order = engine.create_order(params.clone()).await.unwrap();
    assert_eq!(order.status, OrderStatus::Pending);

    let result = engine.create_order(params).await;
    assert_eq!(result, Err(OrderError::Duplicate("ORD001".to_string())));

    mock.verify();
}

#[tokio::test]
async fn test_storage_failure_is_propagated() {
    let mut mock = MockStore::new();
    mock.expect_insert("ORD001").return_err(StorageError::StoreClosed);
    mock.expect_get("ORD001").return_err(StorageError::StoreDropped);
    mock.expect_delete("ORD001").return_err(StorageError::StoreClosed);
    mock.expect_list_all().return_err(StorageError::StoreClosed);

    let engine = OrderEngine::new(mock.client());

    let err = engine
        .create_order(NewOrder::new("ORD001", "CUST001", vec![OrderItem::new("Widget", 2)]))
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::Storage(StorageError::StoreClosed));
    assert_eq!(err.http_status(), 500);

    assert_eq!(
        engine.get_order("ORD001").await,
        Err(OrderError::Storage(StorageError::StoreDropped))
    );
    assert_eq!(
        engine.delete_order("ORD001").await,
        Err(OrderError::Storage(StorageError::StoreClosed))
    );
    assert_eq!(
        engine.list_orders(&OrderFilter::new()).await,
        Err(OrderError::Storage(StorageError::StoreClosed))
    );

    mock.verify();
}

#[tokio::test]
async fn test_update_racing_delete_reports_not_found() {
    let mut mock = MockStore::new();
    mock.expect_get("ORD001")
        .return_ok(Some(stored("ORD001", "CUST001", 0)));
    // Deleted between the read and the write
    mock.expect_replace("ORD001").return_ok(false);

    let engine = OrderEngine::new(mock.client());
    let result = engine.update_status("ORD001", "shipped").await;

    assert_eq!(result, Err(OrderError::NotFound("ORD001".to_string())));
    mock.verify();
}

#[tokio::test]
async fn test_update_writes_back_with_replace() {
    let mut mock = MockStore::new();
    mock.expect_get("ORD001")
        .return_ok(Some(stored("ORD001", "CUST001", 0)));
    mock.expect_replace("ORD001").return_ok(true);

    let engine = OrderEngine::new(mock.client());
    let updated = engine.update_status("ORD001", "delivered").await.unwrap();

    assert_eq!(updated.status, OrderStatus::Delivered);
    assert!(updated.updated_at >= updated.created_at);
    mock.verify();
}

#[tokio::test]
async fn test_list_sorts_unordered_storage_output() {
    let mut mock = MockStore::new();
    mock.expect_list_all().return_ok(vec![
        stored("ORD003", "CUST001", 2),
        stored("ORD001", "CUST002", 0),
        stored("ORD00B", "CUST001", 1),
        stored("ORD00A", "CUST001", 1),
    ]);

    let engine = OrderEngine::new(mock.client());
    let orders = engine.list_orders(&OrderFilter::new()).await.unwrap();

    let ids: Vec<&str> = orders.iter().map(|o| o.order_id.as_str()).collect();
    assert_eq!(ids, vec!["ORD001", "ORD00A", "ORD00B", "ORD003"]);
    mock.verify();
}
