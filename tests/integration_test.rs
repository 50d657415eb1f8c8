use order_tracker::engine::OrderError;
use order_tracker::lifecycle::{Config, OrderSystem};
use order_tracker::model::{NewOrder, OrderFilter, OrderItem, OrderStatus};

fn widget_order(order_id: &str, customer_id: &str) -> NewOrder {
    NewOrder::new(order_id, customer_id, vec![OrderItem::new("Widget", 2)])
}

/// Full end-to-end test through the system orchestrator.
#[tokio::test]
async fn test_full_order_system_integration() {
    let system = OrderSystem::new(&Config::default());

    let created = system
        .engine
        .create_order(widget_order("ORD001", "CUST001"))
        .await
        .expect("Failed to create order");
    assert_eq!(created.status, OrderStatus::Pending);

    system
        .engine
        .create_order(widget_order("ORD002", "CUST002"))
        .await
        .expect("Failed to create second order");

    let shipped = system
        .engine
        .update_status("ORD001", "shipped")
        .await
        .expect("Failed to update status");
    assert_eq!(shipped.status, OrderStatus::Shipped);
    assert!(shipped.updated_at >= created.updated_at);

    let for_customer = system
        .engine
        .list_orders(&OrderFilter::new().with_customer("CUST002"))
        .await
        .expect("Failed to list orders");
    assert_eq!(for_customer.len(), 1);
    assert_eq!(for_customer[0].order_id, "ORD002");

    system
        .engine
        .delete_order("ORD001")
        .await
        .expect("Failed to delete order");
    assert!(matches!(
        system.engine.get_order("ORD001").await,
        Err(OrderError::NotFound(_))
    ));

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Concurrent creation of one id: exactly one caller wins.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_creation() {
    let system = OrderSystem::new(&Config::default());

    let mut handles = vec![];
    for i in 0..10 {
        let engine = system.engine.clone();
        handles.push(tokio::spawn(async move {
            engine
                .create_order(widget_order("ORD001", &format!("CUST{i:03}")))
                .await
        }));
    }

    let mut successful = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful += 1,
            Err(OrderError::Duplicate(id)) => {
                assert_eq!(id, "ORD001");
                duplicates += 1;
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(successful, 1, "Expected exactly one successful creation");
    assert_eq!(duplicates, 9);

    let all = system.engine.list_orders(&OrderFilter::new()).await.unwrap();
    assert_eq!(all.len(), 1);

    system.shutdown().await.unwrap();
}

/// Concurrent creation of distinct ids: every order lands.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_distinct_orders() {
    let system = OrderSystem::new(&Config { store_buffer: 4 });

    let mut handles = vec![];
    for i in 0..50 {
        let engine = system.engine.clone();
        handles.push(tokio::spawn(async move {
            engine
                .create_order(widget_order(&format!("ORD{i:03}"), "CUST001"))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().expect("Failed to create order");
    }

    let all = system
        .engine
        .list_orders(&OrderFilter::new().with_customer("CUST001"))
        .await
        .unwrap();
    assert_eq!(all.len(), 50);

    system.shutdown().await.unwrap();
}

/// An update racing a delete must never bring the order back.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_update_racing_delete_never_resurrects() {
    let system = OrderSystem::new(&Config::default());

    for round in 0..20 {
        let id = format!("ORD{round:03}");
        system
            .engine
            .create_order(widget_order(&id, "CUST001"))
            .await
            .unwrap();

        let updater = {
            let engine = system.engine.clone();
            let id = id.clone();
            tokio::spawn(async move { engine.update_status(&id, "shipped").await })
        };
        let deleter = {
            let engine = system.engine.clone();
            let id = id.clone();
            tokio::spawn(async move { engine.delete_order(&id).await })
        };

        let update = updater.await.unwrap();
        assert!(matches!(update, Ok(_) | Err(OrderError::NotFound(_))));
        deleter.await.unwrap().expect("Delete of an existing order failed");

        assert!(matches!(
            system.engine.get_order(&id).await,
            Err(OrderError::NotFound(_))
        ));
    }

    system.shutdown().await.unwrap();
}
