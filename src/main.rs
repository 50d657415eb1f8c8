//! Demo run of the order tracker.
//!
//! Creates an order, ships it, lists by customer and status, deletes it, and shows the
//! `NotFound` that follows, logging every step.

use order_tracker::lifecycle::{setup_tracing, Config, OrderSystem};
use order_tracker::model::{NewOrder, OrderFilter, OrderItem};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Config::from_env()?;
    info!(?config, "Starting order tracker demo");

    let system = OrderSystem::new(&config);
    let engine = &system.engine;

    let span = tracing::info_span!("order_lifecycle");
    async {
        let order = engine
            .create_order(NewOrder::new(
                "ORD001",
                "CUST001",
                vec![OrderItem::new("Widget", 2)],
            ))
            .await?;
        info!(order_id = %order.order_id, status = %order.status, "Order placed");

        engine
            .create_order(NewOrder::new(
                "ORD002",
                "CUST002",
                vec![OrderItem::new("Gadget", 1), OrderItem::new("Gizmo", 4)],
            ))
            .await?;

        let shipped = engine.update_status("ORD001", "shipped").await?;
        info!(
            status = %shipped.status,
            updated_at = %shipped.updated_at,
            "Order shipped"
        );

        let for_customer = engine
            .list_orders(&OrderFilter::new().with_customer("CUST002"))
            .await?;
        info!(count = for_customer.len(), "Orders for CUST002");

        let shipped_for_customer = engine
            .list_orders(
                &OrderFilter::new()
                    .with_status("shipped")
                    .with_customer("CUST001"),
            )
            .await?;
        info!(count = shipped_for_customer.len(), "Shipped orders for CUST001");

        engine.delete_order("ORD001").await?;
        if let Err(e) = engine.get_order("ORD001").await {
            info!(http_status = e.http_status(), "Lookup after delete: {e}");
        }

        Ok::<_, order_tracker::engine::OrderError>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
