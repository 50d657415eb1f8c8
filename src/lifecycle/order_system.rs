use super::config::Config;
use crate::engine::OrderEngine;
use crate::storage::{StoreActor, StoreClient};
use tracing::{error, info};

/// The runtime orchestrator for the order tracker.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: starting the store actor once and stopping it on shutdown
/// - **Dependency Wiring**: handing the store client to the engine
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(&Config::default());
///
/// let order = system.engine.create_order(params).await?;
/// system.engine.update_status(&order.order_id, "shipped").await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// The engine every caller goes through.
    pub engine: OrderEngine<StoreClient>,

    /// Task handle of the store actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl OrderSystem {
    /// Spawns the store actor and builds the engine on top of it.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &Config) -> Self {
        let (store_actor, store_client) = StoreActor::new(config.store_buffer);
        let handle = tokio::spawn(store_actor.run());

        info!(store_buffer = config.store_buffer, "Order system started");
        Self {
            engine: OrderEngine::new(store_client),
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the engine drops its store client; once every other clone of the engine is
    /// gone too, the store actor's channel closes and its loop exits.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the store actor exited cleanly
    /// - `Err(JoinError)` if the store actor task panicked or was cancelled
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        info!("Shutting down order system...");
        drop(self.engine);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Store task failed");
            return Err(e);
        }

        info!("Order system shutdown complete.");
        Ok(())
    }
}
