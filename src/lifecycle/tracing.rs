//! # Observability & Tracing
//!
//! [`setup_tracing`] installs structured logging for the whole process.
//!
//! ## Configuration
//!
//! Compact format with the module prefix hidden (`with_target(false)`); spans are shown
//! inline, so an engine call logs as `update_status{order_id="ORD001" ...}: Status updated`.
//! Verbosity comes from `RUST_LOG` and defaults to `info`.
//!
//! ```bash
//! RUST_LOG=info cargo run                          # outcomes and rejections
//! RUST_LOG=debug cargo run                         # full payloads, every store request
//! RUST_LOG=order_tracker::storage=debug cargo run  # store traffic only
//! ```
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: `Store started`, `Store shutdown` with the final size
//! - **Store mutations**: `Inserted`, `Replaced`, `Stored`, `Deleted` with `order_id` and size
//! - **Engine operations**: one span per call; `Order created`, `Status updated`, `Order deleted`
//! - **Rejections**: every returned `OrderError` once, at `WARN`, inside the call's span
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Store started
//! INFO create_order{order_id=ORD001}: Inserted order_id="ORD001" size=1
//! INFO create_order{order_id=ORD001}: Order created customer_id=CUST001 items=1
//! INFO update_status{order_id="ORD001" new_status="shipped"}: Replaced order_id="ORD001"
//! INFO update_status{order_id="ORD001" new_status="shipped"}: Status updated from=pending to=shipped
//! WARN get_order{order_id="ORD001"}: error=Order not found: ORD001
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
