//! # Order Tracker
//!
//! > **Order lifecycle engine over a swappable store.**
//!
//! Tracks customer orders through `pending -> shipped -> delivered / cancelled`. The crate
//! is the business core only: a transport layer (HTTP, CLI, ...) calls one
//! [`OrderEngine`](engine::OrderEngine) operation per request and turns the result or
//! [`OrderError`](engine::OrderError) into a response.
//!
//! ## Architecture Notes
//!
//! ### 1. Store behind a trait
//! The engine depends on [`OrderStore`](storage::OrderStore) only. The bundled
//! implementation is a Tokio actor that owns a `HashMap` and processes requests one at a
//! time, so conditional writes are atomic per key without locks.
//!
//! ### 2. No hidden globals
//! The store is created once by [`OrderSystem`](lifecycle::OrderSystem) and passed into the
//! engine. Tests build a fresh system, or a [`MockStore`](storage::mock::MockStore), each.
//!
//! ### 3. Typed validation at the boundary
//! Payloads are checked once on entry and failures come back as
//! [`OrderError::Validation`](engine::OrderError::Validation) naming the field, e.g.
//! `items[1].quantity`. Unknown status strings are rejected, never coerced.
//!
//! ### 4. Observability
//! `tracing` everywhere: one span per engine call, structured fields for ids and sizes.
//! See [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`model`] - `Order`, `OrderItem`, `OrderStatus`, and the `NewOrder` / `OrderFilter` DTOs.
//! - [`storage`] - the `OrderStore` trait, the store actor and its client, the mock.
//! - [`engine`] - `OrderEngine` and `OrderError`.
//! - [`lifecycle`] - `Config`, `setup_tracing`, `OrderSystem`.
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod engine;
pub mod lifecycle;
pub mod model;
pub mod storage;
