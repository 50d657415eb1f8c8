//! # System Lifecycle
//!
//! Starting, wiring and stopping the order tracker.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - [`Config::from_env`] reads the tunables
//! 2. **Observability Setup** - [`setup_tracing`] installs the subscriber
//! 3. **Store Creation** - [`OrderSystem::new`] spawns the one store actor for the process
//! 4. **Dependency Injection** - the store client is passed into the engine explicitly;
//!    there is no global store, so every test can build its own system
//! 5. **Graceful Shutdown** - [`OrderSystem::shutdown`] closes the channel and awaits the actor
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the engine** - drops its store client, the last sender if no clones remain
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor logs final state** - `Store shutdown` with the number of orders held
//! 4. **Await completion** - the actor task is joined
//!
//! Clones of the engine handed to other tasks keep the store alive; drop them before
//! calling `shutdown`, or it waits for them.

pub mod config;
pub mod order_system;
pub mod tracing;

pub use self::config::*;
pub use self::order_system::*;
pub use self::tracing::*;
