//! # Pharmacy Orders
//!
//! A live order lifecycle engine for a pharmacy counter: orders arrive,
//! move forward through `NEW → PREPARING → READY → COMPLETED`, and are
//! tracked with time-derived metrics until staff complete or delete them.
//!
//! ## Architecture
//!
//! The mutable order collection has exactly one owner: the store actor in
//! [`store`]. It processes requests sequentially off a channel, so mutations
//! are serialized without locks and every read after a successful call sees
//! the change. Everything else is pure:
//!
//! - [`model`] — `Order`, `LineItem`, the intake `OrderDraft`, and the
//!   status state machine.
//! - [`metrics`] — age, estimated completion, and dashboard aggregates as
//!   functions of `(orders, now)` with an injected clock.
//! - [`query`] — substring search preserving display order.
//! - [`generator`] — synthetic drafts for the simulated arrival feed.
//! - [`notify`] — the fire-and-forget new-order notification boundary.
//! - [`runtime`] — [`OrderSystem`](runtime::OrderSystem) wiring, the
//!   simulated-arrival task, and tracing setup.
//!
//! ## Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use pharmacy_orders::notify::LogNotifier;
//! use pharmacy_orders::runtime::OrderSystem;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = OrderSystem::start(Arc::new(LogNotifier));
//! let orders = system.store.snapshot().await?;
//! println!("{} orders on the board", orders.len());
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```
//!
//! Run the demo binary with `RUST_LOG=info cargo run`.

pub mod generator;
pub mod metrics;
pub mod model;
pub mod notify;
pub mod query;
pub mod runtime;
pub mod store;
