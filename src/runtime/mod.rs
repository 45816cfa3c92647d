//! Runtime orchestration: spawning the store actor, driving simulated order
//! arrivals, and wiring up observability.
//!
//! The core itself is synchronous and deterministic; everything periodic
//! (simulated arrivals, clock ticks for the display) lives out here as
//! scheduled tasks that call into it.

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use tracing::*;
