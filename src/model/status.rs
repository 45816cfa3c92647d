//! The order status state machine.
//!
//! An order moves forward through `NEW → PREPARING → READY → COMPLETED`.
//! Orders are always created as [`OrderStatus::New`]; `COMPLETED` is
//! terminal. Transitions are valid only in the forward direction along that
//! order (skipping a stage is allowed, going back or standing still is not).

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    Preparing,
    Ready,
    Completed,
}

impl OrderStatus {
    /// Position along the fulfillment pipeline, used for transition checks.
    fn rank(self) -> u8 {
        match self {
            OrderStatus::New => 0,
            OrderStatus::Preparing => 1,
            OrderStatus::Ready => 2,
            OrderStatus::Completed => 3,
        }
    }

    /// Whether a transition from `self` to `next` is permitted.
    ///
    /// Forward moves only. `Completed` has the highest rank, so nothing can
    /// move out of it.
    pub fn can_advance_to(self, next: OrderStatus) -> bool {
        next.rank() > self.rank()
    }

    pub fn is_terminal(self) -> bool {
        self == OrderStatus::Completed
    }

    /// Expected time from order placement until the next milestone, or
    /// `None` for completed orders.
    ///
    /// Anchored at `order_time` rather than at the moment the order entered
    /// its current status; stakeholders confirmed the live dashboard has
    /// always shown ETAs this way.
    pub fn eta_offset(self) -> Option<Duration> {
        match self {
            OrderStatus::New => Some(Duration::minutes(30)),
            OrderStatus::Preparing => Some(Duration::minutes(15)),
            OrderStatus::Ready => Some(Duration::minutes(5)),
            OrderStatus::Completed => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::New => "NEW",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Ready => "READY",
            OrderStatus::Completed => "COMPLETED",
        };
        f.write_str(label)
    }
}
