//! Time-derived order metrics.
//!
//! Every function here is a pure function of `(order(s), now)`. The current
//! time is always injected by the caller, never read from a global clock, so
//! the whole module is testable with a fixed `now`.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::model::{Order, OrderStatus};

/// Estimated time until an order reaches its next milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eta {
    /// Terminal sentinel for completed orders.
    Completed,
    /// The anchored estimate is already in the past.
    AnyMoment,
    /// Ceiling of the remaining minutes.
    Minutes(i64),
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eta::Completed => f.write_str("Completed"),
            Eta::AnyMoment => f.write_str("Any moment"),
            Eta::Minutes(m) => write!(f, "~{m}m"),
        }
    }
}

/// How long ago the order was placed, in the largest applicable unit.
pub fn age_of(order: &Order, now: DateTime<Utc>) -> String {
    let elapsed = now - order.order_time();
    let days = elapsed.num_days();
    let hours = elapsed.num_hours();
    let minutes = elapsed.num_minutes();

    if days > 0 {
        format!("{} day{} ago", days, if days > 1 { "s" } else { "" })
    } else if hours > 0 {
        format!("{} hour{} ago", hours, if hours > 1 { "s" } else { "" })
    } else if minutes > 0 {
        format!("{} minute{} ago", minutes, if minutes > 1 { "s" } else { "" })
    } else {
        "Just now".to_string()
    }
}

/// Estimated completion, anchored at `order_time` plus the status offset.
pub fn estimated_completion(order: &Order, now: DateTime<Utc>) -> Eta {
    let Some(offset) = order.status().eta_offset() else {
        return Eta::Completed;
    };
    let due = order.order_time() + offset;
    if due < now {
        return Eta::AnyMoment;
    }
    let remaining_ms = (due - now).num_milliseconds();
    Eta::Minutes((remaining_ms + 59_999) / 60_000)
}

/// Mean elapsed minutes of completed orders, rounded to the nearest integer.
/// Zero when nothing has completed yet.
pub fn average_preparation_minutes(orders: &[Order], now: DateTime<Utc>) -> i64 {
    let completed: Vec<&Order> = orders
        .iter()
        .filter(|o| o.status() == OrderStatus::Completed)
        .collect();
    if completed.is_empty() {
        return 0;
    }
    let total_minutes: f64 = completed
        .iter()
        .map(|o| (now - o.order_time()).num_milliseconds() as f64 / 60_000.0)
        .sum();
    (total_minutes / completed.len() as f64).round() as i64
}

/// Per-status order counts for the summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub new: usize,
    pub preparing: usize,
    pub ready: usize,
    pub completed: usize,
}

/// The aggregate view rendered above the order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dashboard {
    pub counts: StatusCounts,
    /// Orders still in flight (everything not completed).
    pub live: usize,
    pub total: usize,
    pub avg_preparation_minutes: i64,
}

impl Dashboard {
    pub fn compute(orders: &[Order], now: DateTime<Utc>) -> Self {
        let mut counts = StatusCounts::default();
        for order in orders {
            match order.status() {
                OrderStatus::New => counts.new += 1,
                OrderStatus::Preparing => counts.preparing += 1,
                OrderStatus::Ready => counts.ready += 1,
                OrderStatus::Completed => counts.completed += 1,
            }
        }
        Dashboard {
            counts,
            live: orders.len() - counts.completed,
            total: orders.len(),
            avg_preparation_minutes: average_preparation_minutes(orders, now),
        }
    }
}
