//! Outbound notification boundary.
//!
//! The store emits one [`Notification`] per successful order creation and
//! moves on: delivery happens elsewhere, and an unavailable delivery channel
//! must never fail or stall the creation itself.

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::model::Order;

/// The payload handed to the external delivery mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub order_id: String,
}

impl Notification {
    /// The new-order announcement shown to staff.
    pub fn new_order(order: &Order) -> Self {
        Self {
            title: "New Order Received!".to_string(),
            body: format!(
                "Order #{} from {} - ₹{}",
                order.id(),
                order.customer(),
                order.total()
            ),
            order_id: order.id().to_string(),
        }
    }
}

/// A delivery request sink. Implementations must not block the caller.
#[async_trait]
pub trait Notify: Send + Sync {
    async fn notify(&self, note: Notification);
}

/// Forwards notifications over a bounded channel without ever waiting:
/// a full or closed channel drops the notification with a warning.
#[derive(Clone)]
pub struct ChannelNotifier {
    sender: mpsc::Sender<Notification>,
}

impl ChannelNotifier {
    pub fn channel(buffer: usize) -> (Self, mpsc::Receiver<Notification>) {
        let (sender, receiver) = mpsc::channel(buffer);
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl Notify for ChannelNotifier {
    async fn notify(&self, note: Notification) {
        if let Err(e) = self.sender.try_send(note) {
            warn!(error = %e, "notification dropped");
        }
    }
}

/// Traces notifications instead of delivering them. Useful as a default
/// when no real delivery mechanism is wired up.
pub struct LogNotifier;

#[async_trait]
impl Notify for LogNotifier {
    async fn notify(&self, note: Notification) {
        info!(order_id = %note.order_id, title = %note.title, body = %note.body, "notification requested");
    }
}
