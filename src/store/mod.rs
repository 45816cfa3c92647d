//! The order store actor.
//!
//! The store is the sole owner of the mutable order collection. It runs as a
//! single task that processes requests sequentially off an mpsc channel, so
//! every mutation is a serialized critical section with no locks: once a
//! reply arrives, every later read observes the change.
//!
//! The collection is kept in display order, most recent first. Readers only
//! ever receive cloned snapshots, never a reference into the live vector.

pub mod client;

pub use client::OrderStoreClient;

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::model::{Order, OrderStatus, ValidationError};
use crate::notify::{Notification, Notify};
use crate::query;

/// Errors surfaced by store operations. All are local and recoverable; the
/// caller decides whether to retry with corrected input.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("duplicate order id: {0}")]
    DuplicateId(String),
    #[error("order not found: {0}")]
    NotFound(String),
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("store actor closed")]
    ActorClosed,
    #[error("store actor dropped response channel")]
    ActorDropped,
}

/// One-shot reply channel for a store request.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Requests handled by the store actor.
#[derive(Debug)]
pub enum StoreRequest {
    Add {
        order: Order,
        respond_to: Response<()>,
    },
    UpdateStatus {
        id: String,
        status: OrderStatus,
        respond_to: Response<Order>,
    },
    SetNote {
        id: String,
        note: String,
        respond_to: Response<()>,
    },
    Delete {
        id: String,
        respond_to: Response<()>,
    },
    Snapshot {
        respond_to: Response<Vec<Order>>,
    },
    Search {
        term: String,
        respond_to: Response<Vec<Order>>,
    },
}

/// The actor owning the order collection.
pub struct OrderStoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    orders: Vec<Order>,
    notifier: Arc<dyn Notify>,
}

impl OrderStoreActor {
    /// Creates the actor and its client. The actor does nothing until
    /// [`run`](Self::run) is spawned.
    pub fn new(buffer_size: usize, notifier: Arc<dyn Notify>) -> (Self, OrderStoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            orders: Vec::new(),
            notifier,
        };
        let client = OrderStoreClient::new(sender, Arc::new(AtomicU64::new(1)));
        (actor, client)
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self) {
        info!("order store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Add { order, respond_to } => {
                    let result = self.add(order).await;
                    let _ = respond_to.send(result);
                }
                StoreRequest::UpdateStatus {
                    id,
                    status,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.update_status(&id, status));
                }
                StoreRequest::SetNote {
                    id,
                    note,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.set_note(&id, note));
                }
                StoreRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.delete(&id));
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!(size = self.orders.len(), "snapshot");
                    let _ = respond_to.send(Ok(self.orders.clone()));
                }
                StoreRequest::Search { term, respond_to } => {
                    let hits: Vec<Order> = query::search(&self.orders, &term)
                        .into_iter()
                        .cloned()
                        .collect();
                    debug!(%term, matches = hits.len(), "search");
                    let _ = respond_to.send(Ok(hits));
                }
            }
        }

        info!(size = self.orders.len(), "order store shutdown");
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.orders.iter().position(|o| o.id() == id)
    }

    async fn add(&mut self, order: Order) -> Result<(), StoreError> {
        if self.position(order.id()).is_some() {
            warn!(id = %order.id(), "duplicate order id");
            return Err(StoreError::DuplicateId(order.id().to_string()));
        }
        let note = Notification::new_order(&order);
        // newest first
        self.orders.insert(0, order);
        info!(id = %note.order_id, size = self.orders.len(), "order added");
        // fire-and-forget; a missing delivery channel never fails the add
        self.notifier.notify(note).await;
        Ok(())
    }

    fn update_status(&mut self, id: &str, status: OrderStatus) -> Result<Order, StoreError> {
        let Some(pos) = self.position(id) else {
            warn!(%id, "order not found");
            return Err(StoreError::NotFound(id.to_string()));
        };
        let order = &mut self.orders[pos];
        let from = order.status();
        if !from.can_advance_to(status) {
            warn!(%id, %from, to = %status, "invalid status transition");
            return Err(StoreError::InvalidTransition { from, to: status });
        }
        order.set_status(status);
        info!(%id, %from, to = %status, "status updated");
        Ok(order.clone())
    }

    fn set_note(&mut self, id: &str, note: String) -> Result<(), StoreError> {
        let Some(pos) = self.position(id) else {
            warn!(%id, "order not found");
            return Err(StoreError::NotFound(id.to_string()));
        };
        self.orders[pos].set_notes(note);
        info!(%id, "note updated");
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let Some(pos) = self.position(id) else {
            warn!(%id, "order not found");
            return Err(StoreError::NotFound(id.to_string()));
        };
        self.orders.remove(pos);
        info!(%id, size = self.orders.len(), "order deleted");
        Ok(())
    }
}
