//! Typed client for the order store actor.
//!
//! Clients are cheap to clone; every clone talks to the same actor and the
//! shared id sequence, so orders placed through any clone get unique,
//! monotonically increasing identifiers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use super::{StoreError, StoreRequest};
use crate::model::{Order, OrderDraft, OrderStatus};

#[derive(Clone)]
pub struct OrderStoreClient {
    sender: mpsc::Sender<StoreRequest>,
    next_seq: Arc<AtomicU64>,
}

impl OrderStoreClient {
    pub(crate) fn new(sender: mpsc::Sender<StoreRequest>, next_seq: Arc<AtomicU64>) -> Self {
        Self { sender, next_seq }
    }

    /// Next identifier in the `OM1001, OM1002, ...` sequence.
    fn next_order_id(&self) -> String {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        format!("OM{}", 1000 + seq)
    }

    async fn send<T>(
        &self,
        request: StoreRequest,
        response: oneshot::Receiver<Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Inserts a fully-formed order at the front of the display order.
    /// Fails with [`StoreError::DuplicateId`] if the id is already present.
    #[instrument(skip(self, order), fields(id = %order.id()))]
    pub async fn add(&self, order: Order) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.send(StoreRequest::Add { order, respond_to }, response)
            .await
    }

    /// Validates a draft, assigns the next id, and stores the order.
    /// Returns the stored order, id included.
    #[instrument(skip(self, draft), fields(customer = %draft.customer))]
    pub async fn place(&self, draft: OrderDraft) -> Result<Order, StoreError> {
        let order = Order::from_draft(self.next_order_id(), draft)?;
        self.add(order.clone()).await?;
        Ok(order)
    }

    /// Advances exactly the matching order along the status pipeline.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> Result<Order, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.send(
            StoreRequest::UpdateStatus {
                id: id.to_string(),
                status,
                respond_to,
            },
            response,
        )
        .await
    }

    /// Replaces the order's note. Blank input is swallowed here as a no-op,
    /// before it ever reaches the store.
    #[instrument(skip(self, note))]
    pub async fn set_note(&self, id: &str, note: &str) -> Result<(), StoreError> {
        if note.trim().is_empty() {
            debug!(%id, "blank note ignored");
            return Ok(());
        }
        let (respond_to, response) = oneshot::channel();
        self.send(
            StoreRequest::SetNote {
                id: id.to_string(),
                note: note.to_string(),
                respond_to,
            },
            response,
        )
        .await
    }

    /// Removes the order. Destructive; confirmation is the caller's job.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.send(
            StoreRequest::Delete {
                id: id.to_string(),
                respond_to,
            },
            response,
        )
        .await
    }

    /// Read-only clone of the collection in display order.
    pub async fn snapshot(&self) -> Result<Vec<Order>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.send(StoreRequest::Snapshot { respond_to }, response)
            .await
    }

    /// Filtered snapshot; see [`crate::query::search`] for match semantics.
    pub async fn search(&self, term: &str) -> Result<Vec<Order>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.send(
            StoreRequest::Search {
                term: term.to_string(),
                respond_to,
            },
            response,
        )
        .await
    }
}
