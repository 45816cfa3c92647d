//! System wiring and lifecycle.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::generator;
use crate::notify::Notify;
use crate::store::{OrderStoreActor, OrderStoreClient, StoreError};

/// Owns the running store actor and any periodic simulation tasks.
///
/// Dropping the last client closes the actor's channel and ends its loop;
/// [`shutdown`](Self::shutdown) does that in the right order and waits.
pub struct OrderSystem {
    /// Client for the order store; clone freely.
    pub store: OrderStoreClient,
    actor_handle: JoinHandle<()>,
    sim_handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Spawns the store actor with the given notification sink.
    pub fn start(notifier: Arc<dyn Notify>) -> Self {
        let (actor, store) = OrderStoreActor::new(32, notifier);
        let actor_handle = tokio::spawn(actor.run());
        Self {
            store,
            actor_handle,
            sim_handles: Vec::new(),
        }
    }

    /// Starts a periodic task that places one generated order per tick.
    ///
    /// The task only ever calls `place`; stopping it mid-flight cannot leave
    /// a partially applied mutation behind, because each placement is a
    /// single serialized request to the actor.
    pub fn spawn_simulated_arrivals(&mut self, period: Duration) {
        let store = self.store.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // the first tick of a tokio interval fires immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                let draft = {
                    let mut rng = rand::thread_rng();
                    generator::random_draft(&mut rng, Utc::now())
                };
                match store.place(draft).await {
                    Ok(order) => debug!(id = %order.id(), "simulated order placed"),
                    Err(StoreError::ActorClosed) | Err(StoreError::ActorDropped) => break,
                    Err(e) => warn!(error = %e, "simulated order rejected"),
                }
            }
        });
        self.sim_handles.push(handle);
    }

    /// Stops the simulation tasks, closes the store channel, and waits for
    /// the actor to drain and exit.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("shutting down order system");

        for handle in self.sim_handles {
            handle.abort();
            // cancellation surfaces as a JoinError, which is expected here
            let _ = handle.await;
        }

        drop(self.store);

        if let Err(e) = self.actor_handle.await {
            error!(error = ?e, "store actor task failed");
            return Err(format!("store actor task failed: {e:?}"));
        }

        info!("order system shutdown complete");
        Ok(())
    }
}
