//! Demo session: seed the dashboard's sample orders, walk one through the
//! lifecycle, let the simulated arrival feed run briefly, then print the
//! board.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::info;

use pharmacy_orders::generator;
use pharmacy_orders::metrics::{self, Dashboard};
use pharmacy_orders::model::OrderStatus;
use pharmacy_orders::notify::ChannelNotifier;
use pharmacy_orders::runtime::{setup_tracing, OrderSystem};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    info!("starting pharmacy order desk");

    let (notifier, mut notifications) = ChannelNotifier::channel(16);
    let mut system = OrderSystem::start(Arc::new(notifier));

    // stand-in for the external delivery mechanism
    tokio::spawn(async move {
        while let Some(note) = notifications.recv().await {
            info!(order_id = %note.order_id, "{}: {}", note.title, note.body);
        }
    });

    // seed the three sample orders; oldest first puts the freshest on top
    for draft in generator::seed_drafts(Utc::now()) {
        system.store.place(draft).await?;
    }

    // walk the oldest order (OM1001) through to completion
    system.store.update_status("OM1001", OrderStatus::Preparing).await?;
    system.store.update_status("OM1001", OrderStatus::Ready).await?;
    system.store.update_status("OM1001", OrderStatus::Completed).await?;
    system.store.set_note("OM1002", "Deliver before 6pm").await?;

    // a short burst of simulated arrivals (the live feed runs every 45s)
    system.spawn_simulated_arrivals(Duration::from_secs(2));
    tokio::time::sleep(Duration::from_secs(5)).await;

    let now = Utc::now();
    let orders = system.store.snapshot().await?;
    let board = Dashboard::compute(&orders, now);
    info!(
        total = board.total,
        live = board.live,
        new = board.counts.new,
        preparing = board.counts.preparing,
        ready = board.counts.ready,
        completed = board.counts.completed,
        avg_minutes = board.avg_preparation_minutes,
        "dashboard"
    );

    for order in &orders {
        info!(
            id = %order.id(),
            customer = %order.customer(),
            status = %order.status(),
            total = order.total(),
            age = %metrics::age_of(order, now),
            eta = %metrics::estimated_completion(order, now),
            "order"
        );
    }

    let hits = system.store.search("raj").await?;
    info!(matches = hits.len(), "search for 'raj'");

    system.shutdown().await?;
    Ok(())
}
