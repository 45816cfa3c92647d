//! System-level tests: wiring, the simulated arrival feed, and shutdown.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use pharmacy_orders::generator;
use pharmacy_orders::metrics::Dashboard;
use pharmacy_orders::model::OrderStatus;
use pharmacy_orders::notify::{ChannelNotifier, LogNotifier};
use pharmacy_orders::runtime::OrderSystem;

#[tokio::test]
async fn seeded_system_reports_a_consistent_dashboard() {
    let system = OrderSystem::start(Arc::new(LogNotifier));

    for draft in generator::seed_drafts(Utc::now()) {
        system.store.place(draft).await.unwrap();
    }
    system
        .store
        .update_status("OM1001", OrderStatus::Completed)
        .await
        .unwrap();

    let now = Utc::now();
    let orders = system.store.snapshot().await.unwrap();
    let board = Dashboard::compute(&orders, now);
    assert_eq!(board.total, 3);
    assert_eq!(board.counts.completed, 1);
    assert_eq!(board.counts.new, 2);
    assert_eq!(board.live, 2);
    // OM1001 was seeded 45 minutes ago and just completed
    assert_eq!(board.avg_preparation_minutes, 45);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn simulated_arrivals_grow_the_collection_and_notify() {
    let (notifier, mut notifications) = ChannelNotifier::channel(64);
    let mut system = OrderSystem::start(Arc::new(notifier));

    system.spawn_simulated_arrivals(Duration::from_millis(10));
    tokio::time::sleep(Duration::from_millis(120)).await;

    let orders = system.store.snapshot().await.unwrap();
    assert!(!orders.is_empty());
    assert!(orders.iter().all(|o| o.status() == OrderStatus::New));
    // ids are unique even though every order came from the same feed
    let mut ids: Vec<&str> = orders.iter().map(|o| o.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), orders.len());

    let note = notifications.recv().await.unwrap();
    assert_eq!(note.title, "New Order Received!");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn stopping_the_arrival_feed_leaves_the_store_usable() {
    let mut system = OrderSystem::start(Arc::new(LogNotifier));
    system.spawn_simulated_arrivals(Duration::from_millis(10));
    tokio::time::sleep(Duration::from_millis(50)).await;

    // shutdown aborts the feed first; nothing half-applied remains
    let orders = system.store.snapshot().await.unwrap();
    for order in &orders {
        assert!(!order.items().is_empty());
        let expected: f64 = order
            .items()
            .iter()
            .map(|i| f64::from(i.quantity) * i.price)
            .sum();
        assert_eq!(order.total(), expected);
    }

    system.shutdown().await.unwrap();
}
