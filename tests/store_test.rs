//! Store actor behavior, driven end to end through the client.

use std::sync::Arc;

use chrono::{Duration, Utc};

use pharmacy_orders::model::{LineItem, Order, OrderDraft, OrderStatus, ValidationError};
use pharmacy_orders::notify::{ChannelNotifier, LogNotifier, Notification};
use pharmacy_orders::store::{OrderStoreActor, OrderStoreClient, StoreError};

fn draft(customer: &str, phone: &str) -> OrderDraft {
    OrderDraft {
        customer: customer.into(),
        phone: phone.into(),
        address: "123 Main St, Mumbai".into(),
        items: vec![LineItem::new("Paracetamol 500mg", 10, 25.0)],
        notes: String::new(),
        placed_at: Utc::now(),
    }
}

fn spawn_store() -> (OrderStoreClient, tokio::task::JoinHandle<()>) {
    let (actor, client) = OrderStoreActor::new(32, Arc::new(LogNotifier));
    let handle = tokio::spawn(actor.run());
    (client, handle)
}

#[tokio::test]
async fn place_assigns_sequential_ids_and_inserts_at_the_front() {
    let (client, handle) = spawn_store();

    let first = client.place(draft("Raj Sharma", "+91 98765 43210")).await.unwrap();
    let second = client.place(draft("Priya Patel", "+91 87654 32109")).await.unwrap();
    assert_eq!(first.id(), "OM1001");
    assert_eq!(second.id(), "OM1002");

    let orders = client.snapshot().await.unwrap();
    let ids: Vec<&str> = orders.iter().map(|o| o.id()).collect();
    assert_eq!(ids, ["OM1002", "OM1001"]);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn adding_a_duplicate_id_fails_and_changes_nothing() {
    let (client, handle) = spawn_store();

    let order = Order::from_draft("OM9000", draft("Raj Sharma", "+91 98765 43210")).unwrap();
    client.add(order.clone()).await.unwrap();

    let err = client.add(order).await.unwrap_err();
    assert_eq!(err, StoreError::DuplicateId("OM9000".into()));
    assert_eq!(client.snapshot().await.unwrap().len(), 1);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn placing_a_malformed_draft_is_rejected_before_insertion() {
    let (client, handle) = spawn_store();

    let mut bad = draft("Raj Sharma", "+91 98765 43210");
    bad.items.clear();
    let err = client.place(bad).await.unwrap_err();
    assert_eq!(err, StoreError::Validation(ValidationError::NoItems));
    assert!(client.snapshot().await.unwrap().is_empty());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn update_status_touches_only_the_targeted_order() {
    let (client, handle) = spawn_store();

    client.place(draft("Raj Sharma", "+91 98765 43210")).await.unwrap();
    client.place(draft("Priya Patel", "+91 87654 32109")).await.unwrap();
    let before = client.snapshot().await.unwrap();

    let updated = client
        .update_status("OM1001", OrderStatus::Preparing)
        .await
        .unwrap();
    assert_eq!(updated.status(), OrderStatus::Preparing);

    let after = client.snapshot().await.unwrap();
    assert_eq!(after.len(), before.len());
    // sibling order is value-identical, and nothing was reordered
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1].id(), "OM1001");
    assert_eq!(after[1].status(), OrderStatus::Preparing);
    assert_eq!(after[1].total(), before[1].total());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn backward_and_terminal_transitions_fail() {
    let (client, handle) = spawn_store();

    client.place(draft("Raj Sharma", "+91 98765 43210")).await.unwrap();
    client.update_status("OM1001", OrderStatus::Ready).await.unwrap();

    let err = client
        .update_status("OM1001", OrderStatus::New)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::InvalidTransition {
            from: OrderStatus::Ready,
            to: OrderStatus::New,
        }
    );

    client.update_status("OM1001", OrderStatus::Completed).await.unwrap();
    for next in [
        OrderStatus::New,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
    ] {
        let err = client.update_status("OM1001", next).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidTransition { .. }));
    }
    // the failed attempts left the status alone
    let orders = client.snapshot().await.unwrap();
    assert_eq!(orders[0].status(), OrderStatus::Completed);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn updating_a_missing_order_reports_not_found() {
    let (client, handle) = spawn_store();

    let err = client
        .update_status("OM4040", OrderStatus::Preparing)
        .await
        .unwrap_err();
    assert_eq!(err, StoreError::NotFound("OM4040".into()));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn set_note_replaces_and_blank_input_is_a_no_op() {
    let (client, handle) = spawn_store();

    client.place(draft("Priya Patel", "+91 87654 32109")).await.unwrap();
    client.set_note("OM1001", "Deliver before 6pm").await.unwrap();
    let orders = client.snapshot().await.unwrap();
    assert_eq!(orders[0].notes(), "Deliver before 6pm");

    // blank input never reaches the store
    client.set_note("OM1001", "   ").await.unwrap();
    let orders = client.snapshot().await.unwrap();
    assert_eq!(orders[0].notes(), "Deliver before 6pm");

    let err = client.set_note("OM4040", "hello").await.unwrap_err();
    assert_eq!(err, StoreError::NotFound("OM4040".into()));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn deleting_a_missing_id_leaves_the_collection_unchanged() {
    let (client, handle) = spawn_store();

    client.place(draft("Raj Sharma", "+91 98765 43210")).await.unwrap();
    let before = client.snapshot().await.unwrap();

    let err = client.delete("OM4040").await.unwrap_err();
    assert_eq!(err, StoreError::NotFound("OM4040".into()));
    assert_eq!(client.snapshot().await.unwrap(), before);

    client.delete("OM1001").await.unwrap();
    assert!(client.snapshot().await.unwrap().is_empty());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn search_through_the_client_matches_case_insensitively() {
    let (client, handle) = spawn_store();

    client.place(draft("Raj Sharma", "+91 98765 43210")).await.unwrap();
    client.place(draft("Priya Patel", "+91 87654 32109")).await.unwrap();

    let hits = client.search("raj").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].customer(), "Raj Sharma");

    let all = client.search("").await.unwrap();
    assert_eq!(all.len(), 2);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn concurrent_updates_to_different_orders_both_land() {
    let (client, handle) = spawn_store();

    client.place(draft("Raj Sharma", "+91 98765 43210")).await.unwrap();
    client.place(draft("Priya Patel", "+91 87654 32109")).await.unwrap();

    let a = client.clone();
    let b = client.clone();
    let (ra, rb) = tokio::join!(
        tokio::spawn(async move { a.update_status("OM1001", OrderStatus::Preparing).await }),
        tokio::spawn(async move { b.update_status("OM1002", OrderStatus::Preparing).await }),
    );
    ra.unwrap().unwrap();
    rb.unwrap().unwrap();

    let orders = client.snapshot().await.unwrap();
    assert!(orders.iter().all(|o| o.status() == OrderStatus::Preparing));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn every_creation_emits_one_notification() {
    let (notifier, mut notifications) = ChannelNotifier::channel(16);
    let (actor, client) = OrderStoreActor::new(32, Arc::new(notifier));
    let handle = tokio::spawn(actor.run());

    let order = client.place(draft("Raj Sharma", "+91 98765 43210")).await.unwrap();

    let note = notifications.recv().await.unwrap();
    assert_eq!(note, Notification::new_order(&order));
    assert_eq!(note.order_id, "OM1001");
    assert!(note.body.contains("Raj Sharma"));
    assert!(note.body.contains("250"));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn a_dead_notification_channel_never_fails_creation() {
    let (notifier, receiver) = ChannelNotifier::channel(1);
    drop(receiver);
    let (actor, client) = OrderStoreActor::new(32, Arc::new(notifier));
    let handle = tokio::spawn(actor.run());

    for _ in 0..3 {
        client.place(draft("Raj Sharma", "+91 98765 43210")).await.unwrap();
    }
    assert_eq!(client.snapshot().await.unwrap().len(), 3);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn snapshots_are_detached_from_the_live_collection() {
    let (client, handle) = spawn_store();

    client.place(draft("Raj Sharma", "+91 98765 43210")).await.unwrap();
    let stale = client.snapshot().await.unwrap();

    client.place(draft("Priya Patel", "+91 87654 32109")).await.unwrap();
    assert_eq!(stale.len(), 1);
    assert_eq!(client.snapshot().await.unwrap().len(), 2);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn old_drafts_keep_their_placement_time() {
    let (client, handle) = spawn_store();

    let mut d = draft("Amit Kumar", "+91 76543 21098");
    d.placed_at = Utc::now() - Duration::minutes(45);
    let order = client.place(d.clone()).await.unwrap();
    assert_eq!(order.order_time(), d.placed_at);

    drop(client);
    handle.await.unwrap();
}
