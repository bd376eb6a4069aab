//! Behavior tests for the in-memory store client.

use assert_matches::assert_matches;
use duet_store::{
    connectivity_probe, probe, Snapshot, StoreClient, StoreError, StorePath, ValueListener,
};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::sync::oneshot;

struct TestListener(oneshot::Sender<Result<Snapshot, StoreError>>);

impl ValueListener for TestListener {
    fn on_snapshot(self: Box<Self>, snapshot: Snapshot) {
        let _ = self.0.send(Ok(snapshot));
    }

    fn on_cancelled(self: Box<Self>, error: StoreError) {
        let _ = self.0.send(Err(error));
    }
}

async fn read(client: &dyn StoreClient, path: &StorePath) -> Result<Snapshot, StoreError> {
    let (tx, rx) = oneshot::channel();
    client.read_once(path, Box::new(TestListener(tx)));
    rx.await.expect("listener dropped without firing")
}

fn store() -> duet_store::MemoryStore {
    duet_store::MemoryStore::new()
}

#[tokio::test]
async fn put_then_read_round_trips() {
    let store = store();
    let path = StorePath::new("thoughts").unwrap();
    let child = path.child("2024-01-05 10-30-00").unwrap();

    store.put(&child, json!({"thought": "hi"})).await.unwrap();

    let snapshot = read(&store, &path).await.unwrap();
    assert!(snapshot.exists());
    assert_eq!(snapshot.child_count(), 1);
    let (key, value) = snapshot.children().next().unwrap();
    assert_eq!(key, "2024-01-05 10-30-00");
    assert_eq!(value, &json!({"thought": "hi"}));
}

#[tokio::test]
async fn reading_an_absent_node_is_a_successful_empty_snapshot() {
    let store = store();
    let path = StorePath::new("thoughts").unwrap();

    let snapshot = read(&store, &path).await.unwrap();
    assert!(!snapshot.exists());
    assert_eq!(snapshot.children().count(), 0);
}

#[tokio::test]
async fn remove_deletes_and_tolerates_absence() {
    let store = store();
    let path = StorePath::new("thoughts").unwrap();
    let child = path.child("k1").unwrap();

    store.put(&child, json!(1)).await.unwrap();
    store.remove(&child).await.unwrap();
    store.remove(&child).await.unwrap();

    let snapshot = read(&store, &path).await.unwrap();
    assert_eq!(snapshot.child_count(), 0);
}

#[tokio::test]
async fn overwrite_replaces_the_whole_record() {
    let store = store();
    let child = StorePath::new("thoughts").unwrap().child("k1").unwrap();

    store
        .put(&child, json!({"author": "partyA", "thought": "old"}))
        .await
        .unwrap();
    store.put(&child, json!({"thought": "new"})).await.unwrap();

    let snapshot = read(&store, &child).await.unwrap();
    assert_eq!(snapshot.value(), Some(&json!({"thought": "new"})));
}

#[tokio::test]
async fn forced_read_fault_cancels_reads_until_cleared() {
    let store = store();
    let path = StorePath::new("thoughts").unwrap();

    store.fail_reads("permission denied");
    let err = read(&store, &path).await.unwrap_err();
    assert_matches!(err, StoreError::Cancelled { reason } if reason.contains("permission denied"));

    store.clear_read_fault();
    assert!(read(&store, &path).await.is_ok());
}

#[tokio::test]
async fn stalled_reads_never_fire_until_shutdown_cancels_them() {
    let store = store();
    let path = StorePath::new("thoughts").unwrap();
    store.stall_reads(true);

    let (tx, rx) = oneshot::channel();
    store.read_once(&path, Box::new(TestListener(tx)));

    let waited = tokio::time::timeout(Duration::from_millis(50), rx).await;
    assert!(waited.is_err(), "stalled listener must not fire");

    // The receiver was consumed by the timeout; register a fresh one and let
    // shutdown cancel it.
    let (tx, rx) = oneshot::channel();
    store.read_once(&path, Box::new(TestListener(tx)));
    tokio::task::yield_now().await;
    store.shutdown().await.unwrap();
    let outcome = rx.await.expect("shutdown must fire stalled listeners");
    assert_matches!(outcome, Err(StoreError::ConnectionClosed));
}

#[tokio::test]
async fn shutdown_rejects_mutations_and_cancels_new_reads() {
    let store = store();
    let path = StorePath::new("thoughts").unwrap();
    let child = path.child("k1").unwrap();
    store.shutdown().await.unwrap();

    assert_matches!(
        store.put(&child, json!(1)).await,
        Err(StoreError::ConnectionClosed)
    );
    assert_matches!(store.remove(&child).await, Err(StoreError::ConnectionClosed));
    assert_matches!(read(&store, &path).await, Err(StoreError::ConnectionClosed));
}

#[tokio::test]
async fn connectivity_probe_round_trips_the_marker() {
    let store = store();
    connectivity_probe(&store).await.unwrap();

    let path = StorePath::new(probe::PROBE_NODE).unwrap();
    let snapshot = read(&store, &path).await.unwrap();
    assert_eq!(
        snapshot.value(),
        Some(&Value::String(probe::PROBE_MESSAGE.to_owned()))
    );
}
