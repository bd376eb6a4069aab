//! In-memory store client for tests and local runs.

use crate::{
    client::{StoreClient, ValueListener},
    config::StoreConfig,
    error::StoreError,
    path::StorePath,
    snapshot::Snapshot,
};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::sync::Arc;

/// In-memory implementation of [`StoreClient`].
///
/// Holds the node tree behind a mutex (critical sections never await) and
/// delivers read listeners on a spawned task, preserving the remote store's
/// push semantics. Fault hooks force the two read failure modes a live store
/// can exhibit: a reported cancellation and a listener that never fires.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Default)]
struct MemoryState {
    root: Map<String, Value>,
    closed: bool,
    read_fault: Option<String>,
    stall_reads: bool,
    stalled: Vec<Box<dyn ValueListener>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// "Connect" to the configured endpoint.
    ///
    /// The endpoint is only logged; state lives in memory. Exists so local
    /// wiring matches the lifecycle of a real connection.
    pub fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        tracing::info!(url = %config.database_url, "connected in-memory store");
        Ok(Self::new())
    }

    /// Make every subsequent read cancel with `reason` until cleared.
    pub fn fail_reads(&self, reason: impl Into<String>) {
        self.state.lock().read_fault = Some(reason.into());
    }

    /// Clear a forced read fault.
    pub fn clear_read_fault(&self) {
        self.state.lock().read_fault = None;
    }

    /// When `stall` is set, read listeners are held and never fired.
    pub fn stall_reads(&self, stall: bool) {
        self.state.lock().stall_reads = stall;
    }

    /// Number of direct children under `path`, for test assertions.
    pub fn child_count(&self, path: &StorePath) -> usize {
        let state = self.state.lock();
        let segments: Vec<&str> = path.segments().collect();
        subtree(&state.root, &segments)
            .and_then(Value::as_object)
            .map_or(0, Map::len)
    }
}

#[async_trait]
impl StoreClient for MemoryStore {
    async fn put(&self, path: &StorePath, value: Value) -> Result<(), StoreError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(StoreError::ConnectionClosed);
        }
        let segments: Vec<&str> = path.segments().collect();
        insert_at(&mut state.root, &segments, value);
        Ok(())
    }

    async fn remove(&self, path: &StorePath) -> Result<(), StoreError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(StoreError::ConnectionClosed);
        }
        let segments: Vec<&str> = path.segments().collect();
        remove_at(&mut state.root, &segments);
        Ok(())
    }

    fn read_once(&self, path: &StorePath, listener: Box<dyn ValueListener>) {
        let state = Arc::clone(&self.state);
        let path = path.clone();
        tokio::spawn(async move {
            let outcome = {
                let mut guard = state.lock();
                if guard.closed {
                    Err(StoreError::ConnectionClosed)
                } else if guard.stall_reads {
                    guard.stalled.push(listener);
                    return;
                } else if let Some(reason) = guard.read_fault.clone() {
                    Err(StoreError::cancelled(reason))
                } else {
                    let segments: Vec<&str> = path.segments().collect();
                    Ok(subtree(&guard.root, &segments).cloned())
                }
            };
            match outcome {
                Ok(value) => listener.on_snapshot(Snapshot::new(path, value)),
                Err(error) => listener.on_cancelled(error),
            }
        });
    }

    async fn shutdown(&self) -> Result<(), StoreError> {
        let stalled = {
            let mut state = self.state.lock();
            state.closed = true;
            std::mem::take(&mut state.stalled)
        };
        for listener in stalled {
            listener.on_cancelled(StoreError::ConnectionClosed);
        }
        tracing::info!("in-memory store shut down");
        Ok(())
    }
}

fn subtree<'a>(map: &'a Map<String, Value>, segments: &[&str]) -> Option<&'a Value> {
    match segments {
        [] => None,
        [last] => map.get(*last),
        [head, rest @ ..] => subtree(map.get(*head)?.as_object()?, rest),
    }
}

fn insert_at(map: &mut Map<String, Value>, segments: &[&str], value: Value) {
    match segments {
        [] => {}
        [last] => {
            map.insert((*last).to_owned(), value);
        }
        [head, rest @ ..] => {
            let entry = map
                .entry((*head).to_owned())
                .or_insert_with(|| Value::Object(Map::new()));
            // An upsert at a deeper path replaces a leaf sitting above it.
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(child) = entry {
                insert_at(child, rest, value);
            }
        }
    }
}

fn remove_at(map: &mut Map<String, Value>, segments: &[&str]) {
    match segments {
        [] => {}
        [last] => {
            map.remove(*last);
        }
        [head, rest @ ..] => {
            if let Some(Value::Object(child)) = map.get_mut(*head) {
                remove_at(child, rest);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tree_insert_and_lookup() {
        let mut root = Map::new();
        insert_at(&mut root, &["thoughts", "k1"], json!({"thought": "hi"}));
        insert_at(&mut root, &["thoughts", "k2"], json!({"thought": "yo"}));

        let collection = subtree(&root, &["thoughts"]).and_then(Value::as_object);
        assert_eq!(collection.map(Map::len), Some(2));
        assert_eq!(
            subtree(&root, &["thoughts", "k1"]),
            Some(&json!({"thought": "hi"}))
        );
    }

    #[test]
    fn tree_remove_is_tolerant() {
        let mut root = Map::new();
        insert_at(&mut root, &["thoughts", "k1"], json!(1));

        remove_at(&mut root, &["thoughts", "missing"]);
        remove_at(&mut root, &["absent", "k"]);
        remove_at(&mut root, &["thoughts", "k1"]);
        assert_eq!(subtree(&root, &["thoughts", "k1"]), None);
    }

    #[test]
    fn deep_insert_replaces_leaf_parent() {
        let mut root = Map::new();
        insert_at(&mut root, &["a"], json!("leaf"));
        insert_at(&mut root, &["a", "b"], json!(2));
        assert_eq!(subtree(&root, &["a", "b"]), Some(&json!(2)));
    }
}
