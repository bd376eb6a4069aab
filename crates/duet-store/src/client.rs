//! The async store client trait and its push-style read listener.

use crate::{error::StoreError, path::StorePath, snapshot::Snapshot};
use async_trait::async_trait;
use serde_json::Value;

/// One-shot listener for a push-style read.
///
/// The store fires a registered listener exactly once: either with the full
/// snapshot of the requested node or with a store-reported cancellation.
/// Consuming `self` makes the at-most-once contract structural.
pub trait ValueListener: Send + 'static {
    /// The read completed; `snapshot` is the node's value at read time.
    fn on_snapshot(self: Box<Self>, snapshot: Snapshot);

    /// The store cancelled the read.
    fn on_cancelled(self: Box<Self>, error: StoreError);
}

/// Client handle to the remote hierarchical key-value store.
///
/// Mutations resolve when the store *accepts* the operation — durability is
/// not awaited, matching the store's fire-and-forget write semantics. The
/// store serializes writes per key; concurrent writers to the same path are
/// last-write-wins with no further ordering guarantee.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Upsert the node at `path`, replacing any existing value in full.
    async fn put(&self, path: &StorePath, value: Value) -> Result<(), StoreError>;

    /// Remove the node at `path` and its subtree. Removing an absent node
    /// succeeds.
    async fn remove(&self, path: &StorePath) -> Result<(), StoreError>;

    /// Register a one-shot listener for the value of `path`.
    ///
    /// The listener fires on a background task, exactly once. Each
    /// registration is independent: concurrent reads share no state.
    fn read_once(&self, path: &StorePath, listener: Box<dyn ValueListener>);

    /// Close the connection. Pending reads are cancelled and subsequent
    /// operations fail with [`StoreError::ConnectionClosed`].
    async fn shutdown(&self) -> Result<(), StoreError>;
}
