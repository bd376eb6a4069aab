//! One-shot listener to awaited-result bridge.
//!
//! The store delivers a collection read by firing a listener once on a
//! background task; callers want a single deterministic outcome. The bridge
//! converts one into the other: register a listener that forwards into a
//! oneshot channel, then await the channel under a bound.

use crate::error::ReadError;
use duet_store::{Snapshot, StoreClient, StoreError, StorePath, ValueListener};
use std::time::Duration;
use tokio::sync::oneshot;

struct ChannelListener {
    tx: oneshot::Sender<Result<Snapshot, StoreError>>,
}

impl ValueListener for ChannelListener {
    fn on_snapshot(self: Box<Self>, snapshot: Snapshot) {
        let _ = self.tx.send(Ok(snapshot));
    }

    fn on_cancelled(self: Box<Self>, error: StoreError) {
        let _ = self.tx.send(Err(error));
    }
}

/// Read one snapshot of `path`, waiting at most `wait`.
///
/// Exactly one of three outcomes: the snapshot (an empty collection is a
/// success, not an error), [`ReadError::Failed`] when the store reports an
/// error or drops the listener unfired, or [`ReadError::Timeout`] when
/// nothing fires within the bound. Each call owns its own channel, so
/// concurrent reads share no mutable state.
pub async fn read_snapshot(
    client: &dyn StoreClient,
    path: &StorePath,
    wait: Duration,
) -> Result<Snapshot, ReadError> {
    let (tx, rx) = oneshot::channel();
    client.read_once(path, Box::new(ChannelListener { tx }));

    match tokio::time::timeout(wait, rx).await {
        Ok(Ok(Ok(snapshot))) => Ok(snapshot),
        Ok(Ok(Err(error))) => Err(ReadError::Failed(error)),
        Ok(Err(_)) => Err(ReadError::Failed(StoreError::cancelled(
            "listener dropped before firing",
        ))),
        Err(_) => {
            tracing::warn!(path = %path, waited = ?wait, "snapshot read timed out");
            Err(ReadError::Timeout { waited: wait })
        }
    }
}
