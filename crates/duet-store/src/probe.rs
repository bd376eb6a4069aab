//! Startup connectivity probe.

use crate::{client::StoreClient, error::StoreError, path::StorePath};
use serde_json::Value;

/// Node the probe writes to.
pub const PROBE_NODE: &str = "test";

/// Marker value the probe writes.
pub const PROBE_MESSAGE: &str = "store connection ok";

/// Write a marker value to the probe node.
///
/// Bootstrap diagnostics: confirms the configured store accepts writes before
/// the journal goes live. Never called by the ledger itself.
pub async fn connectivity_probe(client: &dyn StoreClient) -> Result<(), StoreError> {
    let path = StorePath::new(PROBE_NODE)?;
    client
        .put(&path, Value::String(PROBE_MESSAGE.to_owned()))
        .await?;
    tracing::info!(node = PROBE_NODE, "connectivity probe write accepted");
    Ok(())
}
