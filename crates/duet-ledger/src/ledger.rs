//! The ledger store: writes, snapshot reads, and deletes over the
//! `thoughts` collection.

use crate::{
    bridge,
    error::{DeleteError, ReadError, WriteError},
    keys,
    types::{Author, ThoughtEntry},
};
use duet_store::{StoreClient, StorePath};
use serde_json::{Map, Value};
use std::{sync::Arc, time::Duration};
use time::OffsetDateTime;

/// Collection node holding one child per entry.
const THOUGHTS_NODE: &str = "thoughts";

const AUTHOR_FIELD: &str = "author";
const THOUGHT_FIELD: &str = "thought";
const TIMESTAMP_FIELD: &str = "timestamp";

/// Ledger tuning knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Bound on how long a snapshot read may wait for the store's listener.
    pub read_timeout: Duration,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_secs(10),
        }
    }
}

/// The two-party journal ledger.
///
/// Holds a shared handle to a connected store and no other state; the store's
/// per-key write serialization is the only concurrency guard. Constructed
/// with its connection rather than reaching for a process global, so tests
/// and bootstrap wire it explicitly.
pub struct ThoughtLedger {
    client: Arc<dyn StoreClient>,
    config: LedgerConfig,
}

impl ThoughtLedger {
    /// Create a ledger over `client` with default configuration.
    pub fn new(client: Arc<dyn StoreClient>) -> Self {
        Self::with_config(client, LedgerConfig::default())
    }

    /// Create a ledger over `client` with explicit configuration.
    pub fn with_config(client: Arc<dyn StoreClient>, config: LedgerConfig) -> Self {
        Self { client, config }
    }

    /// Persist one entry under `date_key`, overwriting any record already at
    /// that key in full.
    ///
    /// The text is trimmed first; empty-after-trim is rejected as
    /// [`WriteError::EmptyText`] before any I/O. Success means the store
    /// accepted the write — durability is not awaited.
    pub async fn write(
        &self,
        date_key: &str,
        author: Author,
        text: &str,
    ) -> Result<(), WriteError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(WriteError::EmptyText);
        }

        let storage_key = keys::encode_date_key(date_key);
        let path = StorePath::new(THOUGHTS_NODE)?.child(&storage_key)?;

        let mut record = Map::new();
        record.insert(
            AUTHOR_FIELD.to_owned(),
            Value::String(author.as_wire_str().to_owned()),
        );
        record.insert(THOUGHT_FIELD.to_owned(), Value::String(text.to_owned()));
        record.insert(TIMESTAMP_FIELD.to_owned(), Value::from(now_millis()));

        self.client.put(&path, Value::Object(record)).await?;
        tracing::info!(date_key, author = %author, "saved thought");
        Ok(())
    }

    /// Read every entry currently in the collection.
    ///
    /// Waits for one snapshot (bounded by the configured read timeout), then
    /// decodes each child. Children missing an author or text, or carrying an
    /// unknown author, are skipped with a warning — one bad record never
    /// fails the read. Order is unspecified; [`crate::history::reduce`]
    /// owns ordering.
    pub async fn read_all(&self) -> Result<Vec<ThoughtEntry>, ReadError> {
        let collection = StorePath::new(THOUGHTS_NODE).map_err(ReadError::Failed)?;
        let snapshot =
            bridge::read_snapshot(self.client.as_ref(), &collection, self.config.read_timeout)
                .await?;

        let mut entries = Vec::with_capacity(snapshot.child_count());
        let mut skipped = 0usize;
        for (storage_key, value) in snapshot.children() {
            match parse_entry(storage_key, value) {
                Some(entry) => entries.push(entry),
                None => {
                    skipped += 1;
                    tracing::warn!(storage_key, "skipping malformed thought record");
                }
            }
        }
        tracing::info!(loaded = entries.len(), skipped, "loaded thoughts");
        Ok(entries)
    }

    /// Remove the entry at `date_key`. Removing an absent key succeeds.
    pub async fn delete(&self, date_key: &str) -> Result<(), DeleteError> {
        let storage_key = keys::encode_date_key(date_key);
        let path = StorePath::new(THOUGHTS_NODE)?.child(&storage_key)?;
        self.client.remove(&path).await?;
        tracing::info!(date_key, "deleted thought");
        Ok(())
    }

    /// Remove the entire collection.
    ///
    /// The ledger exposes the capability; gating it to a particular caller is
    /// the routing layer's concern.
    pub async fn clear_all(&self) -> Result<(), DeleteError> {
        let collection = StorePath::new(THOUGHTS_NODE)?;
        self.client.remove(&collection).await?;
        tracing::info!("cleared all thoughts");
        Ok(())
    }
}

fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

fn parse_entry(storage_key: &str, value: &Value) -> Option<ThoughtEntry> {
    let author = value
        .get(AUTHOR_FIELD)?
        .as_str()
        .and_then(Author::from_wire_str)?;
    let text = value.get(THOUGHT_FIELD)?.as_str()?;
    let epoch_millis = value.get(TIMESTAMP_FIELD).and_then(parse_millis);

    Some(ThoughtEntry {
        date_key: keys::decode_storage_key(storage_key),
        author,
        text: text.to_owned(),
        epoch_millis,
    })
}

// Written as an integer; some legacy records carry it as a decimal string.
fn parse_millis(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
