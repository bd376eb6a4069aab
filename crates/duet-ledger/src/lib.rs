//! The Thought Ledger — a two-party shared journal over a remote
//! hierarchical key-value store.
//!
//! Each of two fixed parties submits dated text entries; the ledger persists
//! them under `thoughts/{key}` and replays them as a merged, chronologically
//! ordered history with both parties side by side per date.
//!
//! Components, leaves first:
//!
//! - [`keys`]: the storage-safe key codec and the system date-key formatter
//! - [`bridge`]: one-shot push reads converted to awaited results with
//!   explicit failure and timeout outcomes
//! - [`ledger`]: write / read-all / delete over the collection
//! - [`history`]: the pure reducer merging raw entries into display records
//!
//! The HTTP layer, authentication, and process bootstrap live elsewhere and
//! call in through [`ThoughtLedger`]; the ledger performs no authentication
//! itself. The store connection is injected at construction and shared —
//! init once, use everywhere, close at shutdown.
//!
//! # Example
//!
//! ```ignore
//! use duet_ledger::{Author, ThoughtLedger, history};
//!
//! let ledger = ThoughtLedger::new(client);
//! ledger.write(&date_key, Author::PartyA, "an entry").await?;
//! let records = history::reduce(&ledger.read_all().await?);
//! ```

pub mod bridge;
pub mod error;
pub mod history;
pub mod keys;
pub mod ledger;
pub mod types;

pub use bridge::read_snapshot;
pub use error::{DeleteError, ReadError, WriteError};
pub use history::reduce;
pub use ledger::{LedgerConfig, ThoughtLedger};
pub use types::{Author, HistoryRecord, ThoughtEntry};
