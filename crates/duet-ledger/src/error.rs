//! Ledger errors, one enum per failure surface.
//!
//! Local validation rejects before any I/O; remote failures come back as
//! typed values, never panics. No automatic retries — the store defines no
//! retry policy, so none is invented here.

use duet_store::StoreError;
use std::time::Duration;
use thiserror::Error;

/// Failures of [`crate::ThoughtLedger::write`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    /// The entry text was empty after trimming; nothing was written.
    #[error("entry text is empty after trimming")]
    EmptyText,

    /// The store did not accept the write.
    #[error("store rejected the write: {0}")]
    Store(#[from] StoreError),
}

/// Failures of [`crate::ThoughtLedger::read_all`].
///
/// An empty collection is a success, never an error; callers can rely on
/// these variants meaning "history unavailable".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// The store reported a read failure.
    #[error("history read failed: {0}")]
    Failed(#[source] StoreError),

    /// The snapshot listener did not fire within the configured bound.
    #[error("history read timed out after {waited:?}")]
    Timeout {
        /// How long the bridge waited.
        waited: Duration,
    },
}

/// Failures of [`crate::ThoughtLedger::delete`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteError {
    /// The store did not accept the removal.
    #[error("store rejected the delete: {0}")]
    Store(#[from] StoreError),
}
