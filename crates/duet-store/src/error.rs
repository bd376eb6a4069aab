//! Store boundary errors.

use thiserror::Error;

/// Errors reported by the remote key-value store boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A path segment contains a character the store forbids in node names.
    #[error("invalid path segment {segment:?}: {reason}")]
    InvalidPath {
        /// The offending segment
        segment: String,
        /// Why the segment was rejected
        reason: String,
    },

    /// The connection has been shut down; no further operations are accepted.
    #[error("store connection is closed")]
    ConnectionClosed,

    /// The store cancelled an in-flight read.
    #[error("read cancelled by store: {reason}")]
    Cancelled {
        /// Store-reported cancellation cause
        reason: String,
    },
}

impl StoreError {
    /// Create an invalid-path error.
    pub fn invalid_path(segment: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            segment: segment.into(),
            reason: reason.into(),
        }
    }

    /// Create a cancelled-read error.
    pub fn cancelled(reason: impl Into<String>) -> Self {
        Self::Cancelled {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = StoreError::invalid_path("a:b", "contains ':'");
        assert!(err.to_string().contains("a:b"));

        let err = StoreError::cancelled("permission denied");
        assert!(err.to_string().contains("permission denied"));
    }
}
