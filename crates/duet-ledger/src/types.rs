//! Entry and history record types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two fixed journal identities.
///
/// A closed enum rather than a free string, so the two-sided history merge is
/// exhaustive and checked by the compiler. Which login maps to which party is
/// the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Author {
    /// The first party.
    #[serde(rename = "partyA")]
    PartyA,
    /// The second party.
    #[serde(rename = "partyB")]
    PartyB,
}

impl Author {
    /// The string stored in the `author` field of a persisted record.
    pub const fn as_wire_str(self) -> &'static str {
        match self {
            Self::PartyA => "partyA",
            Self::PartyB => "partyB",
        }
    }

    /// Parse a persisted `author` field. Unknown strings are `None`; the
    /// record carrying one is malformed.
    pub fn from_wire_str(s: &str) -> Option<Self> {
        match s {
            "partyA" => Some(Self::PartyA),
            "partyB" => Some(Self::PartyB),
            _ => None,
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

/// One submitted journal entry, as read back from the store.
///
/// Created by a write, never mutated, removed only by an explicit delete of
/// its date key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThoughtEntry {
    /// External timestamp key, `"YYYY-MM-DD HH:MM:SS"`.
    pub date_key: String,
    /// Which party wrote the entry.
    pub author: Author,
    /// The entry text, non-empty and trimmed at write time.
    pub text: String,
    /// Creation time in epoch milliseconds; absent on legacy records.
    pub epoch_millis: Option<i64>,
}

/// Both parties' entries for one date key, merged for display.
///
/// Derived on every read, never persisted. At least one side is non-empty:
/// a key with no entries is never produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// The shared date key.
    pub date_key: String,
    /// Party A's text, or empty if party A has no entry at this key.
    pub party_a_text: String,
    /// Party B's text, or empty if party B has no entry at this key.
    pub party_b_text: String,
}
