//! Node paths in the store hierarchy.

use crate::error::StoreError;
use std::fmt;

/// Characters the store forbids inside a node name.
///
/// Keys carrying any of these must be normalized before they reach the store;
/// the ledger's key codec exists for exactly this reason.
pub const FORBIDDEN_SEGMENT_CHARS: &[char] = &['.', '#', '$', '[', ']', ':'];

/// A validated, slash-joined path to a node in the store hierarchy.
///
/// Every segment is non-empty and free of [`FORBIDDEN_SEGMENT_CHARS`], so a
/// `StorePath` can always be handed to the remote store verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorePath(String);

impl StorePath {
    /// Build a path from a slash-joined string, validating every segment.
    pub fn new(path: &str) -> Result<Self, StoreError> {
        for segment in path.split('/') {
            check_segment(segment)?;
        }
        Ok(Self(path.to_owned()))
    }

    /// Append one child segment.
    pub fn child(&self, segment: &str) -> Result<Self, StoreError> {
        check_segment(segment)?;
        Ok(Self(format!("{}/{segment}", self.0)))
    }

    /// The slash-joined path string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate the path's segments, root-most first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// The final segment — the node's own name.
    pub fn key(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for StorePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn check_segment(segment: &str) -> Result<(), StoreError> {
    if segment.is_empty() {
        return Err(StoreError::invalid_path(segment, "empty segment"));
    }
    if let Some(ch) = segment.chars().find(|c| FORBIDDEN_SEGMENT_CHARS.contains(c)) {
        return Err(StoreError::invalid_path(
            segment,
            format!("contains forbidden character {ch:?}"),
        ));
    }
    Ok(())
}
