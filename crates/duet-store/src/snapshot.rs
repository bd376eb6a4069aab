//! Point-in-time values read from the store.

use crate::path::StorePath;
use serde_json::Value;

/// The value of one node at read time.
///
/// A snapshot of an absent node carries no value; a snapshot of a collection
/// node carries an object value whose entries are the collection's children.
/// Both are successful reads — absence is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    path: StorePath,
    value: Option<Value>,
}

impl Snapshot {
    /// Build a snapshot of `path` holding `value` (`None` for an absent node).
    pub fn new(path: StorePath, value: Option<Value>) -> Self {
        Self { path, value }
    }

    /// The path this snapshot was read from.
    pub fn path(&self) -> &StorePath {
        &self.path
    }

    /// The node's value, if the node existed.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Whether the node existed at read time.
    pub fn exists(&self) -> bool {
        self.value.is_some()
    }

    /// Iterate the node's direct children as `(key, value)` pairs.
    ///
    /// Empty for absent nodes and for leaf (non-object) values.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.value
            .as_ref()
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|map| map.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.value
            .as_ref()
            .and_then(Value::as_object)
            .map_or(0, |map| map.len())
    }
}
