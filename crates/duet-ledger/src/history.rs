//! Merging raw entries into ordered history records.

use crate::types::{Author, HistoryRecord, ThoughtEntry};
use indexmap::IndexMap;
use std::cmp::Ordering;

struct HistoryGroup {
    record: HistoryRecord,
    epoch_millis: Option<i64>,
}

/// Merge raw, unordered entries into paired history records, newest first.
///
/// Entries are grouped by date key in input order; within a group each
/// party's slot takes that party's text (a duplicate entry for the same
/// author resolves to the later one in input order). Groups sort by epoch
/// milliseconds descending. When either side of a comparison lacks a
/// timestamp the pair compares equal, and the sort being stable, such legacy
/// entries keep their relative input order.
///
/// Pure transformation — no I/O, recomputed on every read.
pub fn reduce(entries: &[ThoughtEntry]) -> Vec<HistoryRecord> {
    let mut groups: IndexMap<&str, HistoryGroup> = IndexMap::new();

    for entry in entries {
        let group = groups
            .entry(entry.date_key.as_str())
            .or_insert_with(|| HistoryGroup {
                record: HistoryRecord {
                    date_key: entry.date_key.clone(),
                    party_a_text: String::new(),
                    party_b_text: String::new(),
                },
                epoch_millis: None,
            });

        match entry.author {
            Author::PartyA => group.record.party_a_text = entry.text.clone(),
            Author::PartyB => group.record.party_b_text = entry.text.clone(),
        }
        // A group's sort timestamp is its most recent write.
        group.epoch_millis = match (group.epoch_millis, entry.epoch_millis) {
            (Some(current), Some(new)) => Some(current.max(new)),
            (current, new) => current.or(new),
        };
    }

    let mut groups: Vec<HistoryGroup> = groups.into_values().collect();
    groups.sort_by(|a, b| match (a.epoch_millis, b.epoch_millis) {
        (Some(a), Some(b)) => b.cmp(&a),
        _ => Ordering::Equal,
    });
    groups.into_iter().map(|group| group.record).collect()
}
