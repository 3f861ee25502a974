//! Batch ordering for discovered files.

use std::sync::LazyLock;

use regex::Regex;

use super::discovery::FileEntry;
use crate::models::OrderCriterion;

static SEQUENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)\)").expect("valid sequence pattern"));

/// Extract the first parenthesized integer from a filename.
///
/// `clip_(12).wav` -> `Some(12)`, `clip.wav` -> `None`.
pub fn extract_number(filename: &str) -> Option<u64> {
    SEQUENCE_RE
        .captures(filename)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Sort entries in place by the given criterion.
///
/// All sorts are stable: equal keys keep their enumeration order. For the
/// sequence criterion, entries without a number sort after all entries
/// that have one.
pub fn sort_entries(entries: &mut [FileEntry], criterion: OrderCriterion) {
    match criterion {
        OrderCriterion::CreatedAsc => entries.sort_by_key(|e| e.created),
        OrderCriterion::CreatedDesc => entries.sort_by(|a, b| b.created.cmp(&a.created)),
        OrderCriterion::ModifiedAsc => entries.sort_by_key(|e| e.modified),
        OrderCriterion::ModifiedDesc => entries.sort_by(|a, b| b.modified.cmp(&a.modified)),
        OrderCriterion::Sequence => {
            entries.sort_by_key(|e| e.sequence.unwrap_or(u64::MAX));
        }
        OrderCriterion::Unordered => {}
    }
}
