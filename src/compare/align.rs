// src/compare/align.rs

use crate::snapshot::Snapshot;

/// One player seen across a snapshot pair. At least one side is present;
/// a name in neither snapshot has no pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignedPair {
    pub name: String,
    pub older: Option<u64>,
    pub newer: Option<u64>,
}

/// Union of both snapshots' players, each name exactly once. Matching is
/// exact on the stored (trimmed) form; churn shows up as a missing side.
///
/// Order: newer-snapshot row order, then players only in the older
/// snapshot in its row order. Downstream sorting relies on this being
/// deterministic, nothing more.
pub fn align(older: &Snapshot, newer: &Snapshot) -> Vec<AlignedPair> {
    let mut out = Vec::with_capacity(newer.len() + older.len() / 4);

    for (name, experience) in newer.rows() {
        out.push(AlignedPair {
            name: name.clone(),
            older: older.get(name),
            newer: Some(*experience),
        });
    }

    for (name, experience) in older.rows() {
        if newer.get(name).is_none() {
            out.push(AlignedPair {
                name: name.clone(),
                older: Some(*experience),
                newer: None,
            });
        }
    }

    out
}
