// src/compare/delta.rs

use serde::Serialize;

use crate::compare::align::AlignedPair;
use crate::snapshot::Snapshot;

/// Per-player movement between two snapshots. `delta` is `None` for
/// players present on only one side; joiners and leavers are reported,
/// not dropped, so the renderer can flag them.
#[derive(Clone, Debug, Serialize)]
pub struct PlayerDelta {
    pub name: String,
    pub older_exp: Option<u64>,
    pub newer_exp: Option<u64>,
    /// newer − older; None unless both sides are present.
    pub delta: Option<i64>,
    /// 1-based, descending experience, within the older snapshot.
    pub older_rank: Option<u32>,
    pub newer_rank: Option<u32>,
    /// older − newer; positive = moved up. None unless both ranks exist.
    pub rank_delta: Option<i32>,
}

/// Deltas and rank movement for every aligned player. Output is ordered by
/// experience delta descending; players without a delta come last, keeping
/// their aligned order among themselves.
pub fn compute(aligned: &[AlignedPair], older: &Snapshot, newer: &Snapshot) -> Vec<PlayerDelta> {
    let older_ranks = older.rank_map();
    let newer_ranks = newer.rank_map();

    let mut defined: Vec<PlayerDelta> = Vec::with_capacity(aligned.len());
    let mut undefined: Vec<PlayerDelta> = Vec::new();

    for pair in aligned {
        let older_rank = older_ranks.get(pair.name.as_str()).copied();
        let newer_rank = newer_ranks.get(pair.name.as_str()).copied();

        let delta = match (pair.older, pair.newer) {
            (Some(o), Some(n)) => Some(n as i64 - o as i64),
            _ => None,
        };
        let rank_delta = match (older_rank, newer_rank) {
            (Some(o), Some(n)) => Some(o as i32 - n as i32),
            _ => None,
        };

        let entry = PlayerDelta {
            name: pair.name.clone(),
            older_exp: pair.older,
            newer_exp: pair.newer,
            delta,
            older_rank,
            newer_rank,
            rank_delta,
        };

        if delta.is_some() {
            defined.push(entry);
        } else {
            undefined.push(entry);
        }
    }

    // Stable sort: equal deltas keep aligned order, so repeated builds on
    // the same files produce identical reports.
    defined.sort_by(|a, b| b.delta.cmp(&a.delta));
    defined.extend(undefined);
    defined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::align;
    use chrono::NaiveDate;

    fn snap(day: u32, rows: &[(&str, u64)]) -> Snapshot {
        Snapshot::new(
            NaiveDate::from_ymd_opt(2025, 10, day).unwrap(),
            rows.iter().map(|&(n, e)| (s!(n), e)).collect(),
        )
    }

    #[test]
    fn worked_example_from_two_days() {
        // 2025-10-02: A=100, B=200; 2025-10-03: A=150, B=190, C=50.
        let older = snap(2, &[("A", 100), ("B", 200)]);
        let newer = snap(3, &[("A", 150), ("B", 190), ("C", 50)]);

        let deltas = compute(&align(&older, &newer), &older, &newer);
        let names: Vec<&str> = deltas.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        assert_eq!(deltas[0].delta, Some(50));
        assert_eq!(deltas[0].older_rank, Some(2));
        assert_eq!(deltas[0].newer_rank, Some(2));
        assert_eq!(deltas[0].rank_delta, Some(0));

        assert_eq!(deltas[1].delta, Some(-10));
        assert_eq!(deltas[1].older_rank, Some(1));
        assert_eq!(deltas[1].newer_rank, Some(1));

        assert_eq!(deltas[2].delta, None);
        assert_eq!(deltas[2].older_rank, None);
        assert_eq!(deltas[2].newer_rank, Some(3));
        assert_eq!(deltas[2].rank_delta, None);
    }

    #[test]
    fn exact_delta_for_shared_players() {
        let older = snap(2, &[("P", 1_000_000)]);
        let newer = snap(3, &[("P", 999_000)]);
        let deltas = compute(&align(&older, &newer), &older, &newer);
        assert_eq!(deltas[0].delta, Some(-1_000));
    }

    #[test]
    fn leavers_are_still_reported() {
        let older = snap(2, &[("Gone", 500), ("Here", 400)]);
        let newer = snap(3, &[("Here", 450)]);

        let deltas = compute(&align(&older, &newer), &older, &newer);
        let gone = deltas.iter().find(|d| d.name == "Gone").unwrap();
        assert_eq!(gone.delta, None);
        assert_eq!(gone.older_rank, Some(1));
        assert_eq!(gone.newer_rank, None);
        assert_eq!(gone.rank_delta, None);
        // Undefined deltas sort after defined ones.
        assert_eq!(deltas.last().unwrap().name, "Gone");
    }

    #[test]
    fn equal_deltas_keep_aligned_order() {
        let older = snap(2, &[("X", 10), ("Y", 20), ("Z", 30)]);
        let newer = snap(3, &[("X", 15), ("Y", 25), ("Z", 35)]);

        let deltas = compute(&align(&older, &newer), &older, &newer);
        let names: Vec<&str> = deltas.iter().map(|d| d.name.as_str()).collect();
        // All +5: newer-snapshot row order wins.
        assert_eq!(names, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn rank_delta_sign_means_climbing() {
        let older = snap(2, &[("Top", 300), ("Mid", 200), ("Low", 100)]);
        let newer = snap(3, &[("Top", 310), ("Mid", 205), ("Low", 400)]);

        let deltas = compute(&align(&older, &newer), &older, &newer);
        let low = deltas.iter().find(|d| d.name == "Low").unwrap();
        assert_eq!(low.older_rank, Some(3));
        assert_eq!(low.newer_rank, Some(1));
        assert_eq!(low.rank_delta, Some(2)); // moved up two places
    }
}
