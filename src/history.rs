// src/history.rs
//
// Per-player time series across every snapshot on record. Search is
// case-insensitive (the stored names stay untouched); the display name is
// the stored capitalization from the most recent snapshot that matched.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::snapshot::Snapshot;
use crate::store::SnapshotStore;

#[derive(Clone, Debug, Serialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub experience: u64,
    /// Rank within that day's snapshot, same rules as the comparison side.
    pub rank: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct PlayerHistory {
    /// The name as the caller typed it (trimmed).
    pub searched: String,
    /// Stored form from the most recent matching snapshot; equals
    /// `searched` when the player was never found.
    pub display_name: String,
    /// Chronological, one point per snapshot containing the player.
    /// Materialized: iterate it as often as you like, or call `history`
    /// again to re-derive.
    pub points: Vec<HistoryPoint>,
}

impl PlayerHistory {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Row index of the best case-insensitive match in one snapshot: an exact
/// match wins, otherwise the first row whose folded name equals the key.
fn find_match(snapshot: &Snapshot, searched: &str, key: &str) -> Option<usize> {
    if let Some(ix) = snapshot.position(searched) {
        return Some(ix);
    }
    snapshot
        .rows()
        .iter()
        .position(|(name, _)| name.to_lowercase() == key)
}

/// Assemble the full history for one player. Blank input fails with
/// `InvalidPlayerName` before the store is touched; an unknown player
/// yields an empty point list, which is not an error.
pub fn history(player_name: &str, store: &dyn SnapshotStore) -> Result<PlayerHistory> {
    let searched = player_name.trim();
    if searched.is_empty() {
        return Err(Error::InvalidPlayerName);
    }
    let key = searched.to_lowercase();

    let mut points = Vec::new();
    let mut display_name = s!(searched);

    for date in store.list_dates()? {
        let snapshot = store.load(date)?;
        let Some(ix) = find_match(&snapshot, searched, &key) else { continue };

        let (name, experience) = &snapshot.rows()[ix];
        let rank = snapshot.ranks()[ix];
        points.push(HistoryPoint {
            date,
            experience: *experience,
            rank,
        });
        // Dates ascend, so the last assignment wins: most recent match.
        display_name = name.clone();
    }

    Ok(PlayerHistory {
        searched: s!(searched),
        display_name,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem::MemStore;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn snap(date: &str, rows: &[(&str, u64)]) -> Snapshot {
        Snapshot::new(d(date), rows.iter().map(|&(n, e)| (s!(n), e)).collect())
    }

    fn fixture() -> MemStore {
        MemStore::new(vec![
            snap("2025-10-01", &[("Aldo", 100), ("Berrin", 300)]),
            snap("2025-10-02", &[("Berrin", 310)]),
            snap("2025-10-03", &[("ALDO", 160), ("Berrin", 320)]),
        ])
    }

    #[test]
    fn blank_name_rejected_before_lookup() {
        let store = MemStore::new(vec![]);
        assert!(matches!(history("   ", &store), Err(Error::InvalidPlayerName)));
        assert!(matches!(history("", &store), Err(Error::InvalidPlayerName)));
    }

    #[test]
    fn unknown_player_is_empty_not_error() {
        let h = history("Nobody", &fixture()).unwrap();
        assert!(h.is_empty());
        assert_eq!(h.display_name, "Nobody");
    }

    #[test]
    fn skips_snapshots_without_the_player() {
        let h = history("aldo", &fixture()).unwrap();
        let dates: Vec<NaiveDate> = h.points.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![d("2025-10-01"), d("2025-10-03")]);
        assert_eq!(h.points[0].experience, 100);
        assert_eq!(h.points[0].rank, 2);
    }

    #[test]
    fn display_name_follows_latest_capitalization() {
        let h = history("aldo", &fixture()).unwrap();
        assert_eq!(h.searched, "aldo");
        assert_eq!(h.display_name, "ALDO");
    }

    #[test]
    fn exact_match_beats_fold_match_in_one_snapshot() {
        let store = MemStore::new(vec![snap("2025-10-01", &[("ALDO", 50), ("Aldo", 70)])]);
        let h = history("Aldo", &store).unwrap();
        assert_eq!(h.points[0].experience, 70);
        assert_eq!(h.display_name, "Aldo");
    }

    #[test]
    fn fold_ambiguity_takes_first_row() {
        let store = MemStore::new(vec![snap("2025-10-01", &[("ALDO", 50), ("AlDo", 70)])]);
        let h = history("aldo", &store).unwrap();
        assert_eq!(h.points[0].experience, 50);
        assert_eq!(h.display_name, "ALDO");
    }
}
