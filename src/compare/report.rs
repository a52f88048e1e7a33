// src/compare/report.rs

use chrono::NaiveDate;
use serde::Serialize;

use crate::compare::{align, compute, window, PlayerDelta};
use crate::config::options::WindowSpec;
use crate::error::Result;
use crate::store::SnapshotStore;

/// One window's worth of comparison. `older_date` is the snapshot actually
/// diffed against; it can differ from the ideal lookback date when days
/// are missing, and is `None` when the window had no usable history
/// (deltas empty; renderers show "insufficient history" instead of
/// dropping the section).
#[derive(Clone, Debug, Serialize)]
pub struct WindowResult {
    pub label: String,
    pub days: u32,
    pub older_date: Option<NaiveDate>,
    pub deltas: Vec<PlayerDelta>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ComparisonReport {
    pub target_date: NaiveDate,
    /// In configuration order, so output is deterministic end to end.
    pub windows: Vec<WindowResult>,
}

impl ComparisonReport {
    pub fn window(&self, label: &str) -> Option<&WindowResult> {
        self.windows.iter().find(|w| w.label == label)
    }
}

/// Build the full multi-window comparison for `target`. Fails with
/// `SnapshotMissing` when the target itself has no snapshot, never a
/// partial report. Unavailable windows are a normal, reported state.
pub fn build(
    target: NaiveDate,
    store: &dyn SnapshotStore,
    windows: &[WindowSpec],
) -> Result<ComparisonReport> {
    let newer = store.load(target)?;
    let available = store.list_dates()?;

    let mut results = Vec::with_capacity(windows.len());
    for (spec, (label, resolved)) in windows
        .iter()
        .zip(window::select(target, &available, windows))
    {
        let (older_date, deltas) = match resolved {
            Some(date) => {
                let older = store.load(date)?;
                let aligned = align(&older, &newer);
                (Some(date), compute(&aligned, &older, &newer))
            }
            None => (None, Vec::new()),
        };

        results.push(WindowResult {
            label,
            days: spec.days,
            older_date,
            deltas,
        });
    }

    Ok(ComparisonReport {
        target_date: target,
        windows: results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::snapshot::Snapshot;
    use crate::store::mem::MemStore;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn snap(date: &str, rows: &[(&str, u64)]) -> Snapshot {
        Snapshot::new(d(date), rows.iter().map(|&(n, e)| (s!(n), e)).collect())
    }

    fn three_windows() -> Vec<WindowSpec> {
        vec![
            WindowSpec::new("daily", 1),
            WindowSpec::new("weekly", 7),
            WindowSpec::new("monthly", 30),
        ]
    }

    fn fixture() -> MemStore {
        MemStore::new(vec![
            snap("2025-09-08", &[("A", 50), ("B", 120)]),
            snap("2025-10-02", &[("A", 100), ("B", 200)]),
            snap("2025-10-03", &[("A", 150), ("B", 190), ("C", 50)]),
        ])
    }

    #[test]
    fn missing_target_fails_whole_build() {
        let store = fixture();
        match build(d("2025-10-10"), &store, &three_windows()) {
            Err(Error::SnapshotMissing(date)) => assert_eq!(date, d("2025-10-10")),
            other => panic!("expected SnapshotMissing, got {:?}", other.map(|r| r.target_date)),
        }
    }

    #[test]
    fn windows_resolve_independently() {
        let store = fixture();
        let report = build(d("2025-10-03"), &store, &three_windows()).unwrap();

        let daily = report.window("daily").unwrap();
        assert_eq!(daily.older_date, Some(d("2025-10-02")));
        assert_eq!(daily.deltas[0].name, "A"); // +50 leads

        // Ideal weekly date 2025-09-26: gap-tolerated back to 09-08.
        let weekly = report.window("weekly").unwrap();
        assert_eq!(weekly.older_date, Some(d("2025-09-08")));

        // Nothing 30 days back: reported as unavailable, not an error.
        let monthly = report.window("monthly").unwrap();
        assert_eq!(monthly.older_date, None);
        assert!(monthly.deltas.is_empty());
    }

    #[test]
    fn windows_keep_configuration_order() {
        let store = fixture();
        let report = build(d("2025-10-03"), &store, &three_windows()).unwrap();
        let labels: Vec<&str> = report.windows.iter().map(|w| w.label.as_str()).collect();
        assert_eq!(labels, vec!["daily", "weekly", "monthly"]);
    }

    #[test]
    fn build_is_deterministic() {
        let store = fixture();
        let windows = three_windows();
        let a = build(d("2025-10-03"), &store, &windows).unwrap();
        let b = build(d("2025-10-03"), &store, &windows).unwrap();
        // Byte-identical including ordering.
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
