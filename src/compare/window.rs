// src/compare/window.rs

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

use crate::config::options::WindowSpec;

/// Resolve each window to the older snapshot date to diff against, or
/// `None` when the history doesn't reach back far enough.
///
/// Policy: ideal = target − days; take the latest available date ≤ ideal.
/// Snapshots go missing for arbitrary days (scrape failures, gaps), so an
/// exact-date lookup would make the whole report brittle. The resolved
/// date is never the target itself and never after the ideal date.
pub fn select(
    target: NaiveDate,
    available: &BTreeSet<NaiveDate>,
    windows: &[WindowSpec],
) -> Vec<(String, Option<NaiveDate>)> {
    windows
        .iter()
        .map(|w| {
            let resolved = target
                .checked_sub_days(Days::new(w.days as u64))
                .and_then(|ideal| {
                    available.range(..=ideal).rev().find(|&&d| d < target).copied()
                });
            (w.label.clone(), resolved)
        })
        .collect()
}
