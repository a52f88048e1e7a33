// src/error.rs
use chrono::NaiveDate;

/// Core error taxonomy. Window unavailability is deliberately *not* here:
/// a missing lookback window is a normal, reportable state, not a failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested target date has no snapshot. No fallback to a nearby
    /// date: guessing which date the user meant is worse than failing.
    #[error("no snapshot for {0}")]
    SnapshotMissing(NaiveDate),

    /// Empty or blank player name passed to history lookup.
    #[error("player name is empty")]
    InvalidPlayerName,

    /// A snapshot file exists but a row in it doesn't parse.
    #[error("{path}:{line}: {reason}")]
    MalformedSnapshot {
        path: String,
        line: usize,
        reason: String,
    },

    /// Store-layer I/O, propagated unchanged. Retry policy (if any) belongs
    /// to the store, not here.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
