// src/config/options.rs
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

use super::consts::*;

/// A named lookback window. The canonical set is daily/weekly/monthly but
/// the whole set is configurable (`--windows`), not hard-coded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WindowSpec {
    pub label: String,
    pub days: u32,
}

impl WindowSpec {
    pub fn new(label: &str, days: u32) -> Self {
        Self { label: s!(label), days }
    }
}

pub fn default_windows() -> Vec<WindowSpec> {
    DEFAULT_WINDOWS
        .iter()
        .map(|&(label, days)| WindowSpec::new(label, days))
        .collect()
}

#[derive(Clone, Debug)]
pub struct Options {
    pub dir: PathBuf,              // snapshot directory
    pub pages: u32,                // highscore pages to fetch
    pub delay_ms: u64,             // pause between page fetches
    pub date: Option<NaiveDate>,   // target date (default: today)
    pub out: Option<PathBuf>,      // output path override
    pub json: bool,                // emit JSON instead of HTML
    pub windows: Vec<WindowSpec>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_SNAPSHOT_DIR),
            pages: DEFAULT_PAGES,
            delay_ms: REQUEST_PAUSE_MS,
            date: None,
            out: None,
            json: false,
            windows: default_windows(),
        }
    }
}
