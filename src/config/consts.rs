// src/config/consts.rs

// Net config
pub const HOST: &str = "classic.dura-online.com";
pub const HIGHSCORE_PATH: &str = "/?highscores/experience";

// Snapshot store
pub const DEFAULT_SNAPSHOT_DIR: &str = "snapshots";
pub const SNAPSHOT_PREFIX: &str = "highscores_";
pub const SNAPSHOT_EXT: &str = "csv";
pub const DATE_FMT: &str = "%Y-%m-%d";
pub const STORE_SEP: char = ',';

// Scrape
pub const DEFAULT_PAGES: u32 = 10;
pub const REQUEST_PAUSE_MS: u64 = 250; // be polite

// Comparison windows: label → lookback days
pub const DEFAULT_WINDOWS: &[(&str, u32)] = &[("daily", 1), ("weekly", 7), ("monthly", 30)];
