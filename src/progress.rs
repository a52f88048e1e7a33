// src/progress.rs
/// Lightweight progress reporting for the long-running scrape.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one highscore page has been fetched and parsed.
    fn page_done(&mut self, _page: u32) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
