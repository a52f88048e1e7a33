// src/scrape/mod.rs
mod highscores;

pub use highscores::{page_path, parse_highscores};

use std::{error::Error, thread, time::Duration};

use crate::core::net;
use crate::progress::Progress;

/// Fetch `pages` highscore pages in order and concatenate their rows.
/// Sequential on purpose: the site is small and we pause between requests.
pub fn collect_highscores(
    pages: u32,
    delay_ms: u64,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<(String, u64)>, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(pages as usize);
    }

    let mut all_rows = Vec::new();
    for page in 1..=pages {
        let html = net::http_get(&page_path(page))?;
        let rows = parse_highscores(&html);
        logd!("page {page}: {} rows", rows.len());
        all_rows.extend(rows);

        if let Some(p) = progress.as_deref_mut() {
            p.page_done(page);
        }
        if page < pages {
            thread::sleep(Duration::from_millis(delay_ms)); // be polite
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("scraped {} rows across {pages} pages", all_rows.len());
    Ok(all_rows)
}
