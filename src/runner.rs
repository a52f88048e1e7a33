// src/runner.rs
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::{
    compare,
    config::Options,
    core::sanitize::sanitize_player_filename,
    history,
    progress::Progress,
    render,
    scrape,
    snapshot::Snapshot,
    store::{DirStore, SnapshotStore},
};

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

fn target_date(opts: &Options) -> NaiveDate {
    opts.date.unwrap_or_else(|| Local::now().date_naive())
}

fn write_output(
    opts: &Options,
    store: &DirStore,
    default_name: String,
    contents: String,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = opts
        .out
        .clone()
        .unwrap_or_else(|| store.dir().join(default_name));
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&path, contents)?;
    Ok(path)
}

/// End-to-end daily run: fetch pages, save today's snapshot, then build
/// and write the comparison report against it.
pub fn run_scrape(
    opts: &Options,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let rows = scrape::collect_highscores(opts.pages, opts.delay_ms, progress)?;
    let date = target_date(opts);
    let snapshot = Snapshot::new(date, rows);

    let store = DirStore::new(&opts.dir);
    let snap_path = store.save(&snapshot)?;
    logf!("snapshot saved: {}", snap_path.display());

    let mut written = vec![snap_path];
    written.push(write_report(opts, &store, date)?);
    Ok(RunSummary { files_written: written })
}

/// Build the multi-window comparison for the target date and write it.
pub fn run_report(opts: &Options) -> Result<RunSummary, Box<dyn Error>> {
    let store = DirStore::new(&opts.dir);
    let path = write_report(opts, &store, target_date(opts))?;
    Ok(RunSummary { files_written: vec![path] })
}

fn write_report(
    opts: &Options,
    store: &DirStore,
    date: NaiveDate,
) -> Result<PathBuf, Box<dyn Error>> {
    let report = compare::build(date, store, &opts.windows)?;
    let (contents, default_name) = if opts.json {
        (render::report_json(&report)?, format!("changes_{date}.json"))
    } else {
        (render::report_html(&report), format!("changes_{date}.html"))
    };
    write_output(opts, store, default_name, contents)
}

/// Assemble one player's history and write the page (or JSON).
pub fn run_history(opts: &Options, name: &str) -> Result<RunSummary, Box<dyn Error>> {
    let store = DirStore::new(&opts.dir);
    let h = history::history(name, &store)?;
    if h.is_empty() {
        logf!("no history points for {name:?}");
    }

    let stem = sanitize_player_filename(&h.display_name);
    let (contents, default_name) = if opts.json {
        (render::history_json(&h)?, format!("history_{stem}.json"))
    } else {
        (render::history_html(&h), format!("history_{stem}.html"))
    };
    let path = write_output(opts, &store, default_name, contents)?;
    Ok(RunSummary { files_written: vec![path] })
}

/// Snapshot dates on disk, oldest first.
pub fn available_dates(opts: &Options) -> Result<Vec<NaiveDate>, Box<dyn Error>> {
    let store = DirStore::new(&opts.dir);
    Ok(store.list_dates()?.into_iter().collect())
}
