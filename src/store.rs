// src/store.rs
//
// File-backed snapshot store: one CSV per day, `highscores_YYYY-MM-DD.csv`
// under the snapshot directory. The comparison core only sees the
// `SnapshotStore` trait; scraping writes through the concrete `DirStore`.

use std::{
    collections::BTreeSet,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::NaiveDate;

use crate::config::consts::{DATE_FMT, SNAPSHOT_EXT, SNAPSHOT_PREFIX, STORE_SEP};
use crate::csv::{parse_rows, write_row};
use crate::error::{Error, Result};
use crate::snapshot::Snapshot;

pub trait SnapshotStore {
    /// Every date with a snapshot on disk. Unparseable filenames are
    /// ignored, not errors.
    fn list_dates(&self) -> Result<BTreeSet<NaiveDate>>;

    /// Load one snapshot; `SnapshotMissing` if the date has none.
    fn load(&self, date: NaiveDate) -> Result<Snapshot>;
}

pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        let stem = format!("{}{}", SNAPSHOT_PREFIX, date.format(DATE_FMT));
        self.dir.join(join!(stem, ".", SNAPSHOT_EXT))
    }

    /// Write a snapshot as CSV with a `Name,Experience` header.
    /// Overwrites any existing file for that date.
    pub fn save(&self, snapshot: &Snapshot) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(snapshot.date());

        let file = File::create(&path)?;
        let mut out = BufWriter::new(file);
        write_row(&mut out, &[s!("Name"), s!("Experience")], STORE_SEP)?;
        for (name, experience) in snapshot.rows() {
            write_row(&mut out, &[name.clone(), experience.to_string()], STORE_SEP)?;
        }
        out.flush()?;

        Ok(path)
    }
}

impl SnapshotStore for DirStore {
    fn list_dates(&self) -> Result<BTreeSet<NaiveDate>> {
        let mut dates = BTreeSet::new();
        if !self.dir.exists() {
            return Ok(dates);
        }

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() { continue; }
            let Some(name) = path.file_name().and_then(|s| s.to_str()) else { continue };
            let Some(stem) = name
                .strip_prefix(SNAPSHOT_PREFIX)
                .and_then(|rest| rest.strip_suffix(&join!(".", SNAPSHOT_EXT)))
            else { continue };

            if let Ok(date) = NaiveDate::parse_from_str(stem, DATE_FMT) {
                dates.insert(date);
            }
        }

        Ok(dates)
    }

    fn load(&self, date: NaiveDate) -> Result<Snapshot> {
        let path = self.path_for(date);
        if !path.exists() {
            return Err(Error::SnapshotMissing(date));
        }

        let text = fs::read_to_string(&path)?;
        let mut parsed = parse_rows(&text, STORE_SEP);

        // Header heuristic: first row starting with "Name" is not data.
        let mut line_base = 1;
        if parsed
            .first()
            .and_then(|r| r.first())
            .is_some_and(|c| c.eq_ignore_ascii_case("name"))
        {
            parsed.remove(0);
            line_base = 2;
        }

        let mut rows = Vec::with_capacity(parsed.len());
        for (i, row) in parsed.iter().enumerate() {
            if row.len() < 2 {
                return Err(Error::MalformedSnapshot {
                    path: path.display().to_string(),
                    line: line_base + i,
                    reason: s!("expected Name,Experience"),
                });
            }
            // Site numbers carry thousands separators; strip before parsing.
            let digits = row[1].replace(',', "");
            let experience: u64 = digits.trim().parse().map_err(|_| Error::MalformedSnapshot {
                path: path.display().to_string(),
                line: line_base + i,
                reason: format!("bad experience value {:?}", row[1]),
            })?;
            rows.push((row[0].clone(), experience));
        }

        Ok(Snapshot::new(date, rows))
    }
}

/* ---------------- In-memory store (test double) ---------------- */

#[cfg(test)]
pub(crate) mod mem {
    use std::collections::BTreeMap;

    use super::*;

    /// Keeps whole snapshots in memory; used by unit tests that don't
    /// care about the CSV layer.
    pub(crate) struct MemStore {
        snaps: BTreeMap<NaiveDate, Snapshot>,
    }

    impl MemStore {
        pub(crate) fn new(snaps: Vec<Snapshot>) -> Self {
            Self {
                snaps: snaps.into_iter().map(|s| (s.date(), s)).collect(),
            }
        }
    }

    impl SnapshotStore for MemStore {
        fn list_dates(&self) -> Result<BTreeSet<NaiveDate>> {
            Ok(self.snaps.keys().copied().collect())
        }

        fn load(&self, date: NaiveDate) -> Result<Snapshot> {
            self.snaps
                .get(&date)
                .cloned()
                .ok_or(Error::SnapshotMissing(date))
        }
    }
}
