// src/snapshot.rs
//
// One day's captured highscore table: player name → experience, in the
// order the site listed them. Names are stored case-sensitively; lookups
// here are exact. Case-insensitive search lives in history, not here.

use std::collections::HashMap;

use chrono::NaiveDate;

#[derive(Clone, Debug)]
pub struct Snapshot {
    date: NaiveDate,
    rows: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl Snapshot {
    /// Build from scraped or loaded rows. Names are trimmed; a repeated
    /// name keeps its first occurrence (the store promises uniqueness, so
    /// anything after the first is upstream junk). Blank names are dropped.
    pub fn new(date: NaiveDate, rows: Vec<(String, u64)>) -> Self {
        let mut kept: Vec<(String, u64)> = Vec::with_capacity(rows.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(rows.len());

        for (name, experience) in rows {
            let name = name.trim();
            if name.is_empty() { continue; }
            if index.contains_key(name) { continue; }
            index.insert(s!(name), kept.len());
            kept.push((s!(name), experience));
        }

        Self { date, rows: kept, index }
    }

    pub fn date(&self) -> NaiveDate { self.date }

    pub fn rows(&self) -> &[(String, u64)] { &self.rows }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Exact-name lookup (stored form).
    pub fn get(&self, name: &str) -> Option<u64> {
        self.index.get(name).map(|&ix| self.rows[ix].1)
    }

    /// Row position of an exact name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// 1-based rank per row, descending experience. Ties keep row order
    /// (stable sort), so repeated runs over the same file agree.
    pub fn ranks(&self) -> Vec<u32> {
        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        order.sort_by(|&a, &b| self.rows[b].1.cmp(&self.rows[a].1));

        let mut ranks = vec![0u32; self.rows.len()];
        for (i, &ix) in order.iter().enumerate() {
            ranks[ix] = i as u32 + 1;
        }
        ranks
    }

    /// Name → rank for the whole snapshot.
    pub fn rank_map(&self) -> HashMap<&str, u32> {
        let ranks = self.ranks();
        self.rows
            .iter()
            .enumerate()
            .map(|(ix, (name, _))| (name.as_str(), ranks[ix]))
            .collect()
    }
}
