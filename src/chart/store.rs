use super::ChartEntry;
use anyhow::{bail, Result};
use serde::Serialize;
use std::collections::BTreeSet;

/// Immutable in-memory collection of chart appearances.
///
/// Built once at startup and shared read-only afterwards, so it can be
/// handed out behind an `Arc` without any locking.
#[derive(Debug)]
pub struct ChartStore {
    entries: Vec<ChartEntry>,
    min_year: i32,
    max_year: i32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DatasetStats {
    pub total_records: usize,
    pub unique_songs: usize,
    pub unique_artists: usize,
    pub year_range: (i32, i32),
    pub total_years: usize,
}

impl ChartStore {
    pub fn new(entries: Vec<ChartEntry>) -> Result<ChartStore> {
        if entries.is_empty() {
            bail!("Chart store cannot be built from an empty record set");
        }
        let min_year = entries.iter().map(|e| e.year).min().unwrap();
        let max_year = entries.iter().map(|e| e.year).max().unwrap();
        Ok(ChartStore {
            entries,
            min_year,
            max_year,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    pub fn year_in_range(&self, year: i32) -> bool {
        self.min_year <= year && year <= self.max_year
    }

    pub fn stats(&self) -> DatasetStats {
        let mut songs = BTreeSet::new();
        let mut artists = BTreeSet::new();
        let mut years = BTreeSet::new();
        for entry in &self.entries {
            songs.insert(entry.song.as_str());
            artists.insert(entry.artist.as_str());
            years.insert(entry.year);
        }
        DatasetStats {
            total_records: self.entries.len(),
            unique_songs: songs.len(),
            unique_artists: artists.len(),
            year_range: (self.min_year, self.max_year),
            total_years: years.len(),
        }
    }
}
