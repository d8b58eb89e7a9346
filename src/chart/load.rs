//! Chart dataset loading

use super::{ChartEntry, ChartStore};
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

const REQUIRED_COLUMNS: [&str; 8] = [
    "date",
    "rank",
    "song",
    "artist",
    "last-week",
    "peak-rank",
    "weeks-on-board",
    "year",
];

/// One row of the cleaned dataset as it sits on disk. Cleaning (date
/// coercion, featured-artist stripping, deduplication) happens upstream;
/// this loader only validates and converts.
#[derive(Debug, Deserialize)]
struct RawRecord {
    date: String,
    rank: u32,
    song: String,
    artist: String,
    #[serde(rename = "last-week")]
    last_week: Option<u32>,
    #[serde(rename = "peak-rank")]
    peak_rank: u32,
    #[serde(rename = "weeks-on-board")]
    weeks_on_board: u32,
    year: i32,
}

fn convert_record(raw: RawRecord) -> Result<Option<ChartEntry>> {
    let song = raw.song.trim().to_string();
    let artist = raw.artist.trim().to_string();
    if song.is_empty() || artist.is_empty() {
        return Ok(None);
    }

    let date = NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date value \"{}\"", raw.date))?;

    // The cleaning step fills missing last-week values with 0.
    let last_week_rank = raw.last_week.filter(|&w| w > 0);

    Ok(Some(ChartEntry {
        date,
        rank: raw.rank,
        song,
        artist,
        last_week_rank,
        peak_rank: raw.peak_rank,
        weeks_on_board: raw.weeks_on_board,
        year: raw.year,
    }))
}

/// Loads the cleaned chart dataset from a CSV file into a [`ChartStore`].
///
/// Fails on a missing file, missing required columns, or unparseable rows.
/// Rows without a song or artist are skipped with a warning rather than
/// failing the whole load.
pub fn load_chart_data<P: AsRef<Path>>(path: P) -> Result<ChartStore> {
    let path = path.as_ref();
    if !path.is_file() {
        bail!("Dataset not found at {}", path.display());
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Could not open dataset at {}", path.display()))?;

    let headers = reader
        .headers()
        .context("Could not read dataset headers")?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            bail!("Missing required column: {column}");
        }
    }

    let mut entries = Vec::new();
    let mut skipped = 0usize;
    for (index, record) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = record.with_context(|| format!("Could not parse row {}", index + 1))?;
        match convert_record(raw)? {
            Some(entry) => entries.push(entry),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("Skipped {skipped} rows with missing song or artist");
    }

    let store = ChartStore::new(entries)?;
    info!(
        "Loaded {} records from chart dataset ({}-{})",
        store.len(),
        store.min_year(),
        store.max_year()
    );
    Ok(store)
}
