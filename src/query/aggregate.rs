//! Per-song aggregations over the chart store.
//!
//! Every operation here follows the same shape: filter the entries by a
//! predicate, group by (song, artist), reduce each group to its best chart
//! performance, sort by best rank and truncate.

use crate::chart::{ChartEntry, ChartStore};
use anyhow::{Context, Result};
use regex::RegexBuilder;
use std::collections::BTreeMap;

/// Best chart performance of one (song, artist) pair over a set of entries.
///
/// `best_rank` and `peak_rank` are reduced independently, mirroring the two
/// separate columns in the source data. They usually agree but are not
/// required to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongAggregate {
    pub song: String,
    pub artist: String,
    /// Lowest weekly rank observed, lower is better.
    pub best_rank: u32,
    /// Lowest recorded peak-rank value.
    pub peak_rank: u32,
    /// Highest weeks-on-board count, covers re-entries.
    pub weeks_on_chart: u32,
    /// Year of the first grouped entry.
    pub first_year: i32,
}

/// Groups entries by (song, artist) and reduces each group to a
/// [`SongAggregate`]. The ordered map keeps tie-breaking deterministic:
/// aggregates with equal best rank come out lexicographically.
fn group_best_performance<'a, I>(entries: I) -> Vec<SongAggregate>
where
    I: Iterator<Item = &'a ChartEntry>,
{
    let mut groups: BTreeMap<(String, String), SongAggregate> = BTreeMap::new();

    for entry in entries {
        let key = (entry.song.clone(), entry.artist.clone());
        groups
            .entry(key)
            .and_modify(|agg| {
                agg.best_rank = agg.best_rank.min(entry.rank);
                agg.peak_rank = agg.peak_rank.min(entry.peak_rank);
                agg.weeks_on_chart = agg.weeks_on_chart.max(entry.weeks_on_board);
            })
            .or_insert_with(|| SongAggregate {
                song: entry.song.clone(),
                artist: entry.artist.clone(),
                best_rank: entry.rank,
                peak_rank: entry.peak_rank,
                weeks_on_chart: entry.weeks_on_board,
                first_year: entry.year,
            });
    }

    groups.into_values().collect()
}

fn top_by_rank(mut aggregates: Vec<SongAggregate>, n: usize) -> Vec<SongAggregate> {
    aggregates.sort_by_key(|agg| agg.best_rank);
    aggregates.truncate(n);
    aggregates
}

/// Every distinct (song, artist) pair in the store with its best chart
/// performance, in lexicographic key order. This is the candidate catalog
/// the song match engine searches over.
pub fn unique_songs(store: &ChartStore) -> Vec<SongAggregate> {
    group_best_performance(store.iter())
}

/// Top `n` songs of a single year, ordered by best rank achieved.
pub fn top_songs_by_year(store: &ChartStore, year: i32, n: usize) -> Vec<SongAggregate> {
    let aggregates = group_best_performance(store.iter().filter(|e| e.year == year));
    top_by_rank(aggregates, n)
}

/// Top `n` songs across a ten-year span starting at `decade_start`.
pub fn top_songs_by_decade(store: &ChartStore, decade_start: i32, n: usize) -> Vec<SongAggregate> {
    let decade_end = decade_start + 9;
    let aggregates = group_best_performance(
        store
            .iter()
            .filter(|e| e.year >= decade_start && e.year <= decade_end),
    );
    top_by_rank(aggregates, n)
}

/// Songs whose artist contains `artist_name`, case-insensitive.
pub fn songs_by_artist(store: &ChartStore, artist_name: &str, limit: usize) -> Vec<SongAggregate> {
    let needle = artist_name.to_lowercase();
    let aggregates =
        group_best_performance(store.iter().filter(|e| e.artist.to_lowercase().contains(&needle)));
    top_by_rank(aggregates, limit)
}

/// Songs whose title matches `pattern` as a case-insensitive regex.
/// Useful for queries like songs with "love" in the title.
pub fn songs_by_title_pattern(
    store: &ChartStore,
    pattern: &str,
    limit: usize,
) -> Result<Vec<SongAggregate>> {
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .with_context(|| format!("Invalid title pattern \"{pattern}\""))?;
    let aggregates = group_best_performance(store.iter().filter(|e| regex.is_match(&e.song)));
    Ok(top_by_rank(aggregates, limit))
}
