use super::fuzzy::partial_ratio;
use crate::chart::ChartStore;
use crate::query::{unique_songs, SongAggregate};
use std::collections::HashSet;
use tracing::debug;

/// Minimum partial-ratio score for a fuzzy candidate to be considered.
/// Carried over from the original matcher, not re-derived.
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    Exact,
    Contains,
    Fuzzy,
}

/// One candidate song for a duration query, with its best chart statistics
/// and how it was matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub song: String,
    pub artist: String,
    pub weeks_on_chart: u32,
    pub best_rank: u32,
    pub peak_rank: u32,
    pub year: i32,
    pub match_score: u8,
    pub match_type: MatchType,
}

impl MatchResult {
    fn from_aggregate(agg: &SongAggregate, match_score: u8, match_type: MatchType) -> MatchResult {
        MatchResult {
            song: agg.song.clone(),
            artist: agg.artist.clone(),
            weeks_on_chart: agg.weeks_on_chart,
            best_rank: agg.best_rank,
            peak_rank: agg.peak_rank,
            year: agg.first_year,
            match_score,
            match_type,
        }
    }
}

/// Finds songs matching a free-text title query, best candidates first.
///
/// Matching runs in three tiers with strict priority: exact title equality,
/// then substring containment, then fuzzy similarity. A later tier is only
/// consulted while the result set is still short of `max_results`, so an
/// obviously intended match always outranks a similarity-scored guess. The
/// optional artist filter restricts candidates up front by case-insensitive
/// substring on the artist name.
pub fn find_matches(
    store: &ChartStore,
    song_query: &str,
    artist_filter: Option<&str>,
    max_results: usize,
) -> Vec<MatchResult> {
    find_matches_with_threshold(
        store,
        song_query,
        artist_filter,
        max_results,
        DEFAULT_FUZZY_THRESHOLD,
    )
}

pub fn find_matches_with_threshold(
    store: &ChartStore,
    song_query: &str,
    artist_filter: Option<&str>,
    max_results: usize,
    fuzzy_threshold: u8,
) -> Vec<MatchResult> {
    let song_query = song_query.trim();
    if song_query.is_empty() || max_results == 0 {
        return Vec::new();
    }
    let query_lower = song_query.to_lowercase();

    let mut candidates = unique_songs(store);
    if let Some(artist) = artist_filter.map(str::trim).filter(|a| !a.is_empty()) {
        let artist_lower = artist.to_lowercase();
        candidates.retain(|agg| agg.artist.to_lowercase().contains(&artist_lower));
        debug!(
            "Filtered to {} songs by artists matching \"{}\"",
            candidates.len(),
            artist
        );
    }

    let mut matches: Vec<MatchResult> = Vec::new();

    // 1. Exact title match
    for agg in &candidates {
        if agg.song.to_lowercase() == query_lower {
            matches.push(MatchResult::from_aggregate(agg, 100, MatchType::Exact));
        }
    }

    // 2. Title contains the query, excluding exact matches
    if matches.len() < max_results {
        for agg in &candidates {
            if matches.len() >= max_results {
                break;
            }
            let title_lower = agg.song.to_lowercase();
            if title_lower != query_lower && title_lower.contains(&query_lower) {
                matches.push(MatchResult::from_aggregate(agg, 85, MatchType::Contains));
            }
        }
    }

    // 3. Fuzzy similarity over the remaining titles
    if matches.len() < max_results {
        let mut seen_titles: HashSet<String> =
            matches.iter().map(|m| m.song.to_lowercase()).collect();

        let mut fuzzy: Vec<(u8, &SongAggregate)> = Vec::new();
        for agg in &candidates {
            let title_lower = agg.song.to_lowercase();
            if !seen_titles.insert(title_lower.clone()) {
                continue;
            }
            let score = partial_ratio(&query_lower, &title_lower);
            if score >= fuzzy_threshold {
                fuzzy.push((score, agg));
            }
        }

        // Stable sort keeps equal-score candidates in catalog order
        fuzzy.sort_by(|a, b| b.0.cmp(&a.0));
        for (score, agg) in fuzzy {
            if matches.len() >= max_results {
                break;
            }
            matches.push(MatchResult::from_aggregate(agg, score, MatchType::Fuzzy));
        }
    }

    matches.truncate(max_results);
    debug!("Found {} matches for \"{}\"", matches.len(), song_query);
    matches
}
