//! Parsing of the external query translator's output.
//!
//! The translator is asked for `intent: X; key: value; ...` but is not
//! guaranteed to comply, so every segment is parsed best-effort: split on
//! the first colon only, and silently skip anything malformed.

use super::intent::{Intent, ParsedQuery, MAX_RESULT_COUNT};

fn parse_count(value: &str) -> Option<usize> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse::<usize>().ok().map(|n| n.min(MAX_RESULT_COUNT))
}

fn parse_year(value: &str) -> Option<i32> {
    if value.len() != 4 || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn clean_name(value: &str) -> Option<String> {
    let cleaned = value.trim_matches(|c| c == '"' || c == '\'').trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Converts the translator's raw output into a [`ParsedQuery`]. Unknown or
/// missing intents, bad years and bad counts all degrade gracefully; this
/// function never fails.
pub fn parse_translator_hint(raw: &str) -> ParsedQuery {
    let mut parsed = ParsedQuery::unknown();

    for segment in raw.trim().split(';') {
        let Some((key, value)) = segment.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        let value = value.trim();

        match key.as_str() {
            "intent" => {
                parsed.intent = match value.to_lowercase().as_str() {
                    "top_songs" => Intent::TopSongs,
                    "top_songs_decade" => Intent::TopSongsDecade,
                    "song_duration" => Intent::SongDuration,
                    "song_duration_with_artist" => Intent::SongDurationWithArtist,
                    _ => Intent::Unknown,
                };
            }
            "year" => parsed.year = parse_year(value),
            "n" => parsed.n = parse_count(value),
            "song" => parsed.song = clean_name(value),
            "artist" => parsed.artist = clean_name(value),
            _ => {}
        }
    }

    parsed
}
