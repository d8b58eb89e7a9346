//! Answer formatting.
//!
//! Pure functions from query results to display strings using light
//! markdown. Every function returns a non-empty message, including a
//! query-specific suggestion when there is nothing to show.

use crate::query::SongAggregate;
use crate::search::{MatchResult, MatchType};

/// Weeks-on-chart thresholds for the qualitative comment bands, evaluated
/// high to low. Carried over from the original, not re-derived.
pub const WEEKS_INCREDIBLE: u32 = 50;
pub const WEEKS_MAJOR_HIT: u32 = 30;
pub const WEEKS_SOLID: u32 = 15;

/// Numbered list of a year's top songs.
pub fn format_top_songs(songs: &[SongAggregate], year: i32, min_year: i32, max_year: i32) -> String {
    if songs.is_empty() {
        return format!("No songs found for {year}. Try a year between {min_year}\u{2013}{max_year}.");
    }

    let mut out = format!(
        "**Top {} Billboard Hot 100 songs of {}:**\n\n",
        songs.len(),
        year
    );
    let entries: Vec<String> = songs
        .iter()
        .enumerate()
        .map(|(i, song)| {
            format!(
                "**{}. {}** by *{}*\n   - {} weeks on chart\n   - Peaked at #{}",
                i + 1,
                song.song,
                song.artist,
                song.weeks_on_chart,
                song.peak_rank
            )
        })
        .collect();
    out.push_str(&entries.join("\n\n"));
    out
}

/// Numbered list of a decade's top songs, each tagged with its year.
pub fn format_decade_songs(songs: &[SongAggregate], decade_start: i32) -> String {
    if songs.is_empty() {
        return format!("No songs found for the {decade_start}s.");
    }

    let decade_end = decade_start + 9;
    let mut out = format!(
        "**Top {} Billboard Hot 100 songs of the {}s ({}\u{2013}{}):**\n\n",
        songs.len(),
        decade_start,
        decade_start,
        decade_end
    );
    let entries: Vec<String> = songs
        .iter()
        .enumerate()
        .map(|(i, song)| {
            format!(
                "**{}. {}** by *{}* ({})\n   - {} weeks on chart",
                i + 1,
                song.song,
                song.artist,
                song.first_year,
                song.weeks_on_chart
            )
        })
        .collect();
    out.push_str(&entries.join("\n\n"));
    out
}

fn duration_comment(weeks: u32) -> &'static str {
    if weeks >= WEEKS_INCREDIBLE {
        "**Incredible!** This song had amazing staying power on the charts!"
    } else if weeks >= WEEKS_MAJOR_HIT {
        "**Great performance!** This was a major hit."
    } else if weeks >= WEEKS_SOLID {
        "**Solid hit!** Good chart performance."
    } else {
        "**Chart entry** - Brief but notable appearance."
    }
}

fn format_single_match(song: &MatchResult) -> String {
    let mut out = format!(
        "**{}** by *{}* ({})\n\n**Chart Performance:**\n- **{} weeks** on Billboard Hot 100\n- **Best position:** #{}\n",
        song.song, song.artist, song.year, song.weeks_on_chart, song.best_rank
    );

    // The two rank aggregates are tracked independently; the peak line is
    // redundant when they agree.
    if song.peak_rank != song.best_rank {
        out.push_str(&format!("- **Peak rank:** #{}\n", song.peak_rank));
    }

    out.push('\n');
    out.push_str(duration_comment(song.weeks_on_chart));
    out
}

fn match_indicator(song: &MatchResult) -> String {
    match song.match_type {
        MatchType::Exact => " (exact match)".to_string(),
        MatchType::Fuzzy => format!(" ({}% match)", song.match_score),
        MatchType::Contains => String::new(),
    }
}

fn format_multiple_matches(matches: &[MatchResult], original_query: &str) -> String {
    let mut out = format!(
        "Found **{}** songs matching '{}':\n\n",
        matches.len(),
        original_query
    );

    let entries: Vec<String> = matches
        .iter()
        .enumerate()
        .map(|(i, song)| {
            format!(
                "**{}.** {} by *{}* ({}){}\n   {} weeks on chart, peaked at #{}",
                i + 1,
                song.song,
                song.artist,
                song.year,
                match_indicator(song),
                song.weeks_on_chart,
                song.peak_rank
            )
        })
        .collect();
    out.push_str(&entries.join("\n\n"));
    out.push_str("\n\n**Tip:** Try a more specific query like the full song title for better results.");
    out
}

/// Renders a duration lookup: a detailed block for a single match, a brief
/// list for several candidates, or remediation tips for none.
pub fn format_duration_results(matches: &[MatchResult], original_query: &str) -> String {
    match matches {
        [] => format!(
            "Sorry, I couldn't find any songs matching '{original_query}'. Try:\n\
             - Check spelling\n\
             - Use partial song names (e.g., 'Shape' instead of 'Shape of You')\n\
             - Try just the artist name"
        ),
        [single] => format_single_match(single),
        many => format_multiple_matches(many, original_query),
    }
}

/// Usage instructions shown for unrecognized queries.
pub fn help_message(min_year: i32, max_year: i32) -> String {
    format!(
        "**I can help you with Billboard Hot 100 data ({min_year}-{max_year})!**\n\
         \n\
         **Try these formats:**\n\
         - **Top songs by year**: \"Top 10 songs of 1985\" or \"Best 5 hits from 2020\"\n\
         - **Top songs by decade**: \"Best songs from the 80s\" or \"Top hits of 2000s\"\n\
         - **Song duration**: \"How long was Bohemian Rhapsody on the chart?\" or just \"Judy on chart\"\n\
         - **Artist-specific search**: \"How long did Back to Back by Drake stay on the chart?\"\n\
         - **Any year**: Ask about any year from {min_year} to {max_year}!\n\
         \n\
         **Example queries:**\n\
         - \"Show me top 15 songs of 1999\"\n\
         - \"How many weeks was Blinding Lights on the Billboard chart?\"\n\
         - \"Best songs from the 90s\"\n\
         - \"Shape of You duration\"\n\
         - \"How long did Hotline Bling by Drake stay on chart?\""
    )
}
