//! Tiny chart dataset used by the e2e tests.

use chartbot_server::chart::ChartEntry;
use chrono::NaiveDate;

pub const FIXTURE_MIN_YEAR: i32 = 1982;
pub const FIXTURE_MAX_YEAR: i32 = 2020;

fn entry(
    song: &str,
    artist: &str,
    year: i32,
    rank: u32,
    peak: u32,
    weeks: u32,
) -> ChartEntry {
    ChartEntry {
        date: NaiveDate::from_ymd_opt(year, 5, 5).unwrap(),
        rank,
        song: song.to_string(),
        artist: artist.to_string(),
        last_week_rank: None,
        peak_rank: peak,
        weeks_on_board: weeks,
        year,
    }
}

/// Nine records over five songs: enough for year, decade and duration
/// queries without being a real dataset.
pub fn fixture_entries() -> Vec<ChartEntry> {
    vec![
        entry("Blinding Lights", "The Weeknd", 2020, 3, 3, 10),
        entry("Blinding Lights", "The Weeknd", 2020, 1, 1, 57),
        entry("Circles", "Post Malone", 2020, 2, 1, 39),
        entry("Watermelon Sugar", "Harry Styles", 2020, 8, 7, 22),
        entry("Shape of You", "Ed Sheeran", 2017, 1, 1, 77),
        entry("Take On Me", "a-ha", 1985, 2, 1, 27),
        entry("Take On Me", "a-ha", 1985, 1, 1, 20),
        entry("Africa", "Toto", 1982, 1, 1, 25),
        entry("Hotline Bling", "Drake", 2015, 2, 2, 35),
    ]
}
