use chrono::NaiveDate;

/// One weekly chart appearance of a song.
///
/// The record set is produced by an upstream cleaning step: song and artist
/// are already trimmed, featured-artist annotations are stripped from the
/// artist, and `year` is derived from `date`. A song recurs across many
/// entries (re-entries, multiple years).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartEntry {
    pub date: NaiveDate,
    /// Chart position for that week, 1 is best.
    pub rank: u32,
    pub song: String,
    pub artist: String,
    /// Position the previous week, None for a new entry.
    pub last_week_rank: Option<u32>,
    /// Best position as recorded in the source data, tracked independently
    /// from the weekly rank.
    pub peak_rank: u32,
    /// Count of weekly appearances so far, not necessarily consecutive.
    pub weeks_on_board: u32,
    pub year: i32,
}
