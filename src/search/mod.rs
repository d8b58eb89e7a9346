mod fuzzy;
mod song_match;

pub use fuzzy::{partial_ratio, similarity_ratio};
pub use song_match::{
    find_matches, find_matches_with_threshold, MatchResult, MatchType, DEFAULT_FUZZY_THRESHOLD,
};
