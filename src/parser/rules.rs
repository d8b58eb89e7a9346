//! Rule-cascade intent parser.
//!
//! Queries are matched against an ordered list of (pattern, constructor)
//! rules; the first rule whose pattern matches and whose constructor accepts
//! the captures wins. Artist-qualified duration patterns come before the
//! generic duration patterns so the artist name is not swallowed into the
//! song field, and the year patterns come before the broader decade ones.

use super::intent::{Intent, ParsedQuery, MAX_RESULT_COUNT};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Filler words stripped from captured song titles in duration queries.
const DURATION_STOP_WORDS: &[&str] = &["the", "on", "chart", "billboard", "hot", "100", "was", "did"];

/// Filler words stripped from both sides of a "song by artist" capture.
const ARTIST_QUERY_STOP_WORDS: &[&str] = &[
    "the", "on", "chart", "billboard", "hot", "100", "was", "did", "stay", "long",
];

/// Removes stop words as whole tokens, case-insensitive, and collapses the
/// remaining whitespace. Idempotent: stripping twice changes nothing.
pub fn strip_stop_words(text: &str, stop_words: &[&str]) -> String {
    text.split_whitespace()
        .filter(|token| !stop_words.iter().any(|w| token.eq_ignore_ascii_case(w)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Maps a decade token to its starting year. Two-digit tokens pivot at 50
/// ("80s" is the 1980s, "10s" the 2010s); four-digit tokens pass through.
pub fn resolve_decade_token(token: &str) -> Option<i32> {
    let value: i32 = token.parse().ok()?;
    if token.len() == 2 {
        if value >= 50 {
            Some(1900 + value)
        } else {
            Some(2000 + value)
        }
    } else {
        Some(value)
    }
}

struct Rule {
    pattern: Regex,
    build: fn(&Captures) -> Option<ParsedQuery>,
}

impl Rule {
    fn new(pattern: &str, build: fn(&Captures) -> Option<ParsedQuery>) -> Rule {
        Rule {
            pattern: Regex::new(pattern).expect("Invalid parser rule pattern"),
            build,
        }
    }
}

fn build_top_songs_n(captures: &Captures) -> Option<ParsedQuery> {
    let n: usize = captures.get(1)?.as_str().parse().ok()?;
    let year: i32 = captures.get(2)?.as_str().parse().ok()?;
    Some(ParsedQuery {
        intent: Intent::TopSongs,
        year: Some(year),
        n: Some(n.min(MAX_RESULT_COUNT)),
        ..ParsedQuery::unknown()
    })
}

fn build_top_songs_default(captures: &Captures) -> Option<ParsedQuery> {
    let year: i32 = captures.get(1)?.as_str().parse().ok()?;
    Some(ParsedQuery {
        intent: Intent::TopSongs,
        year: Some(year),
        n: Some(10),
        ..ParsedQuery::unknown()
    })
}

fn build_decade(captures: &Captures) -> Option<ParsedQuery> {
    let decade_start = resolve_decade_token(captures.get(1)?.as_str())?;
    Some(ParsedQuery {
        intent: Intent::TopSongsDecade,
        decade_start: Some(decade_start),
        n: Some(20),
        ..ParsedQuery::unknown()
    })
}

fn build_duration_with_artist(captures: &Captures) -> Option<ParsedQuery> {
    let song = strip_stop_words(captures.get(1)?.as_str(), ARTIST_QUERY_STOP_WORDS);
    let artist = strip_stop_words(captures.get(2)?.as_str(), ARTIST_QUERY_STOP_WORDS);
    if song.is_empty() || artist.is_empty() {
        return None;
    }
    Some(ParsedQuery {
        intent: Intent::SongDurationWithArtist,
        song: Some(song),
        artist: Some(artist),
        ..ParsedQuery::unknown()
    })
}

fn build_duration(captures: &Captures) -> Option<ParsedQuery> {
    let song = strip_stop_words(captures.get(1)?.as_str(), DURATION_STOP_WORDS);
    if song.is_empty() {
        return None;
    }
    Some(ParsedQuery {
        intent: Intent::SongDuration,
        song: Some(song),
        ..ParsedQuery::unknown()
    })
}

lazy_static! {
    static ref RULES: Vec<Rule> = vec![
        // Top N songs of a specific year
        Rule::new(r"top\s+(\d+)\s+songs?\s+(?:of|from|in)\s+(\d{4})", build_top_songs_n),
        Rule::new(
            r"best\s+(\d+)\s+(?:songs?|hits?)\s+(?:of|from|in)\s+(\d{4})",
            build_top_songs_n
        ),
        Rule::new(
            r"(\d+)\s+(?:top|best)\s+songs?\s+(?:of|from|in)\s+(\d{4})",
            build_top_songs_n
        ),
        Rule::new(
            r"show\s+me\s+(?:top\s+)?(\d+)\s+songs?\s+(?:of|from|in)\s+(\d{4})",
            build_top_songs_n
        ),
        // Top songs of a year without a count
        Rule::new(r"top\s+songs?\s+(?:of|from|in)\s+(\d{4})", build_top_songs_default),
        Rule::new(
            r"best\s+(?:songs?|hits?)\s+(?:of|from|in)\s+(\d{4})",
            build_top_songs_default
        ),
        Rule::new(
            r"popular\s+songs?\s+(?:of|from|in)\s+(\d{4})",
            build_top_songs_default
        ),
        // Decade queries
        Rule::new(
            r"(?:top|best)\s+(?:songs?|hits?)\s+(?:of|from)\s+the\s+(\d{2})s",
            build_decade
        ),
        Rule::new(
            r"(?:top|best)\s+(?:songs?|hits?)\s+(?:of|from)\s+(\d{4})s",
            build_decade
        ),
        Rule::new(r"best\s+of\s+(?:the\s+)?(\d{2})s", build_decade),
        Rule::new(r"best\s+of\s+(\d{4})s", build_decade),
        // Duration queries naming an artist
        Rule::new(
            r"how long (?:was|did) (.+?) by (.+?) (?:stay|on|chart|last)",
            build_duration_with_artist
        ),
        Rule::new(
            r"how many weeks (?:was|did) (.+?) by (.+?) (?:on|stay|chart)",
            build_duration_with_artist
        ),
        Rule::new(
            r"(.+?) by (.+?) (?:duration|weeks|chart time)(?:\?|$)",
            build_duration_with_artist
        ),
        Rule::new(
            r"duration (?:of|for) (.+?) by (.+?)(?:\?|$|on)",
            build_duration_with_artist
        ),
        Rule::new(r"(.+?) by (.+?) on (?:the )?chart(?:\?|$)", build_duration_with_artist),
        // Duration queries without an artist
        Rule::new(r"how long (?:was|did) (.+?) (?:stay|on|chart|last)", build_duration),
        Rule::new(r"how many weeks (?:was|did) (.+?) (?:on|stay|chart)", build_duration),
        Rule::new(r"duration (?:of|for) (.+?)(?:\?|$|on)", build_duration),
        Rule::new(r"weeks (?:for|of) (.+?)(?:\?|$|on)", build_duration),
        Rule::new(r"(.+?) (?:duration|weeks|chart time)(?:\?|$)", build_duration),
        Rule::new(r"chart time (?:for|of) (.+?)(?:\?|$)", build_duration),
        Rule::new(r"how long (.+?)(?:\?|$)", build_duration),
        Rule::new(r"(.+?) on (?:the )?chart(?:\?|$)", build_duration),
        Rule::new(r"(.+?) billboard(?:\?|$)", build_duration),
    ];
}

/// Classifies a free-text query. Never fails: queries no rule accepts come
/// back with [`Intent::Unknown`].
pub fn parse(query: &str) -> ParsedQuery {
    let query_lower = query.trim().to_lowercase();
    for rule in RULES.iter() {
        if let Some(captures) = rule.pattern.captures(&query_lower) {
            if let Some(parsed) = (rule.build)(&captures) {
                return parsed;
            }
        }
    }
    ParsedQuery::unknown()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_top_n_songs_of_year() {
        let parsed = parse("Top 3 songs of 2020");
        assert_eq!(parsed.intent, Intent::TopSongs);
        assert_eq!(parsed.year, Some(2020));
        assert_eq!(parsed.n, Some(3));
    }

    #[test]
    fn parses_top_n_phrasings() {
        for query in [
            "best 5 hits from 1985",
            "5 top songs of 1985",
            "show me 5 songs from 1985",
            "show me top 5 songs of 1985",
        ] {
            let parsed = parse(query);
            assert_eq!(parsed.intent, Intent::TopSongs, "query: {query}");
            assert_eq!(parsed.year, Some(1985), "query: {query}");
            assert_eq!(parsed.n, Some(5), "query: {query}");
        }
    }

    #[test]
    fn top_songs_without_count_defaults_to_ten() {
        for query in [
            "top songs of 1999",
            "best hits from 1999",
            "popular songs in 1999",
        ] {
            let parsed = parse(query);
            assert_eq!(parsed.intent, Intent::TopSongs, "query: {query}");
            assert_eq!(parsed.n, Some(10), "query: {query}");
        }
    }

    #[test]
    fn requested_count_is_capped() {
        let parsed = parse("Top 500 songs of 2020");
        assert_eq!(parsed.n, Some(MAX_RESULT_COUNT));
    }

    #[test]
    fn parses_decade_queries() {
        let parsed = parse("Best songs from the 80s");
        assert_eq!(parsed.intent, Intent::TopSongsDecade);
        assert_eq!(parsed.decade_start, Some(1980));
        assert_eq!(parsed.n, Some(20));

        let parsed = parse("top hits from 2000s");
        assert_eq!(parsed.decade_start, Some(2000));

        let parsed = parse("best of the 90s");
        assert_eq!(parsed.decade_start, Some(1990));
    }

    #[test]
    fn decade_token_mapping() {
        assert_eq!(resolve_decade_token("80"), Some(1980));
        assert_eq!(resolve_decade_token("50"), Some(1950));
        assert_eq!(resolve_decade_token("00"), Some(2000));
        assert_eq!(resolve_decade_token("10"), Some(2010));
        assert_eq!(resolve_decade_token("2000"), Some(2000));
        assert_eq!(resolve_decade_token("x"), None);
    }

    #[test]
    fn parses_duration_with_artist() {
        let parsed = parse("How long did Hotline Bling by Drake stay on the chart?");
        assert_eq!(parsed.intent, Intent::SongDurationWithArtist);
        assert_eq!(parsed.song.as_deref(), Some("hotline bling"));
        assert_eq!(parsed.artist.as_deref(), Some("drake"));
    }

    #[test]
    fn parses_duration_with_artist_phrasings() {
        for query in [
            "how many weeks was God's Plan by Drake on chart",
            "God's Plan by Drake duration",
            "duration of God's Plan by Drake",
            "God's Plan by Drake on the chart",
        ] {
            let parsed = parse(query);
            assert_eq!(
                parsed.intent,
                Intent::SongDurationWithArtist,
                "query: {query}"
            );
            assert_eq!(parsed.song.as_deref(), Some("god's plan"), "query: {query}");
            assert_eq!(parsed.artist.as_deref(), Some("drake"), "query: {query}");
        }
    }

    #[test]
    fn parses_plain_duration_queries() {
        let parsed = parse("How long was Shape of You on the chart?");
        assert_eq!(parsed.intent, Intent::SongDuration);
        assert_eq!(parsed.song.as_deref(), Some("shape of you"));
        assert!(parsed.artist.is_none());

        let parsed = parse("Shape of You duration");
        assert_eq!(parsed.intent, Intent::SongDuration);
        assert_eq!(parsed.song.as_deref(), Some("shape of you"));

        let parsed = parse("Judy on chart");
        assert_eq!(parsed.intent, Intent::SongDuration);
        assert_eq!(parsed.song.as_deref(), Some("judy"));
    }

    #[test]
    fn artist_qualified_patterns_win_over_generic_duration() {
        // Without the ordering, "how long was X ..." would capture
        // "blinding lights by the weeknd" as the song title.
        let parsed = parse("How long was Blinding Lights by The Weeknd on the chart?");
        assert_eq!(parsed.intent, Intent::SongDurationWithArtist);
        assert_eq!(parsed.song.as_deref(), Some("blinding lights"));
        assert_eq!(parsed.artist.as_deref(), Some("weeknd"));
    }

    #[test]
    fn stop_words_are_stripped_whole_word() {
        let stripped = strip_stop_words("the shape of you on the chart", DURATION_STOP_WORDS);
        assert_eq!(stripped, "shape of you");

        // "theory" must not lose its "the" prefix
        let stripped = strip_stop_words("theory of everything", DURATION_STOP_WORDS);
        assert_eq!(stripped, "theory of everything");
    }

    #[test]
    fn stop_word_stripping_is_idempotent() {
        let once = strip_stop_words("the chart billboard song was here", DURATION_STOP_WORDS);
        let twice = strip_stop_words(&once, DURATION_STOP_WORDS);
        assert_eq!(once, twice);
    }

    #[test]
    fn capture_emptied_by_stripping_discards_the_match() {
        // "chart" by "billboard" strips to nothing on both sides, so the
        // artist rule must not claim this query.
        let parsed = parse("how long was chart by billboard on chart");
        assert_ne!(parsed.intent, Intent::SongDurationWithArtist);
    }

    #[test]
    fn no_rule_matches_yields_unknown() {
        let parsed = parse("asdkjaskjd");
        assert_eq!(parsed.intent, Intent::Unknown);
        assert!(parsed.song.is_none());

        assert_eq!(parse("").intent, Intent::Unknown);
    }
}
