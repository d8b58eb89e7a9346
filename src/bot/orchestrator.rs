use super::format;
use crate::chart::ChartStore;
use crate::parser::{self, Intent, ParsedQuery};
use crate::query;
use crate::search;
use crate::translator::QueryTranslator;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

const DEFAULT_TOP_SONGS_COUNT: usize = 10;
const DEFAULT_DECADE_COUNT: usize = 20;

/// How many candidate songs a duration lookup shows. The artist-qualified
/// variant is narrower because the artist filter already disambiguates.
const DURATION_MAX_RESULTS: usize = 5;
const DURATION_WITH_ARTIST_MAX_RESULTS: usize = 3;

/// Failure taxonomy of a single query. Every variant maps to a specific
/// user-facing guidance message; only `Internal` falls back to the generic
/// apology. An empty result set is not an error, the formatter covers it.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("Empty query")]
    EmptyQuery,

    #[error("No year in a top-songs query")]
    MissingYear,

    #[error("Year {year} outside dataset range {min_year}-{max_year}")]
    YearOutOfRange {
        year: i32,
        min_year: i32,
        max_year: i32,
    },

    #[error("No decade in a decade query")]
    MissingDecade,

    #[error("No song title in a duration query")]
    MissingSong { with_artist: bool },

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

/// Ties the whole pipeline together: parse, route, aggregate or match,
/// format. One instance serves a whole session; the record store is shared
/// read-only and each query is handled start to finish.
pub struct ChartBot {
    store: Arc<ChartStore>,
    translator: Option<Arc<dyn QueryTranslator>>,
}

impl ChartBot {
    pub fn new(store: Arc<ChartStore>, translator: Option<Arc<dyn QueryTranslator>>) -> ChartBot {
        ChartBot { store, translator }
    }

    pub fn store(&self) -> &ChartStore {
        &self.store
    }

    /// Answers one query. Never fails: every failure mode comes back as a
    /// user-facing message.
    pub async fn respond(&self, query: &str) -> String {
        match self.try_respond(query).await {
            Ok(answer) => answer,
            Err(err) => self.failure_message(err),
        }
    }

    async fn try_respond(&self, query: &str) -> Result<String, BotError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(BotError::EmptyQuery);
        }

        let mut parsed = parser::parse(query);
        debug!(?parsed.intent, "Parsed query");

        if parsed.intent == Intent::Unknown {
            if let Some(translator) = &self.translator {
                parsed = self.translate_fallback(translator.as_ref(), query).await;
            }
        }

        match parsed.intent {
            Intent::TopSongs => self.answer_top_songs(&parsed),
            Intent::TopSongsDecade => self.answer_decade(&parsed),
            Intent::SongDurationWithArtist => self.answer_duration_with_artist(&parsed),
            Intent::SongDuration => self.answer_duration(&parsed),
            Intent::Unknown => Ok(format::help_message(
                self.store.min_year(),
                self.store.max_year(),
            )),
        }
    }

    /// Single attempt against the external translator; any failure degrades
    /// to an unknown intent instead of propagating.
    async fn translate_fallback(
        &self,
        translator: &dyn QueryTranslator,
        query: &str,
    ) -> ParsedQuery {
        match translator.translate(query).await {
            Ok(raw) => {
                debug!(%raw, "Translator output");
                parser::parse_translator_hint(&raw)
            }
            Err(err) => {
                warn!("Query translator {} failed: {err}", translator.name());
                ParsedQuery::unknown()
            }
        }
    }

    fn answer_top_songs(&self, parsed: &ParsedQuery) -> Result<String, BotError> {
        let year = parsed.year.ok_or(BotError::MissingYear)?;
        if !self.store.year_in_range(year) {
            return Err(BotError::YearOutOfRange {
                year,
                min_year: self.store.min_year(),
                max_year: self.store.max_year(),
            });
        }

        let n = parsed.n.unwrap_or(DEFAULT_TOP_SONGS_COUNT);
        let songs = query::top_songs_by_year(&self.store, year, n);
        Ok(format::format_top_songs(
            &songs,
            year,
            self.store.min_year(),
            self.store.max_year(),
        ))
    }

    fn answer_decade(&self, parsed: &ParsedQuery) -> Result<String, BotError> {
        let decade_start = parsed.decade_start.ok_or(BotError::MissingDecade)?;
        let n = parsed.n.unwrap_or(DEFAULT_DECADE_COUNT);
        let songs = query::top_songs_by_decade(&self.store, decade_start, n);
        Ok(format::format_decade_songs(&songs, decade_start))
    }

    fn answer_duration_with_artist(&self, parsed: &ParsedQuery) -> Result<String, BotError> {
        let song = parsed
            .song
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(BotError::MissingSong { with_artist: true })?;
        let artist = parsed.artist.as_deref();

        let matches = search::find_matches(
            &self.store,
            song,
            artist,
            DURATION_WITH_ARTIST_MAX_RESULTS,
        );
        let original_query = match artist {
            Some(artist) => format!("{song} by {artist}"),
            None => song.to_string(),
        };
        Ok(format::format_duration_results(&matches, &original_query))
    }

    fn answer_duration(&self, parsed: &ParsedQuery) -> Result<String, BotError> {
        let song = parsed
            .song
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(BotError::MissingSong { with_artist: false })?;

        let matches = search::find_matches(&self.store, song, None, DURATION_MAX_RESULTS);
        Ok(format::format_duration_results(&matches, song))
    }

    /// The one place where the failure taxonomy turns into user-facing text.
    fn failure_message(&self, err: BotError) -> String {
        let (min_year, max_year) = (self.store.min_year(), self.store.max_year());
        match err {
            BotError::EmptyQuery => "Please enter a valid text query.".to_string(),
            BotError::MissingYear => format!(
                "Please specify a valid year between {min_year}-{max_year} (e.g., 'Top 5 songs of 2012')."
            ),
            BotError::YearOutOfRange { year, min_year, max_year } => format!(
                "Sorry, I only have data from {min_year}-{max_year}. Year {year} is outside this range."
            ),
            BotError::MissingDecade => {
                "Please specify a valid decade (e.g., 'Best songs from the 80s').".to_string()
            }
            BotError::MissingSong { with_artist: true } => {
                "Please specify a song name (e.g., 'How long was Thriller by Michael Jackson on the chart?').".to_string()
            }
            BotError::MissingSong { with_artist: false } => {
                "Please specify a song name (e.g., 'How long was Thriller on the chart?').".to_string()
            }
            BotError::Internal(err) => format!(
                "Something went wrong. Please try a different query. (Error: {err})"
            ),
        }
    }
}
