mod aggregate;

pub use aggregate::{
    songs_by_artist, songs_by_title_pattern, top_songs_by_decade, top_songs_by_year, unique_songs,
    SongAggregate,
};
