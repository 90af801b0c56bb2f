//! Genius data types.
//!
//! Wire models for the parts of the Genius API responses we read, plus the
//! domain types handed to the rest of the application.

use serde::Deserialize;

/// Envelope wrapping every Genius API response body.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// The payload.
    pub response: T,
}

/// Body of `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Matching songs, most relevant first.
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

/// A single search hit.
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    /// The matched song.
    pub result: SearchResult,
}

/// The song a search hit refers to.
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    /// Artist credited as the song's primary artist.
    pub primary_artist: ArtistRef,
}

/// Minimal artist reference.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRef {
    /// Genius artist ID.
    pub id: u64,
    /// Display name.
    pub name: String,
}

/// Body of `GET /artists/{id}/songs`.
#[derive(Debug, Deserialize)]
pub struct ArtistSongsResponse {
    /// Songs on this page.
    #[serde(default)]
    pub songs: Vec<SongData>,
    /// Next page number, `None` on the last page.
    pub next_page: Option<u32>,
}

/// A song entry in an artist's catalog.
#[derive(Debug, Deserialize)]
pub struct SongData {
    /// Genius song ID.
    pub id: u64,
    /// Song title.
    #[serde(default)]
    pub title: String,
    /// Website path of the lyrics page, e.g. `/Artist-song-lyrics`.
    pub path: String,
    /// Artist credited as the song's primary artist.
    pub primary_artist: ArtistRef,
}

/// An artist that a name query may refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistCandidate {
    /// Genius artist ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Number of search hits crediting this artist.
    pub hits: usize,
}

/// A song whose lyrics can be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRef {
    /// Genius song ID.
    pub id: u64,
    /// Song title.
    pub title: String,
    /// Website path of the lyrics page.
    pub path: String,
}

impl From<SongData> for SongRef {
    fn from(song: SongData) -> Self {
        Self {
            id: song.id,
            title: song.title,
            path: song.path,
        }
    }
}
