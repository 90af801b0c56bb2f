//! Lyric corpus collection.
//!
//! Lists an artist's songs and fetches each song's lyrics, several pages at
//! a time. Results are kept in catalog order regardless of which request
//! finishes first, so the analysis tie-break is reproducible.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use crate::constants::corpus::SONG_SEPARATOR;
use crate::error::Result;
use crate::genius::types::SongRef;
use crate::genius::GeniusClient;

/// Progress events emitted while a corpus is collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// Running total of songs found while paging through the catalog.
    SongsFound(usize),
    /// A lyrics request finished (successfully or not).
    Lyrics {
        /// Requests finished so far.
        done: usize,
        /// Songs to fetch in total.
        total: usize,
    },
    /// A song was left out because its lyrics could not be retrieved.
    Skipped {
        /// Title of the skipped song.
        title: String,
        /// Why it was skipped.
        reason: String,
    },
}

/// Callback receiving progress events.
pub type ProgressFn<'a> = &'a (dyn Fn(Progress) + Send + Sync);

/// A source of song listings and lyric bodies.
#[async_trait]
pub trait LyricSource: Send + Sync {
    /// All songs by the artist, in the order they should be analyzed.
    async fn songs(&self, artist_id: u64, progress: ProgressFn<'_>) -> Result<Vec<SongRef>>;

    /// Lyric text of a single song.
    async fn lyrics(&self, song: &SongRef) -> Result<String>;
}

#[async_trait]
impl LyricSource for GeniusClient {
    async fn songs(&self, artist_id: u64, progress: ProgressFn<'_>) -> Result<Vec<SongRef>> {
        self.songs_for_artist(artist_id, |n| progress(Progress::SongsFound(n))).await
    }

    async fn lyrics(&self, song: &SongRef) -> Result<String> {
        self.fetch_lyrics(song).await
    }
}

/// A song together with its lyric text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongLyrics {
    /// The song.
    pub song: SongRef,
    /// Its lyric text.
    pub lyrics: String,
}

/// Every retrieved lyric body for one artist, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    /// Songs whose lyrics were retrieved.
    pub songs: Vec<SongLyrics>,
}

impl Corpus {
    /// Number of songs with lyrics.
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    /// Whether no lyrics were retrieved.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Lyric bodies in catalog order.
    pub fn bodies(&self) -> Vec<&str> {
        self.songs.iter().map(|s| s.lyrics.as_str()).collect()
    }

    /// All lyric bodies concatenated into one text.
    pub fn raw_text(&self) -> String {
        self.bodies().join(SONG_SEPARATOR)
    }
}

/// Collect the lyrics of every song by `artist_id`.
///
/// At most `concurrency` lyric pages are in flight at once. Songs whose
/// lyrics fail to load are skipped with a warning rather than failing the
/// whole collection.
pub async fn collect_corpus<S>(
    source: &S,
    artist_id: u64,
    concurrency: usize,
    progress: ProgressFn<'_>,
) -> Result<Corpus>
where
    S: LyricSource + ?Sized,
{
    let songs = source.songs(artist_id, progress).await?;
    let total = songs.len();

    let mut fetches = stream::iter(songs)
        .map(|song| async move {
            let result = source.lyrics(&song).await;
            (song, result)
        })
        .buffered(concurrency.max(1));

    let mut corpus = Corpus::default();
    let mut done = 0;

    while let Some((song, result)) = fetches.next().await {
        done += 1;
        match result {
            Ok(lyrics) => corpus.songs.push(SongLyrics { song, lyrics }),
            Err(e) => {
                tracing::warn!("Skipping {:?}: {e}", song.title);
                progress(Progress::Skipped { title: song.title, reason: e.to_string() });
            }
        }
        progress(Progress::Lyrics { done, total });
    }

    tracing::info!("Collected lyrics for {}/{total} songs", corpus.song_count());
    Ok(corpus)
}
