use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::Config;
use crate::constants::genius::{API_BASE_URL, SONG_SORT, WEB_BASE_URL};
use crate::error::{Error, Result};
use crate::genius::scrape::extract_lyrics;
use crate::genius::types::*;
use crate::services::disambiguation::rank_candidates;

/// Client for the Genius API and lyric pages
///
/// API calls authenticate with a bearer token; lyric pages are public HTML.
#[derive(Clone)]
pub struct GeniusClient {
    token: String,
    per_page: u32,
    max_songs: Option<usize>,
    client: Client,
}

impl GeniusClient {
    /// Create a new Genius client from config
    pub fn new(config: &Config) -> Self {
        Self {
            token: config.genius_access_token.clone(),
            per_page: config.per_page,
            max_songs: config.max_songs,
            client: Client::builder()
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Check if credentials are configured
    fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }

    fn ensure_configured(&self) -> Result<()> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(Error::config(
                "Genius client not configured",
                "Set the GENIUS_ACCESS_TOKEN environment variable",
            ))
        }
    }

    /// Make an authenticated GET request to the API and unwrap the response envelope
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{API_BASE_URL}{path}");
        let resp = self.client
            .get(&url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {path} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::genius_status(
                format!("Request to {path} returned {status}"),
                status.as_u16(),
            ));
        }

        let envelope: Envelope<T> = resp.json().await
            .map_err(|e| Error::parse(format!("Invalid JSON: {e}"), Some(url)))?;
        Ok(envelope.response)
    }

    /// Search for artists matching a free-text query
    ///
    /// Candidates are ranked by how many hits credit them as primary artist.
    pub async fn search_artists(&self, query: &str) -> Result<Vec<ArtistCandidate>> {
        self.ensure_configured()?;

        let search: SearchResponse = self.get("/search", &[("q", query.to_string())]).await?;
        tracing::debug!("Search for {query:?} returned {} hits", search.hits.len());

        Ok(rank_candidates(search.hits.iter().map(|h| &h.result.primary_artist)))
    }

    /// List every song on which `artist_id` is the primary artist
    ///
    /// Pages through the catalog by popularity until the API reports no next
    /// page (or the configured song cap is reached), calling `on_page` with
    /// the running total after each page.
    pub async fn songs_for_artist<F>(&self, artist_id: u64, mut on_page: F) -> Result<Vec<SongRef>>
    where
        F: FnMut(usize) + Send,
    {
        self.ensure_configured()?;

        let path = format!("/artists/{artist_id}/songs");
        let mut songs: Vec<SongRef> = Vec::new();
        let mut page: u32 = 1;

        loop {
            let resp: ArtistSongsResponse = self.get(&path, &[
                ("page", page.to_string()),
                ("sort", SONG_SORT.to_string()),
                ("per_page", self.per_page.to_string()),
            ]).await?;

            let next = absorb_page(&mut songs, resp, artist_id, self.max_songs, page);
            on_page(songs.len());
            match next {
                Some(next) => page = next,
                None => break,
            }
        }

        tracing::info!("Found {} songs for artist {artist_id}", songs.len());
        Ok(songs)
    }

    /// Fetch a song's lyrics page and extract its lyric text
    pub async fn fetch_lyrics(&self, song: &SongRef) -> Result<String> {
        let url = format!("{WEB_BASE_URL}{}", song.path);
        let resp = self.client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {url} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(page_error(&url, status.as_u16()));
        }

        let html = resp.text().await
            .map_err(|e| Error::Network(format!("Reading {url} failed: {e}")))?;

        extract_lyrics(&html)
            .ok_or_else(|| Error::NotFound(format!("no lyrics container on {url}")))
    }
}

/// Add one catalog page to `songs` and decide which page comes next.
///
/// Only songs whose primary artist is `artist_id` are kept; features and
/// guest verses list the song under this artist too. Returns `None` once the
/// song cap is reached, on the last page, or when the API fails to advance.
fn absorb_page(
    songs: &mut Vec<SongRef>,
    page: ArtistSongsResponse,
    artist_id: u64,
    cap: Option<usize>,
    current: u32,
) -> Option<u32> {
    songs.extend(
        page.songs.into_iter()
            .filter(|s| s.primary_artist.id == artist_id)
            .map(SongRef::from),
    );

    if let Some(cap) = cap {
        if songs.len() >= cap {
            songs.truncate(cap);
            return None;
        }
    }

    match page.next_page {
        Some(next) if next > current => Some(next),
        Some(next) => {
            tracing::warn!("Genius returned non-advancing next_page {next} after page {current}");
            None
        }
        None => None,
    }
}

/// Error for a lyrics page that did not load. Pages are fetched without the
/// access token, so token hints do not apply.
fn page_error(url: &str, status: u16) -> Error {
    Error::Genius {
        message: format!("Lyrics page {url} returned HTTP {status}"),
        status: Some(status),
        hint: None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[tokio::test]
    async fn unconfigured_client_refuses_api_calls() {
        let client = GeniusClient::new(&Config::default());
        let err = client.search_artists("anyone").await.unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let err = client.songs_for_artist(1, |_| {}).await.unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    fn catalog_page(json: &str) -> ArtistSongsResponse {
        let env: Envelope<ArtistSongsResponse> = serde_json::from_str(json).unwrap();
        env.response
    }

    const PAGE_ONE: &str = r#"{"response": {"songs": [
        {"id": 1, "title": "Own Song", "path": "/Band-own-song-lyrics", "primary_artist": {"id": 7, "name": "Band"}},
        {"id": 2, "title": "Guest Verse", "path": "/Other-guest-verse-lyrics", "primary_artist": {"id": 9, "name": "Other"}},
        {"id": 3, "title": "Second Song", "path": "/Band-second-song-lyrics", "primary_artist": {"id": 7, "name": "Band"}}
    ], "next_page": 2}}"#;

    #[test]
    fn keeps_only_primary_artist_songs() {
        let mut songs = Vec::new();
        let next = absorb_page(&mut songs, catalog_page(PAGE_ONE), 7, None, 1);
        assert_eq!(next, Some(2));
        let ids: Vec<u64> = songs.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn song_cap_truncates_and_stops() {
        let mut songs = Vec::new();
        let next = absorb_page(&mut songs, catalog_page(PAGE_ONE), 7, Some(1), 1);
        assert_eq!(next, None);
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].title, "Own Song");
    }

    #[test]
    fn last_page_stops() {
        let page = catalog_page(r#"{"response": {"songs": [
            {"id": 4, "title": "Closer", "path": "/Band-closer-lyrics", "primary_artist": {"id": 7, "name": "Band"}}
        ], "next_page": null}}"#);
        let mut songs = Vec::new();
        assert_eq!(absorb_page(&mut songs, page, 7, Some(10), 3), None);
        assert_eq!(songs.len(), 1);
    }

    #[test]
    fn non_advancing_next_page_stops() {
        let stuck = r#"{"response": {"songs": [], "next_page": 2}}"#;
        let mut songs = Vec::new();
        assert_eq!(absorb_page(&mut songs, catalog_page(stuck), 7, None, 2), None);
        assert_eq!(absorb_page(&mut songs, catalog_page(stuck), 7, None, 5), None);
        assert!(songs.is_empty());
    }

    #[test]
    fn lyrics_page_errors_carry_no_token_hint() {
        let err = page_error("https://genius.com/Band-own-song-lyrics", 403);
        assert!(matches!(err, Error::Genius { status: Some(403), hint: None, .. }));
        assert!(!err.to_string().contains("GENIUS_ACCESS_TOKEN"));
    }
}
