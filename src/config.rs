//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::str::FromStr;

use crate::constants;
use crate::error::Result;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// `Genius` API client access token
    pub genius_access_token: String,
    /// Songs requested per page when listing an artist's catalog
    pub per_page: u32,
    /// Number of lyric pages fetched concurrently
    pub lyrics_concurrency: usize,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
    /// Number of words shown in the frequency plot
    pub top_n: usize,
    /// Optional cap on the number of songs retrieved per artist
    pub max_songs: Option<usize>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            genius_access_token: String::new(),
            per_page: constants::genius::DEFAULT_PER_PAGE,
            lyrics_concurrency: constants::corpus::DEFAULT_CONCURRENCY,
            request_timeout_secs: constants::genius::DEFAULT_TIMEOUT_SECS,
            top_n: constants::ui::DEFAULT_TOP_N,
            max_songs: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(token) = env::var("GENIUS_ACCESS_TOKEN") {
            config.genius_access_token = token.trim().to_string();
        }

        if let Some(per_page) = parse_var::<u32>("GENIUS_PER_PAGE").filter(|n| *n > 0) {
            config.per_page = per_page;
        }

        if let Some(concurrency) = parse_var::<usize>("LYRICS_CONCURRENCY").filter(|n| *n > 0) {
            config.lyrics_concurrency = concurrency;
        }

        if let Some(secs) = parse_var::<u64>("REQUEST_TIMEOUT_SECS").filter(|n| *n > 0) {
            config.request_timeout_secs = secs;
        }

        if let Some(top_n) = parse_var::<usize>("TOP_N").filter(|n| *n > 0) {
            config.top_n = top_n;
        }

        config.max_songs = parse_var::<usize>("MAX_SONGS").filter(|n| *n > 0);

        Ok(config)
    }

    /// Check if `Genius` is configured
    pub fn has_genius_credentials(&self) -> bool {
        !self.genius_access_token.is_empty()
    }
}

/// Read and parse an environment variable, ignoring unset or malformed values
fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring malformed {name}={raw:?}");
            None
        }
    }
}
