//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Genius API and website constants.
pub mod genius {
    /// Base URL of the Genius REST API.
    pub const API_BASE_URL: &str = "https://api.genius.com";

    /// Base URL of the Genius website, prefixed to song paths.
    pub const WEB_BASE_URL: &str = "https://genius.com";

    /// Songs requested per page when listing an artist's catalog.
    pub const DEFAULT_PER_PAGE: u32 = 50;

    /// Sort order used when listing an artist's catalog.
    pub const SONG_SORT: &str = "popularity";

    /// Default HTTP request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}

/// Lyric retrieval constants.
pub mod corpus {
    /// Number of lyric pages fetched concurrently by default.
    pub const DEFAULT_CONCURRENCY: usize = 4;

    /// Separator placed between song bodies when building the raw corpus text.
    pub const SONG_SEPARATOR: &str = "\n";
}

/// Rendering constants.
pub mod ui {
    /// Default number of words shown in the frequency plot.
    pub const DEFAULT_TOP_N: usize = 20;

    /// Width of a single bar in the frequency plot.
    pub const BAR_WIDTH: u16 = 7;

    /// Gap between bars in the frequency plot.
    pub const BAR_GAP: u16 = 1;

    /// Maximum number of words placed in the word cloud.
    pub const MAX_CLOUD_WORDS: usize = 200;
}
