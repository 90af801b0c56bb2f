//! Genius integration.
//!
//! Provides the API client used to resolve artists and list their songs,
//! and the scraper that pulls lyric text out of song pages.

/// API client for Genius requests
pub mod api;
/// Lyric extraction from song page HTML
pub mod scrape;
/// Data types representing Genius resources
pub mod types;

// Re-export key components
pub use api::GeniusClient;
pub use types::{ArtistCandidate, SongRef};
