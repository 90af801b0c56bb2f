//! `LyricScope` - word frequency and lexical diversity of an artist's lyrics.
//!
//! Retrieves an artist's catalog and lyrics from Genius, reduces the text to a
//! filtered token stream, and computes the ranked frequency table and
//! diversity score rendered by the terminal UI.

// Re-export public modules for use in integration tests and as a library
pub mod analysis;
pub mod config;
pub mod constants;
pub mod error;
pub mod genius;
pub mod prompt;
pub mod services;
pub mod ui;
