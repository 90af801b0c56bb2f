//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// Terminal or standard stream IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// `Genius` API error with status context
    #[error("Genius API error: {message}")]
    Genius {
        /// Human-readable error description.
        message: String,
        /// HTTP status code, if from an HTTP response.
        status: Option<u16>,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Response or page parsing error
    #[error("Parse error in {source_url:?}: {message}")]
    Parse {
        /// URL or path of the document that failed to parse, if known.
        source_url: Option<String>,
        /// Description of the parse failure.
        message: String,
    },

    /// No words to analyze; lexical diversity is undefined
    #[error("No lyrics to analyze. {hint}")]
    EmptyCorpus {
        /// Actionable guidance for the caller.
        hint: &'static str,
    },

    /// A requested resource (artist, lyric container) was not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Create a `Genius` error with HTTP status
    pub fn genius_status(message: impl Into<String>, status: u16) -> Self {
        let hint = match status {
            401 => Some("Check the GENIUS_ACCESS_TOKEN environment variable"),
            403 => Some("Your access token may lack required permissions"),
            404 => Some("The requested artist or song was not found"),
            429 => Some("Rate limited - wait a moment and try again"),
            500..=599 => Some("Genius server error - try again later"),
            _ => None,
        };
        Self::Genius {
            message: message.into(),
            status: Some(status),
            hint,
        }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with source context
    pub fn parse(message: impl Into<String>, source_url: impl Into<Option<String>>) -> Self {
        Self::Parse { source_url: source_url.into(), message: message.into() }
    }

    /// Create the error returned when there are no words to measure
    pub const fn empty_corpus() -> Self {
        Self::EmptyCorpus {
            hint: "The artist may have no songs with retrievable lyrics - try a different query",
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn genius_status_provides_hints() {
        let err = Error::genius_status("Unauthorized", 401);
        match err {
            Error::Genius { hint: Some(h), .. } => {
                assert!(h.contains("GENIUS_ACCESS_TOKEN"));
            }
            _ => panic!("Expected Genius error with hint"),
        }
    }

    #[test]
    fn unknown_status_has_no_hint() {
        let err = Error::genius_status("Teapot", 418);
        assert!(matches!(err, Error::Genius { status: Some(418), hint: None, .. }));
    }

    #[test]
    fn empty_corpus_message_is_actionable() {
        let msg = Error::empty_corpus().to_string();
        assert!(msg.starts_with("No lyrics to analyze"));
        assert!(msg.contains("different query"));
    }
}
