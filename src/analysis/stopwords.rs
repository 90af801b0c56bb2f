//! Stopword filtering
//!
//! Low-information tokens (function words, pronouns, contraction fragments,
//! song-structure markers and stray digits) are removed before counting.
//! The vocabulary is an immutable set injected into the filter, so callers
//! and tests can swap in their own list.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

/// English function words, pronouns, auxiliaries and contraction fragments.
const ENGLISH: &[&str] = &[
    "the", "nt", "m", "s", "d", "ve", "ai", "re", "ll", "im", "wan", "na", "its", "cant", "like",
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
    "you", "your", "yours", "yourself", "yourselves",
    "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "itself", "they", "them", "their", "theirs", "themselves",
    "what", "which", "who", "whom", "this", "that", "these", "those",
    "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing",
    "a", "an", "and", "but", "if", "or", "because", "as", "until", "while",
    "of", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "up", "down",
    "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "will", "just", "don", "should", "now",
    "aint", "arent", "couldnt", "didnt", "doesnt", "hadnt", "hasnt", "havent", "isnt",
    "mightn", "shouldnt", "wasnt", "werent", "wont", "wouldnt",
];

/// Section labels that lyric sites print inline (`[Verse 1]`, `[Chorus]`).
const SONG_STRUCTURE: &[&str] = &[
    "verse", "chorus", "prechorus", "postchorus", "intro", "outro", "hook", "bridge", "refrain",
];

/// Verse numbers left behind by section labels.
const DIGITS: &[&str] = &["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];

static DEFAULT_STOPWORDS: LazyLock<Arc<StopwordSet>> = LazyLock::new(|| {
    Arc::new(StopwordSet::from_words(
        ENGLISH.iter().chain(SONG_STRUCTURE).chain(DIGITS),
    ))
});

/// A read-only vocabulary of excluded tokens, stored lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a set from any list of words; entries are lower-cased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// The shared built-in vocabulary for English lyrics.
    pub fn english() -> Arc<Self> {
        Arc::clone(&DEFAULT_STOPWORDS)
    }

    /// Case-insensitive membership check.
    pub fn contains(&self, token: &str) -> bool {
        if token.chars().any(char::is_uppercase) {
            self.words.contains(&token.to_lowercase())
        } else {
            self.words.contains(token)
        }
    }

    /// Number of distinct stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set has no entries (filtering then only drops empties).
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Removes stopwords and empty tokens, lower-casing the survivors.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: Arc<StopwordSet>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new(StopwordSet::english())
    }
}

impl StopwordFilter {
    /// Create a filter over the given vocabulary.
    pub const fn new(stopwords: Arc<StopwordSet>) -> Self {
        Self { stopwords }
    }

    /// The vocabulary this filter excludes.
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Filter a token stream, preserving order.
    pub fn filter<I, S>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .filter_map(|token| self.keep(token.as_ref()))
            .collect()
    }

    /// The emitted form of a single token, or `None` if it is dropped.
    pub fn keep(&self, token: &str) -> Option<String> {
        if token.is_empty() {
            return None;
        }
        let lower = token.to_lowercase();
        if self.stopwords.contains(&lower) {
            None
        } else {
            Some(lower)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn membership_is_case_insensitive() {
        let set = StopwordSet::english();
        assert!(set.contains("the"));
        assert!(set.contains("The"));
        assert!(set.contains("CHORUS"));
        assert!(set.contains("10"));
        assert!(!set.contains("11"));
        assert!(!set.contains("love"));
        assert!(!set.contains("away"));
    }

    #[test]
    fn drops_stopwords_and_empties_and_lowercases() {
        let filter = StopwordFilter::default();
        let out = filter.filter(["I", "", "Love", "you", "", "ME", "Forever"]);
        assert_eq!(out, vec!["love", "forever"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let filter = StopwordFilter::default();
        let once = filter.filter(["Hello", "Darkness", "my", "old", "friend", "Verse", "2", ""]);
        let twice = filter.filter(&once);
        assert_eq!(once, twice);
        assert_eq!(once, vec!["hello", "darkness", "old", "friend"]);
    }

    #[test]
    fn custom_vocabulary_can_be_injected() {
        let filter = StopwordFilter::new(Arc::new(StopwordSet::from_words(["Red"])));
        assert_eq!(filter.filter(["red", "RED", "blue", "the"]), vec!["blue", "the"]);
        assert_eq!(filter.stopwords().len(), 1);
    }

    #[test]
    fn empty_vocabulary_only_drops_empties() {
        let filter = StopwordFilter::new(Arc::new(StopwordSet::default()));
        assert!(filter.stopwords().is_empty());
        assert_eq!(filter.filter(["", "The", ""]), vec!["the"]);
    }

    #[test]
    fn contraction_fragments_are_stopwords() {
        let set = StopwordSet::english();
        for fragment in ["nt", "m", "s", "ll", "re", "ai", "wan", "na", "don"] {
            assert!(set.contains(fragment), "{fragment} should be a stopword");
        }
    }
}
