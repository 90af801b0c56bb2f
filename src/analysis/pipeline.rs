//! Analysis pipeline.
//!
//! Tokenizer -> stopword filter -> frequency counter, then the diversity
//! metric over the original text. This is the single entry point the rest
//! of the application uses; it knows nothing about retrieval or rendering.

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;

use crate::analysis::diversity::{self, raw_word_count};
use crate::analysis::frequency::{self, FrequencyTable};
use crate::analysis::stopwords::{StopwordFilter, StopwordSet};
use crate::analysis::tokenizer::tokenize;
use crate::error::Result;

/// Result of analyzing one artist's lyrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Ranked word frequencies.
    pub table: FrequencyTable,
    /// Distinct surviving words as a percentage of raw words.
    pub diversity: f64,
    /// Whitespace-separated words in the raw text.
    pub word_count: usize,
}

/// Configured analysis pipeline.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    filter: StopwordFilter,
}

/// Analyze raw text with the built-in stopword list.
pub fn analyze(raw: &str) -> Result<Analysis> {
    Analyzer::default().analyze(raw)
}

impl Analyzer {
    /// Create a pipeline that excludes the given vocabulary.
    pub const fn new(stopwords: Arc<StopwordSet>) -> Self {
        Self { filter: StopwordFilter::new(stopwords) }
    }

    /// Filtered, lower-cased tokens of `raw` in text order.
    pub fn tokens(&self, raw: &str) -> Vec<String> {
        self.filter.filter(tokenize(raw))
    }

    /// Ranked frequency table of `raw`. Never fails.
    pub fn frequencies(&self, raw: &str) -> FrequencyTable {
        frequency::count(self.tokens(raw))
    }

    /// Frequency table and diversity score of `raw`.
    ///
    /// Returns `EmptyCorpus` when `raw` holds no words.
    pub fn analyze(&self, raw: &str) -> Result<Analysis> {
        let table = self.frequencies(raw);
        let diversity = diversity::diversity(raw, &table)?;
        tracing::debug!("Analyzed {} distinct words, diversity {diversity:.2}%", table.len());
        Ok(Analysis {
            table,
            diversity,
            word_count: raw_word_count(raw),
        })
    }

    /// Analyze song bodies as if they were joined by newlines.
    ///
    /// Songs are tokenized and filtered in parallel; the per-song token lists
    /// are concatenated in song order before counting, so tie-breaking never
    /// depends on thread scheduling.
    pub fn analyze_songs<S>(&self, songs: &[S]) -> Result<Analysis>
    where
        S: AsRef<str> + Sync,
    {
        let per_song: Vec<(Vec<String>, usize)> = songs
            .par_iter()
            .map(|song| {
                let song = song.as_ref();
                (self.tokens(song), raw_word_count(song))
            })
            .collect();

        let word_count: usize = per_song.iter().map(|(_, n)| n).sum();
        let table = frequency::count(per_song.iter().flat_map(|(tokens, _)| tokens));
        let diversity = diversity::ratio(table.len(), word_count)?;
        tracing::debug!(
            "Analyzed {} songs: {} distinct words, diversity {diversity:.2}%",
            songs.len(),
            table.len()
        );

        Ok(Analysis { table, diversity, word_count })
    }
}
