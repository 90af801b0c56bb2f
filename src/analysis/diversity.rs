//! Lexical diversity.
//!
//! The denominator is a plain whitespace split of the original text while the
//! numerator is the number of distinct *filtered* tokens. The two sides use
//! different tokenizations; scores are comparable between artists but are not
//! a type/token ratio in the strict sense.

use crate::analysis::frequency::FrequencyTable;
use crate::error::{Error, Result};

/// Number of whitespace-separated words in the raw text.
pub fn raw_word_count(raw: &str) -> usize {
    raw.split_whitespace().count()
}

/// Distinct surviving words as a percentage of raw words.
pub fn diversity(raw: &str, table: &FrequencyTable) -> Result<f64> {
    ratio(table.len(), raw_word_count(raw))
}

/// `unique / total * 100`, or `EmptyCorpus` when there are no words.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn ratio(unique_words: usize, total_words: usize) -> Result<f64> {
    if total_words == 0 {
        return Err(Error::empty_corpus());
    }
    Ok(unique_words as f64 / total_words as f64 * 100.0)
}
