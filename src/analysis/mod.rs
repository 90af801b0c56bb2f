//! Lyric text analysis.
//!
//! Reduces raw lyric text to a filtered token stream and derives the
//! ranked word-frequency table and lexical diversity used for rendering.
//! Everything in this module is pure and synchronous.

/// Lexical diversity metric
pub mod diversity;
/// Word frequency aggregation
pub mod frequency;
/// Composition of the analysis stages
pub mod pipeline;
/// Stopword vocabulary and filtering
pub mod stopwords;
/// Word tokenization and punctuation stripping
pub mod tokenizer;

pub use diversity::{diversity, raw_word_count};
pub use frequency::{count, FrequencyTable};
pub use pipeline::{analyze, Analysis, Analyzer};
pub use stopwords::{StopwordFilter, StopwordSet};
pub use tokenizer::tokenize;
