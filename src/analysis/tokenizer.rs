//! Word tokenization.
//!
//! Splits text on word boundaries, separates contraction clitics the way
//! Treebank-style tokenizers do (`don't` -> `do` + `n't`), and strips ASCII
//! punctuation from every token. Empty tokens are kept; dropping them is the
//! stopword filter's job.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// The ASCII punctuation set, enumerated explicitly.
pub const ASCII_PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// A run of word characters with internal apostrophes or hyphens, or any
/// single non-space character.
#[allow(clippy::expect_used)]
static RE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\w+(?:['\-]\w+)*|\S").expect("valid regex: RE_WORD")
});

/// Whole words split at a fixed byte offset (`gonna` -> `gon` + `na`).
const SPLIT_WORDS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("wanna", 3),
];

/// Trailing clitics split off a word. `n't` must be tried first.
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// Typographic characters folded to their ASCII equivalents before splitting.
///
/// Dashes become `--` so they separate words instead of joining them like a
/// single hyphen would.
const TYPOGRAPHIC: &[(char, &str)] = &[
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{2013}', "--"),
    ('\u{2014}', "--"),
    ('\u{2026}', "..."),
];

/// Split raw text into punctuation-stripped token candidates.
///
/// Tokens keep their original case and may be empty (a token that was
/// nothing but punctuation).
pub fn tokenize(text: &str) -> Vec<String> {
    let text = normalize_typography(text);
    let mut tokens = Vec::new();

    for m in RE_WORD.find_iter(&text) {
        let (head, tail) = split_clitic(m.as_str());
        tokens.push(strip_punctuation(head));
        if let Some(tail) = tail {
            tokens.push(strip_punctuation(tail));
        }
    }

    tokens
}

/// Check whether a character belongs to the ASCII punctuation set.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii() && ASCII_PUNCTUATION.contains(c)
}

/// Remove every ASCII punctuation character from a token.
pub fn strip_punctuation(token: &str) -> String {
    token.chars().filter(|&c| !is_punctuation(c)).collect()
}

/// Fold curly quotes, dashes and ellipses to ASCII so they tokenize and
/// strip like their plain counterparts.
fn normalize_typography(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| TYPOGRAPHIC.iter().any(|(t, _)| *t == c)) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match TYPOGRAPHIC.iter().find(|(t, _)| *t == c) {
            Some((_, ascii)) => out.push_str(ascii),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Split a single contraction clitic or fused colloquial form off a word.
fn split_clitic(word: &str) -> (&str, Option<&str>) {
    for (whole, at) in SPLIT_WORDS {
        if word.eq_ignore_ascii_case(whole) {
            return (&word[..*at], Some(&word[*at..]));
        }
    }

    let bytes = word.as_bytes();
    for clitic in CLITICS {
        let n = clitic.len();
        // The suffix is pure ASCII, so a match guarantees a char boundary.
        if bytes.len() > n && bytes[bytes.len() - n..].eq_ignore_ascii_case(clitic.as_bytes()) {
            let at = word.len() - n;
            return (&word[..at], Some(&word[at..]));
        }
    }

    (word, None)
}
