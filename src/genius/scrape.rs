//! Lyric extraction from Genius song pages.
//!
//! Genius serves lyrics either in a single legacy `<div class="lyrics">` or
//! split over several `<div data-lyrics-container="true">` blocks. Both are
//! located with regexes and balanced on nested `div`s; the inner markup is
//! then flattened to text with `<br>` as line breaks.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Opening tag of the legacy single lyrics container.
#[allow(clippy::expect_used)]
static RE_LEGACY_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<div\b[^>]*\bclass="(?:[^"]*\s)?lyrics(?:\s[^"]*)?"[^>]*>"#)
        .expect("valid regex: RE_LEGACY_OPEN")
});

/// Opening tag of a current-layout lyrics block.
#[allow(clippy::expect_used)]
static RE_CONTAINER_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<div\b[^>]*\bdata-lyrics-container="true"[^>]*>"#)
        .expect("valid regex: RE_CONTAINER_OPEN")
});

/// Any opening or closing `div` tag.
#[allow(clippy::expect_used)]
static RE_DIV: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(/?)div\b[^>]*>").expect("valid regex: RE_DIV")
});

#[allow(clippy::expect_used)]
static RE_BR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>").expect("valid regex: RE_BR")
});

/// Opening or closing block-level tag, which ends a line of text.
#[allow(clippy::expect_used)]
static RE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:div|p)\b[^>]*>").expect("valid regex: RE_BLOCK")
});

#[allow(clippy::expect_used)]
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^>]*>").expect("valid regex: RE_TAG")
});

#[allow(clippy::expect_used)]
static RE_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").expect("valid regex: RE_ENTITY")
});

/// Extract the lyric text of a song page, or `None` if it has no lyrics container.
pub fn extract_lyrics(html: &str) -> Option<String> {
    if let Some(m) = RE_LEGACY_OPEN.find(html) {
        let inner = balanced_inner(html, m.end())?;
        return Some(html_to_text(inner));
    }

    let blocks: Vec<String> = RE_CONTAINER_OPEN
        .find_iter(html)
        .filter_map(|m| balanced_inner(html, m.end()))
        .map(html_to_text)
        .collect();

    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join("\n"))
    }
}

/// Inner HTML of the `div` whose opening tag ends at `start`.
fn balanced_inner(html: &str, start: usize) -> Option<&str> {
    let mut depth = 1usize;
    for tag in RE_DIV.captures_iter(&html[start..]) {
        let whole = tag.get(0)?;
        if tag[1].is_empty() {
            depth += 1;
        } else {
            depth -= 1;
            if depth == 0 {
                return Some(&html[start..start + whole.start()]);
            }
        }
    }
    tracing::debug!("Unbalanced lyrics container at byte {start}");
    None
}

/// Flatten markup to text: `<br>` and block boundaries become newlines,
/// other tags vanish, entities are decoded.
fn html_to_text(fragment: &str) -> String {
    let with_breaks = RE_BR.replace_all(fragment, "\n");
    let with_blocks = RE_BLOCK.replace_all(&with_breaks, "\n");
    let stripped = RE_TAG.replace_all(&with_blocks, "");
    decode_entities(&stripped).trim().to_string()
}

fn decode_entities(text: &str) -> String {
    RE_ENTITY
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            let decoded = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(name)
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        "rsquo" => Some('\u{2019}'),
        "lsquo" => Some('\u{2018}'),
        "rdquo" => Some('\u{201D}'),
        "ldquo" => Some('\u{201C}'),
        "hellip" => Some('\u{2026}'),
        "mdash" => Some('\u{2014}'),
        "ndash" => Some('\u{2013}'),
        _ => None,
    }
}
