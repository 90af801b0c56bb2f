//! End-to-end checks of the analysis pipeline on plain text.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use lyricscope::analysis::{analyze, count, tokenize, Analyzer, StopwordFilter, StopwordSet};
use lyricscope::error::Error;

const LYRICS: &str = "[Verse 1]
I've been walking down this lonely road
Don't you know the night is cold?
[Chorus]
Walking, walking, walking home
Lonely hearts don't walk alone

[Verse 2]
Cold wind blowing, I'm walking home";

fn pairs(text: &str) -> Vec<(String, usize)> {
    analyze(text).unwrap().table.entries().to_vec()
}

#[test]
fn love_song_scenario() {
    assert_eq!(pairs("I love you, you love me"), vec![("love".to_string(), 2)]);
}

#[test]
fn empty_text_scenario() {
    assert!(Analyzer::default().frequencies("").is_empty());
    let err = analyze("").unwrap_err();
    assert!(matches!(err, Error::EmptyCorpus { .. }));
}

#[test]
fn run_away_scenario() {
    let analysis = analyze("Run! Run, run away.").unwrap();
    assert_eq!(
        analysis.table.entries(),
        &[("run".to_string(), 3), ("away".to_string(), 1)]
    );
    assert_eq!(analysis.word_count, 4);
    assert!((analysis.diversity - 50.0).abs() < f64::EPSILON);
}

#[test]
fn tie_scenario() {
    let table = count(["red", "red", "blue", "blue"]);
    assert_eq!(table.entries()[0].0, "red");
    assert_eq!(table.entries()[1].0, "blue");
}

#[test]
fn no_stopwords_leak_through() {
    let stopwords = StopwordSet::english();
    let analysis = analyze(LYRICS).unwrap();
    assert!(!analysis.table.is_empty());
    for (word, _) in &analysis.table {
        assert!(!stopwords.contains(word), "{word} leaked through");
        assert_eq!(word, &word.to_lowercase());
        assert!(!word.is_empty());
    }
}

#[test]
fn counts_are_conserved() {
    let filter = StopwordFilter::default();
    let survivors = filter.filter(tokenize(LYRICS));
    let table = count(&survivors);
    assert_eq!(table.total(), survivors.len());
}

#[test]
fn table_is_descending_and_deterministic() {
    let first = analyze(LYRICS).unwrap();
    let second = analyze(LYRICS).unwrap();
    assert_eq!(first, second);
    assert!(first.table.entries().windows(2).all(|w| w[0].1 >= w[1].1));
    assert_eq!(first.table.entries()[0], ("walking".to_string(), 5));
}

#[test]
fn second_filter_pass_changes_nothing() {
    let filter = StopwordFilter::default();
    let once = filter.filter(tokenize(LYRICS));
    assert_eq!(filter.filter(&once), once);
}

#[test]
fn per_song_analysis_equals_joined_text() {
    let songs: Vec<&str> = LYRICS.split("\n\n").collect();
    let analyzer = Analyzer::default();
    assert_eq!(
        analyzer.analyze_songs(&songs).unwrap(),
        analyzer.analyze(&songs.join("\n")).unwrap()
    );
}

#[test]
fn analysis_serializes_for_renderers() {
    let analysis = analyze("Run! Run, run away.").unwrap();
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["table"][0][0], "run");
    assert_eq!(json["table"][0][1], 3);
    assert_eq!(json["word_count"], 4);
}
