//! Tests for the offline `analyze_text` binary.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::io::Write;
use std::process::Command;

fn lyrics_file(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn prints_ranked_words_and_diversity() {
    let file = lyrics_file("Run! Run, run away.");
    let out = Command::new(env!("CARGO_BIN_EXE_analyze_text"))
        .arg(file.path())
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("1. run"));
    assert!(stdout.contains("2. away"));
    assert!(stdout.contains("Lexical diversity: 50.00%"));
}

#[test]
fn json_output_and_custom_stopwords() {
    let song = lyrics_file("Red red blue blue green");
    let stopwords = lyrics_file("green\n\n");
    let out = Command::new(env!("CARGO_BIN_EXE_analyze_text"))
        .arg("--json")
        .arg("--stopwords")
        .arg(stopwords.path())
        .arg(song.path())
        .output()
        .unwrap();

    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["table"], serde_json::json!([["red", 2], ["blue", 2]]));
}

#[test]
fn empty_file_fails_with_actionable_error() {
    let file = lyrics_file("   \n");
    let out = Command::new(env!("CARGO_BIN_EXE_analyze_text"))
        .arg(file.path())
        .output()
        .unwrap();

    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("No lyrics to analyze"));
}
