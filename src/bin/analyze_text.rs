//! Analyze local lyric files without touching the network.
//!
//! Usage: cargo run --bin analyze_text -- [--top 20] [--json] [--stopwords list.txt] FILE...
//!
//! Each file is treated as one song; files are analyzed in the order given.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use lyricscope::analysis::{Analyzer, StopwordSet};
use lyricscope::constants::ui::DEFAULT_TOP_N;

/// Word frequency and lexical diversity of local text files
#[derive(Parser, Debug)]
#[command(name = "analyze_text", version, about)]
struct Args {
    /// Lyric files to analyze (`~` is expanded)
    #[arg(required = true)]
    files: Vec<String>,

    /// Number of words to list
    #[arg(short, long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Replace the built-in stopwords with a list (one word per line)
    #[arg(long)]
    stopwords: Option<String>,

    /// Print the full analysis as JSON
    #[arg(long)]
    json: bool,
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let analyzer = match &args.stopwords {
        Some(path) => {
            let list = fs_err::read_to_string(expand(path))?;
            let words = list.lines().map(str::trim).filter(|w| !w.is_empty());
            Analyzer::new(Arc::new(StopwordSet::from_words(words)))
        }
        None => Analyzer::default(),
    };

    let songs = args
        .files
        .iter()
        .map(|f| fs_err::read_to_string(expand(f)))
        .collect::<std::io::Result<Vec<String>>>()?;

    let analysis = analyzer
        .analyze_songs(&songs)
        .with_context(|| format!("analyzing {} file(s)", songs.len()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("=== Top {} of {} words ===", args.top.min(analysis.table.len()), analysis.table.len());
    for (rank, (word, count)) in analysis.table.top(args.top).iter().enumerate() {
        println!("  {:>3}. {word:<20} {count}", rank + 1);
    }
    println!();
    println!("Raw words:         {}", analysis.word_count);
    println!("Lexical diversity: {:.2}%", analysis.diversity);

    Ok(())
}
