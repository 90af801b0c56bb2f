//! `LyricScope` - word frequency and lexical diversity of an artist's lyrics.

use std::io::{self, Write};
use std::panic;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lyricscope::analysis::Analyzer;
use lyricscope::config::Config;
use lyricscope::error::{Error, Result};
use lyricscope::genius::GeniusClient;
use lyricscope::prompt::{Action, Prompt};
use lyricscope::services::corpus::{collect_corpus, Progress};
use lyricscope::services::disambiguation::resolve_artist;
use lyricscope::ui::{self, View};

/// Analyze the vocabulary of an artist's lyrics
#[derive(Parser, Debug)]
#[command(name = "lyricscope")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Artist or band name (prompted for when omitted)
    #[arg(short, long)]
    artist: Option<String>,

    /// Number of words in the frequency plot
    #[arg(short, long)]
    top: Option<usize>,

    /// Stop after this many songs
    #[arg(long)]
    max_songs: Option<usize>,

    /// What to show once the analysis is done (prompted for when omitted)
    #[arg(long, value_enum)]
    action: Option<Action>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so prompts on stdout stay readable
    let log_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    // Restore the terminal before the default panic output if a view is open
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::restore_terminal();
        original_hook(panic_info);
    }));

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(top) = args.top.filter(|n| *n > 0) {
        config.top_n = top;
    }
    if let Some(max) = args.max_songs.filter(|n| *n > 0) {
        config.max_songs = Some(max);
    }
    if !config.has_genius_credentials() {
        return Err(Error::config(
            "No Genius access token found",
            "Set GENIUS_ACCESS_TOKEN in the environment or a .env file",
        ));
    }
    tracing::debug!("{} {} starting", config.app_name(), config.app_version());

    let client = GeniusClient::new(&config);
    let mut prompt = Prompt::stdio();

    // Get the name of the artist from the user
    let query = match args.artist {
        Some(name) => name,
        None => match prompt.ask_artist()? {
            Some(name) => name,
            None => return Ok(()),
        },
    };

    // Find the actual artist in the Genius data
    let Some(artist) = resolve_artist(&client, &mut prompt, query).await? else {
        prompt.say("No artist selected.")?;
        return Ok(());
    };

    prompt.say("Getting songs...")?;
    let report = |p: Progress| {
        let mut out = io::stdout().lock();
        let _ = match p {
            Progress::SongsFound(n) => writeln!(out, "Found {n} songs..."),
            Progress::Lyrics { done, total } => writeln!(out, "Getting lyrics to song {done}/{total}"),
            Progress::Skipped { title, reason } => writeln!(out, "  skipped \"{title}\": {reason}"),
        };
    };
    let corpus = collect_corpus(&client, artist.id, config.lyrics_concurrency, &report).await?;

    prompt.say("Analyzing lyrics...")?;
    let analysis = Analyzer::default().analyze_songs(&corpus.bodies())?;
    prompt.say(&ui::summary(&artist.name, corpus.song_count(), &analysis))?;

    let action = match args.action {
        Some(action) => Some(action),
        None => prompt.choose_action()?,
    };

    match action {
        Some(Action::FrequencyPlot) => ui::show(&View::FrequencyChart {
            title: format!("{} - top {} words", artist.name, config.top_n),
            table: &analysis.table,
            top_n: config.top_n,
        })?,
        Some(Action::WordCloud) => ui::show(&View::WordCloud {
            title: format!("{} - word cloud", artist.name),
            table: &analysis.table,
        })?,
        Some(Action::PrintLyrics) => prompt.say(&corpus.raw_text())?,
        None => {}
    }

    prompt.say("Done!")?;
    Ok(())
}
