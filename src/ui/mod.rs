//! User interface components.
//!
//! Renders analysis results in the terminal using ratatui: a bar chart of the
//! most frequent words, a frequency-weighted word cloud, and a plain-text
//! summary.

mod chart;
mod cloud;

pub use chart::{chart_layout, draw_frequency_chart};
pub use cloud::{cloud_lines, draw_word_cloud, Tier};

use std::io;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::analysis::{Analysis, FrequencyTable};
use crate::error::Result;

/// A full-screen rendering of an analysis.
#[derive(Debug, Clone)]
pub enum View<'a> {
    /// Bar chart of the most frequent words.
    FrequencyChart {
        /// Block title.
        title: String,
        /// Words to plot.
        table: &'a FrequencyTable,
        /// Maximum number of bars.
        top_n: usize,
    },
    /// Word cloud weighted by frequency.
    WordCloud {
        /// Block title.
        title: String,
        /// Words to place.
        table: &'a FrequencyTable,
    },
}

/// One-paragraph textual summary of an artist's analysis.
pub fn summary(artist: &str, song_count: usize, analysis: &Analysis) -> String {
    let top: Vec<&str> = analysis.table.top(5).iter().map(|(w, _)| w.as_str()).collect();
    format!(
        "{artist}: {song_count} songs, {} words, {} distinct after filtering.\n\
         Lexical diversity: {:.2}%\n\
         Most used: {}",
        analysis.word_count,
        analysis.table.len(),
        analysis.diversity,
        if top.is_empty() { "-".to_string() } else { top.join(", ") },
    )
}

/// Show a view full-screen until a key is pressed.
///
/// The terminal is restored before returning, including on error.
pub fn show(view: &View<'_>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    let res = Terminal::new(CrosstermBackend::new(stdout))
        .map_err(Into::into)
        .and_then(|mut terminal| {
            let res = run_view(&mut terminal, view);
            let _ = terminal.show_cursor();
            res
        });

    restore_terminal()?;
    res
}

/// Leave the alternate screen and raw mode.
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

fn run_view<B: Backend>(terminal: &mut Terminal<B>, view: &View<'_>) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, view))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

/// Render a view to the terminal frame.
pub fn draw(f: &mut Frame, view: &View<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1), // Key hint at the bottom
        ])
        .split(f.size());

    match view {
        View::FrequencyChart { title, table, top_n } => {
            draw_frequency_chart(f, chunks[0], table, *top_n, title);
        }
        View::WordCloud { title, table } => draw_word_cloud(f, chunks[0], table, title),
    }

    let hint = Paragraph::new(Line::from(create_help_text(&[("any key", "Return")])))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(hint, chunks[1]);
}

/// Build styled help text spans from key-description pairs.
pub fn create_help_text<'a>(commands: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut text = vec![Span::raw(" ")];

    for (i, (key, description)) in commands.iter().enumerate() {
        text.push(Span::styled(*key, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)));
        text.push(Span::raw(format!(": {description}")));
        if i + 1 < commands.len() {
            text.push(Span::raw(" | "));
        }
    }

    text
}

/// Create a bordered block with a highlighted title.
pub fn create_titled_block(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::analysis::analyze;
    use ratatui::backend::TestBackend;

    fn render(view: &View<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|f| draw(f, view)).unwrap();
        terminal.backend().buffer().content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn summary_reports_counts_and_diversity() {
        let analysis = analyze("Run! Run, run away.").unwrap();
        let text = summary("The Runners", 1, &analysis);
        assert!(text.starts_with("The Runners: 1 songs, 4 words, 2 distinct"));
        assert!(text.contains("Lexical diversity: 50.00%"));
        assert!(text.contains("Most used: run, away"));
    }

    #[test]
    fn chart_shows_title_and_words() {
        let analysis = analyze("fire fire fire water water earth").unwrap();
        let screen = render(&View::FrequencyChart {
            title: "Top words".into(),
            table: &analysis.table,
            top_n: 20,
        });
        assert!(screen.contains("Top words"));
        assert!(screen.contains("fire"));
        assert!(screen.contains("water"));
        assert!(screen.contains("Return"));
    }

    #[test]
    fn titled_block_is_highlighted() {
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal
            .draw(|f| f.render_widget(create_titled_block("Words"), f.size()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let title: String = (1..6).map(|x| buffer.get(x, 0).symbol()).collect();
        assert_eq!(title, "Words");
        assert_eq!(buffer.get(1, 0).fg, Color::Yellow);
        assert_eq!(buffer.get(0, 1).symbol(), "│");
        assert_eq!(buffer.get(0, 1).fg, Color::Yellow);
    }

    #[test]
    fn cloud_shows_heavy_word_uppercased() {
        let analysis = analyze("fire fire fire water").unwrap();
        let screen = render(&View::WordCloud { title: "Cloud".into(), table: &analysis.table });
        assert!(screen.contains("FIRE"));
        assert!(screen.contains("water"));
    }
}
