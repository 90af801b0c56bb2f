use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::analysis::FrequencyTable;
use crate::constants::ui::MAX_CLOUD_WORDS;
use crate::ui::create_titled_block;

/// Visual weight of a word relative to the most frequent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// At least two thirds of the top count.
    Heavy,
    /// At least one third of the top count.
    Medium,
    /// At least a tenth of the top count.
    Light,
    /// Everything else.
    Faint,
}

impl Tier {
    /// Tier of a word seen `count` times when the top word was seen `max` times.
    pub fn of(count: usize, max: usize) -> Self {
        // Integer comparisons of count/max against 2/3, 1/3, 1/10
        match count {
            c if c * 3 >= max * 2 => Self::Heavy,
            c if c * 3 >= max => Self::Medium,
            c if c * 10 >= max => Self::Light,
            _ => Self::Faint,
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Heavy => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Self::Medium => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            Self::Light => Style::default().fg(Color::Green),
            Self::Faint => Style::default().fg(Color::DarkGray),
        }
    }
}

/// Lay out the most frequent words into lines no wider than `width`.
pub fn cloud_lines(table: &FrequencyTable, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    let max = table.entries().first().map_or(1, |(_, c)| *c);

    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for (word, count) in table.top(MAX_CLOUD_WORDS) {
        let tier = Tier::of(*count, max);
        let text = if tier == Tier::Heavy { word.to_uppercase() } else { word.clone() };
        let w = text.width();

        if !spans.is_empty() && used + 1 + w > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
            used += 1;
        }
        spans.push(Span::styled(text, tier.style()));
        used += w;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }

    lines
}

/// Render the word cloud centered in `area`.
pub fn draw_word_cloud(f: &mut Frame, area: Rect, table: &FrequencyTable, title: &str) {
    let lines = cloud_lines(table, area.width.saturating_sub(2));
    let cloud = Paragraph::new(lines)
        .block(create_titled_block(title))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(cloud, area);
}
