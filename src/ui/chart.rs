use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::BarChart,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::analysis::FrequencyTable;
use crate::constants::ui::{BAR_GAP, BAR_WIDTH};
use crate::ui::create_titled_block;

/// Widest bar we grow to for long words.
const MAX_BAR_WIDTH: u16 = 12;

/// Bar width and number of bars that fit in `width` columns (borders included).
///
/// Bars widen to fit the longest label shown, up to `MAX_BAR_WIDTH`.
#[allow(clippy::cast_possible_truncation)]
pub fn chart_layout(table: &FrequencyTable, top_n: usize, width: u16) -> (u16, usize) {
    let inner = width.saturating_sub(2);
    let longest = table
        .top(top_n)
        .iter()
        .map(|(w, _)| w.width().min(usize::from(MAX_BAR_WIDTH)) as u16)
        .max()
        .unwrap_or(0);
    let bar_width = longest.clamp(BAR_WIDTH, MAX_BAR_WIDTH);
    let fits = usize::from((inner + BAR_GAP) / (bar_width + BAR_GAP));
    (bar_width, fits.min(top_n).min(table.len()))
}

/// Render a bar chart of the `top_n` most frequent words.
pub fn draw_frequency_chart(f: &mut Frame, area: Rect, table: &FrequencyTable, top_n: usize, title: &str) {
    let (bar_width, count) = chart_layout(table, top_n, area.width);
    let data: Vec<(&str, u64)> = table
        .top(count)
        .iter()
        .map(|(word, n)| (word.as_str(), u64::try_from(*n).unwrap_or(u64::MAX)))
        .collect();

    let chart = BarChart::default()
        .block(create_titled_block(title))
        .data(data.as_slice())
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD))
        .label_style(Style::default().fg(Color::White));

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::analysis::count;

    #[test]
    fn layout_limits_bars_to_width() {
        let words: Vec<String> = (0..40).map(|i| format!("w{i}")).collect();
        let table = count(&words);
        // 80 columns: 78 inner, bars of 7 plus gap of 1 -> 9 bars
        assert_eq!(chart_layout(&table, 20, 80), (7, 9));
        assert_eq!(chart_layout(&table, 5, 80), (7, 5));
    }

    #[test]
    fn long_words_widen_bars() {
        let table = count(["extraordinarily", "short"]);
        assert_eq!(chart_layout(&table, 20, 80).0, MAX_BAR_WIDTH);
    }

    #[test]
    fn tiny_area_or_table() {
        let table = count(["one"]);
        assert_eq!(chart_layout(&table, 20, 80).1, 1);
        assert_eq!(chart_layout(&table, 20, 2).1, 0);
        assert_eq!(chart_layout(&FrequencyTable::default(), 20, 80).1, 0);
    }
}
