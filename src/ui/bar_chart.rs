//! Growth bar chart with a compact y-axis.

use super::ThemeColors;
use crate::app::App;
use crate::chart::BAR_RESOLUTION;
use crate::presenter::format_compact;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

const BAR_GAP: u16 = 1;

/// Draw the chart for the app's current series.
pub(super) fn draw_bar_chart(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let chart = app.chart();
    let ticks = chart.axis_ticks(app.scale);
    let axis_width = ticks
        .iter()
        .map(|t| t.chars().count() as u16)
        .max()
        .unwrap_or(1)
        + 1;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(axis_width), Constraint::Min(1)])
        .split(area);

    draw_axis(f, &ticks, chunks[0], colors);

    let inner_width = chunks[1].width.saturating_sub(2);
    let bar_width = bar_width(inner_width, chart.len());

    let heights = chart.bar_heights(app.scale);
    let bars: Vec<Bar<'_>> = chart
        .labels
        .iter()
        .zip(chart.values.iter())
        .zip(heights)
        .enumerate()
        .map(|(idx, ((label, value), height))| {
            let color = if idx == app.selected_bar {
                colors.bar_selected
            } else {
                colors.bar
            };
            Bar::default()
                .label(Line::from(fit_label(label, idx + 1, bar_width)))
                .value(height)
                .text_value(format_compact(*value))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(colors.cursor_fg)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let bar_chart = BarChart::default()
        .block(
            Block::default()
                .title(format!(" {} ", chart.dataset_label))
                .title_bottom(Line::from(format!(" {} ", chart.x_title)).alignment(Alignment::Center))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .max(BAR_RESOLUTION)
        .label_style(Style::default().fg(colors.text));

    f.render_widget(bar_chart, chunks[1]);
}

/// Widest bar that fits `count` bars into `width` columns.
fn bar_width(width: u16, count: usize) -> u16 {
    let count = count.max(1) as u16;
    ((width + BAR_GAP) / count).saturating_sub(BAR_GAP).max(1)
}

/// Full label when it fits under the bar, else just the year number.
fn fit_label(label: &str, year: usize, width: u16) -> String {
    if label.chars().count() <= width as usize {
        label.to_string()
    } else {
        year.to_string()
    }
}

fn draw_axis(f: &mut Frame<'_>, ticks: &[String; 3], area: Rect, colors: &ThemeColors) {
    // Top and bottom ticks line up with the first bar row and the baseline.
    let top = 1usize;
    let bottom = (area.height as usize).saturating_sub(3).max(top);
    let mid = (top + bottom) / 2;

    let mut lines = vec![Line::default(); area.height as usize];
    for (row, tick) in [(top, &ticks[0]), (mid, &ticks[1]), (bottom, &ticks[2])] {
        if let Some(line) = lines.get_mut(row) {
            *line = Line::from(tick.clone());
        }
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
