//! Widget layout: heading, prompt with pickers, result, chart and bars.

use super::bar_chart::draw_bar_chart;
use super::keymap_bar::draw_keymap;
use super::status_bar::draw_status;
use super::ThemeColors;
use crate::app::{App, Focus};
use crate::i18n::keys;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the whole widget.
pub(super) fn draw_widget(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    f.render_widget(Block::default().style(Style::default().bg(colors.bg)), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Prompt
            Constraint::Length(2), // Result
            Constraint::Min(6),    // Chart
            Constraint::Length(1), // Tooltip
            Constraint::Length(1), // Status
            Constraint::Length(1), // Keymap
        ])
        .split(f.area());

    draw_title(f, app, chunks[0], &colors);
    draw_prompt(f, app, chunks[1], &colors);
    draw_result(f, app, chunks[2], &colors);
    draw_bar_chart(f, app, chunks[3], &colors);
    draw_tooltip(f, app, chunks[4], &colors);
    draw_status(f, chunks[5], &app.status, &colors);
    draw_keymap(f, chunks[6], app.focus, &colors);
}

fn draw_title(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let title = Paragraph::new(Line::from(Span::styled(
        app.translations.get(keys::TITLE),
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    f.render_widget(title, area);
}

fn picker_span(value: u32, focused: bool, colors: &ThemeColors) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(colors.cursor_fg)
            .bg(colors.cursor_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(colors.picker)
            .add_modifier(Modifier::BOLD)
    };
    Span::styled(format!("[ {} ]", value), style)
}

fn draw_prompt(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let t = &app.translations;
    let text = Style::default().fg(colors.text);

    let line = Line::from(vec![
        Span::styled(format!("{} ", t.get(keys::START)), text),
        picker_span(app.initial_groups, app.focus == Focus::Groups, colors),
        Span::styled(format!(" {} ", t.get(keys::GROUPS)), text),
        picker_span(app.months_per_cycle, app.focus == Focus::Months, colors),
        Span::styled(
            format!(" {}, {}", app.unit_word(), t.get(keys::HOW_MANY)),
            text,
        ),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn draw_result(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        app.result(),
        Style::default()
            .fg(colors.value)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(colors.border)),
    );

    f.render_widget(paragraph, area);
}

fn draw_tooltip(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let text = app.tooltip().unwrap_or_default();
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors.bar_selected));

    f.render_widget(paragraph, area);
}
