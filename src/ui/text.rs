//! Plain-text rendering of the widget for `--print`.

use crate::app::App;
use crate::i18n::keys;
use crate::presenter;
use std::fmt::Write;

/// Render the widget as plain lines: heading, prompt, result and one row per year.
pub fn render_text(app: &App) -> String {
    let t = &app.translations;
    let chart = app.chart();
    let mut out = String::new();

    let _ = writeln!(out, "{}", t.get(keys::TITLE));
    let _ = writeln!(
        out,
        "{} {} {} {} {}, {}",
        t.get(keys::START),
        app.initial_groups,
        t.get(keys::GROUPS),
        app.months_per_cycle,
        app.unit_word(),
        t.get(keys::HOW_MANY)
    );
    let _ = writeln!(out, "{}", app.result());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", chart.dataset_label);

    let label_width = chart
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    for (label, value) in chart.labels.iter().zip(chart.values.iter()) {
        let _ = writeln!(
            out,
            "{:<width$}  {}",
            label,
            presenter::format(*value, t),
            width = label_width
        );
    }

    out
}
