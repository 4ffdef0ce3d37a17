//! Application state and logic.

use crate::chart::{ChartData, ScaleMode};
use crate::config::WidgetConfig;
use crate::growth::{compute, GrowthSeries};
use crate::i18n::TranslationTable;
use crate::presenter;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Picker that receives increment/decrement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Initial group count.
    #[default]
    Groups,
    /// Reproduction interval.
    Months,
}

impl Focus {
    /// The other picker.
    pub fn next(self) -> Self {
        match self {
            Focus::Groups => Focus::Months,
            Focus::Months => Focus::Groups,
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Translations for every displayed string.
    pub translations: TranslationTable,
    /// Selected initial group count.
    pub initial_groups: u32,
    /// Selected reproduction interval in months.
    pub months_per_cycle: u32,
    /// Number of projected years.
    pub years: u32,
    /// Upper bound of the group picker.
    pub max_initial_groups: u32,
    /// Upper bound of the interval picker.
    pub max_months: u32,
    /// Focused picker.
    pub focus: Focus,
    /// Bar whose value is shown in the tooltip line.
    pub selected_bar: usize,
    /// Chart scale.
    pub scale: ScaleMode,
    /// Current theme.
    pub theme: Theme,
    /// Status message.
    pub status: String,
    series: GrowthSeries,
    chart: ChartData,
    result: String,
}

impl App {
    /// Create a new application instance.
    pub fn new(config: &WidgetConfig) -> Self {
        let translations = TranslationTable::new(&config.language);
        let series = compute(config.initial_groups, config.months_per_cycle, config.years);
        let chart = ChartData::new(&series, &translations);
        let result = presenter::summary(&series, &translations);

        let mut app = Self {
            translations,
            initial_groups: config.initial_groups,
            months_per_cycle: config.months_per_cycle,
            years: config.years,
            max_initial_groups: config.max_initial_groups,
            max_months: config.max_months,
            focus: Focus::default(),
            selected_bar: 0,
            scale: ScaleMode::default(),
            theme: Theme::GruvboxDark,
            status: "Ready".to_string(),
            series,
            chart,
            result,
        };
        app.selected_bar = app.chart.len().saturating_sub(1);
        app
    }

    /// Recompute the series, chart data and result line.
    pub fn recalculate(&mut self) {
        self.series = compute(self.initial_groups, self.months_per_cycle, self.years);
        self.chart = ChartData::new(&self.series, &self.translations);
        self.result = presenter::summary(&self.series, &self.translations);
        tracing::info!(
            initial_groups = self.initial_groups,
            months_per_cycle = self.months_per_cycle,
            "{}",
            self.result
        );
    }

    /// Current growth series.
    pub fn series(&self) -> &GrowthSeries {
        &self.series
    }

    /// Current chart data.
    pub fn chart(&self) -> &ChartData {
        &self.chart
    }

    /// Current result sentence.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Interval unit matching the selected interval.
    pub fn unit_word(&self) -> &'static str {
        presenter::unit_word(self.months_per_cycle, &self.translations)
    }

    /// Tooltip line for the selected bar.
    pub fn tooltip(&self) -> Option<String> {
        let value = *self.chart.values.get(self.selected_bar)?;
        let label = self.chart.labels.get(self.selected_bar)?;
        Some(format!(
            "{} | {}",
            label,
            presenter::tooltip(&self.chart.dataset_label, value, &self.translations)
        ))
    }

    /// Move focus to the other picker.
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Increase the focused picker by one step.
    pub fn increment(&mut self) {
        self.step(1);
    }

    /// Decrease the focused picker by one step.
    pub fn decrement(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: i64) {
        let (value, max) = match self.focus {
            Focus::Groups => (&mut self.initial_groups, self.max_initial_groups),
            Focus::Months => (&mut self.months_per_cycle, self.max_months),
        };
        let next = (i64::from(*value) + delta).clamp(1, i64::from(max)) as u32;
        if next == *value {
            return;
        }
        *value = next;
        self.recalculate();
        self.status = format!(
            "{} × {} {}",
            self.initial_groups,
            self.months_per_cycle,
            self.unit_word()
        );
    }

    /// Select the next bar for the tooltip.
    pub fn select_next_bar(&mut self) {
        if self.selected_bar + 1 < self.chart.len() {
            self.selected_bar += 1;
        }
    }

    /// Select the previous bar for the tooltip.
    pub fn select_prev_bar(&mut self) {
        self.selected_bar = self.selected_bar.saturating_sub(1);
    }

    /// Switch between linear and logarithmic bars.
    pub fn toggle_scale(&mut self) {
        self.scale = self.scale.toggle();
        self.status = format!("Scale: {}", self.scale.name());
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }
}
