//! Bar chart dataset.
//!
//! The chart is handed an ordered `(labels, values)` pair plus its titles and
//! nothing else. Bar heights are rescaled into a fixed integer range because
//! the terminal bar chart takes `u64` heights while group counts can exceed
//! `u64::MAX`.

use crate::growth::GrowthSeries;
use crate::i18n::{keys, TranslationTable};
use crate::presenter::format_compact;

/// Height of the tallest bar.
pub const BAR_RESOLUTION: u64 = 10_000;

/// How values map to bar heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMode {
    /// Heights proportional to the value.
    #[default]
    Linear,
    /// Heights proportional to `ln(1 + value)`.
    Logarithmic,
}

impl ScaleMode {
    /// The other scale mode.
    pub fn toggle(self) -> Self {
        match self {
            ScaleMode::Linear => ScaleMode::Logarithmic,
            ScaleMode::Logarithmic => ScaleMode::Linear,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ScaleMode::Linear => "Linear",
            ScaleMode::Logarithmic => "Logarithmic",
        }
    }

    fn apply(self, value: f64) -> f64 {
        match self {
            ScaleMode::Linear => value,
            ScaleMode::Logarithmic => value.ln_1p(),
        }
    }
}

/// Everything the bar chart draws.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Dataset label, also the y-axis title.
    pub dataset_label: String,
    /// X-axis title.
    pub x_title: String,
    /// One label per bar.
    pub labels: Vec<String>,
    /// One value per bar.
    pub values: Vec<f64>,
}

impl ChartData {
    /// Build chart data for `series`, labelling bars "Year 1", "Year 2", ...
    pub fn new(series: &GrowthSeries, table: &TranslationTable) -> Self {
        let year = table.get(keys::YEAR);
        Self {
            dataset_label: table.get(keys::NUMBER_OF_GROUPS).to_string(),
            x_title: table.get(keys::YEARS).to_string(),
            labels: (1..=series.len())
                .map(|n| format!("{} {}", year, n))
                .collect(),
            values: series.values().to_vec(),
        }
    }

    /// Number of bars.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no bars.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest value, or zero for an empty chart.
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Bar heights in `0..=BAR_RESOLUTION`.
    pub fn bar_heights(&self, scale: ScaleMode) -> Vec<u64> {
        bar_heights(&self.values, scale)
    }

    /// Y-axis tick labels, top to bottom.
    pub fn axis_ticks(&self, scale: ScaleMode) -> [String; 3] {
        let max = self.max();
        let mid = match scale {
            ScaleMode::Linear => max / 2.0,
            ScaleMode::Logarithmic => (max.ln_1p() / 2.0).exp_m1().round(),
        };
        [format_compact(max), format_compact(mid), format_compact(0.0)]
    }
}

/// Map `values` to heights relative to their maximum.
pub fn bar_heights(values: &[f64], scale: ScaleMode) -> Vec<u64> {
    let max = scale.apply(values.iter().copied().fold(0.0, f64::max));
    values
        .iter()
        .map(|&v| {
            if max <= 0.0 || !max.is_finite() {
                return if v.is_infinite() { BAR_RESOLUTION } else { 0 };
            }
            let ratio = (scale.apply(v) / max).clamp(0.0, 1.0);
            (ratio * BAR_RESOLUTION as f64).round() as u64
        })
        .collect()
}
