//! Widget configuration.

use crate::growth::YEARS;

/// Largest initial group count offered by the picker.
pub const MAX_INITIAL_GROUPS: u32 = 20;

/// Longest reproduction interval offered by the picker, in months.
pub const MAX_MONTHS: u32 = 24;

/// Options the widget is constructed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Requested language code; unsupported codes fall back to English.
    pub language: String,
    /// Initially selected group count.
    pub initial_groups: u32,
    /// Initially selected reproduction interval in months.
    pub months_per_cycle: u32,
    /// Number of projected years.
    pub years: u32,
    /// Upper bound of the group picker.
    pub max_initial_groups: u32,
    /// Upper bound of the interval picker.
    pub max_months: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            initial_groups: 1,
            months_per_cycle: 3,
            years: YEARS,
            max_initial_groups: MAX_INITIAL_GROUPS,
            max_months: MAX_MONTHS,
        }
    }
}

impl WidgetConfig {
    /// Override the language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Override the initial selections, clamped to the picker ranges.
    pub fn with_selection(mut self, initial_groups: u32, months_per_cycle: u32) -> Self {
        self.initial_groups = initial_groups.clamp(1, self.max_initial_groups);
        self.months_per_cycle = months_per_cycle.clamp(1, self.max_months);
        self
    }
}
