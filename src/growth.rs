//! Exponential growth model.
//!
//! A group reproduces (doubles) every `months_per_cycle` months. The model
//! walks year by year, applying that year's doublings to a running
//! floating-point count and recording the rounded count at each year end.

/// Number of years projected by the widget.
pub const YEARS: u32 = 10;

/// Months in a year.
const MONTHS_PER_YEAR: u32 = 12;

/// Year-by-year group counts.
///
/// Every value is a whole number stored as `f64`. Past 2^53 the values lose
/// precision, and very large parameter combinations are not representable
/// exactly at all. The widget is illustrative, so this is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthSeries {
    values: Vec<f64>,
}

impl GrowthSeries {
    /// Counts at the end of each year, first year first.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Count at the end of the final year.
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Number of projected years.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no years.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest count in the series.
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// Whole doublings applied per year.
///
/// Runs the count of `i = 0, 1, 2, ...` with `i < 12 / months_per_cycle`,
/// which is `ceil(12 / months_per_cycle)`: a 5-month cycle doubles three
/// times a year and anything past 12 months doubles once.
pub fn doublings_per_year(months_per_cycle: u32) -> u32 {
    let months = months_per_cycle.max(1);
    (MONTHS_PER_YEAR + months - 1) / months
}

/// Project group counts for `years` years.
///
/// Rounding is half away from zero. No validation is done here; the
/// pickers only offer safe ranges.
pub fn compute(initial_groups: u32, months_per_cycle: u32, years: u32) -> GrowthSeries {
    let doublings = doublings_per_year(months_per_cycle);
    let mut current = f64::from(initial_groups);
    let mut values = Vec::with_capacity(years as usize);

    for _ in 1..=years {
        for _ in 0..doublings {
            current *= 2.0;
        }
        values.push(current.round());
    }

    tracing::debug!(
        initial_groups,
        months_per_cycle,
        years,
        doublings,
        "computed growth series"
    );

    GrowthSeries { values }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarterly_cycle_reaches_two_to_the_fortieth() {
        let series = compute(1, 3, YEARS);
        assert_eq!(series.len(), 10);
        assert_eq!(series.last(), Some(1_099_511_627_776.0));
        assert_eq!(series.values()[0], 16.0);
    }

    #[test]
    fn doublings_round_fractional_cycles_up() {
        assert_eq!(doublings_per_year(1), 12);
        assert_eq!(doublings_per_year(3), 4);
        assert_eq!(doublings_per_year(5), 3);
        assert_eq!(doublings_per_year(7), 2);
        assert_eq!(doublings_per_year(12), 1);
        assert_eq!(doublings_per_year(13), 1);
        assert_eq!(doublings_per_year(24), 1);
    }

    #[test]
    fn zero_month_cycle_does_not_panic() {
        assert_eq!(doublings_per_year(0), 12);
    }

    #[test]
    fn every_picker_combination_is_well_formed() {
        for groups in 1..=20 {
            for months in 1..=24 {
                let series = compute(groups, months, YEARS);
                assert_eq!(series.len(), YEARS as usize);
                let values = series.values();
                for value in values {
                    assert!(*value >= 0.0);
                    assert_eq!(value.fract(), 0.0);
                }
                for pair in values.windows(2) {
                    assert!(pair[1] >= pair[0], "{groups}/{months}: {pair:?}");
                }
            }
        }
    }

    #[test]
    fn long_cycles_double_every_year() {
        let series = compute(3, 24, 4);
        assert_eq!(series.values(), &[6.0, 12.0, 24.0, 48.0]);
    }

    #[test]
    fn largest_combination_stays_finite() {
        let series = compute(20, 1, YEARS);
        let last = series.last().unwrap();
        assert!(last.is_finite());
        assert_eq!(last, 20.0 * 2f64.powi(120));
    }

    #[test]
    fn compute_is_idempotent() {
        assert_eq!(compute(7, 5, YEARS), compute(7, 5, YEARS));
    }

    #[test]
    fn zero_years_is_empty() {
        let series = compute(1, 3, 0);
        assert!(series.is_empty());
        assert_eq!(series.last(), None);
        assert_eq!(series.max(), 0.0);
    }
}
