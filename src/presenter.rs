//! Number and sentence formatting for the widget.
//!
//! Two formatting paths exist. [`format`] produces the narrative, localized
//! form used in the result line ("1,099,511.63 million"); [`tooltip`] is the
//! same without digit grouping.
//! [`format_compact`] produces short, untranslated labels for axis ticks
//! and bar values ("1.1M").

use crate::growth::GrowthSeries;
use crate::i18n::{keys, Language, TranslationTable};

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;

/// Group the digits of an unsigned integer string with `separator`.
pub fn group_digits(digits: &str, separator: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Fixed-point digits of `value`, rounding ties away from zero.
///
/// Returns the integer and fractional digit strings separately.
fn to_fixed(value: f64, digits: usize) -> (String, String) {
    let units = (value * 10f64.powi(digits as i32)).round();
    let mut all = format!("{:.0}", units);
    if all.len() <= digits {
        all = format!("{:0>width$}", all, width = digits + 1);
    }
    let frac = all.split_off(all.len() - digits);
    (all, frac)
}

/// Format `scaled` with two decimals, grouping the integer part.
fn format_scaled(scaled: f64, language: Language) -> String {
    let (int_part, dec_part) = to_fixed(scaled, 2);
    format!(
        "{}.{}",
        group_digits(&int_part, language.group_separator()),
        dec_part
    )
}

/// `digits` decimals, no grouping.
fn fixed(value: f64, digits: usize) -> String {
    let (int_part, dec_part) = to_fixed(value, digits);
    format!("{}.{}", int_part, dec_part)
}

/// Format a group count for the result sentence.
///
/// Values of a million and up are shown in millions, values of a thousand
/// and up in thousands, both with two decimals and a translated scale word.
/// Smaller values are shown as grouped whole numbers.
pub fn format(value: f64, table: &TranslationTable) -> String {
    if !value.is_finite() {
        return "∞".to_string();
    }
    let language = table.language();
    if value >= MILLION {
        format!(
            "{} {}",
            format_scaled(value / MILLION, language),
            table.get(keys::MILLION)
        )
    } else if value >= THOUSAND {
        format!(
            "{} {}",
            format_scaled(value / THOUSAND, language),
            table.get(keys::THOUSAND)
        )
    } else {
        group_digits(&format!("{:.0}", value.round()), language.group_separator())
    }
}

/// Format a value as a compact axis or bar label.
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        "∞".to_string()
    } else if value >= MILLION {
        format!("{}M", fixed(value / MILLION, 1))
    } else if value >= THOUSAND {
        format!("{}K", fixed(value / THOUSAND, 1))
    } else {
        format!("{}", value)
    }
}

/// Singular or plural interval unit for the prompt.
pub fn unit_word(months_per_cycle: u32, table: &TranslationTable) -> &'static str {
    if months_per_cycle > 1 {
        table.get(keys::MONTHS)
    } else {
        table.get(keys::MONTH)
    }
}

/// Result sentence for the final year of `series`.
pub fn summary(series: &GrowthSeries, table: &TranslationTable) -> String {
    let last = series.last().unwrap_or(0.0);
    format!(
        "{} {} {}",
        table.get(keys::AFTER_YEARS),
        format(last, table),
        table.get(keys::GROUPS_RESULT)
    )
}

/// Tooltip text for one bar, prefixed by the dataset label.
///
/// Uses the scale words of [`format`] but leaves the number ungrouped.
pub fn tooltip(label: &str, value: f64, table: &TranslationTable) -> String {
    let text = if !value.is_finite() {
        "∞".to_string()
    } else if value >= MILLION {
        format!("{} {}", fixed(value / MILLION, 2), table.get(keys::MILLION))
    } else if value >= THOUSAND {
        format!("{} {}", fixed(value / THOUSAND, 2), table.get(keys::THOUSAND))
    } else {
        format!("{}", value)
    };
    if label.is_empty() {
        text
    } else {
        format!("{}: {}", label, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::{compute, YEARS};

    fn en() -> TranslationTable {
        TranslationTable::for_language(Language::En)
    }

    fn es() -> TranslationTable {
        TranslationTable::for_language(Language::Es)
    }

    #[test]
    fn group_digits_inserts_separators() {
        assert_eq!(group_digits("0", ','), "0");
        assert_eq!(group_digits("999", ','), "999");
        assert_eq!(group_digits("1000", ','), "1,000");
        assert_eq!(group_digits("1099511", ','), "1,099,511");
        assert_eq!(group_digits("123456", '.'), "123.456");
    }

    #[test]
    fn format_small_values_without_scale_word() {
        assert_eq!(format(500.0, &en()), "500");
        assert_eq!(format(0.0, &en()), "0");
        assert_eq!(format(999.0, &en()), "999");
    }

    #[test]
    fn format_thousands() {
        assert_eq!(format(2500.0, &en()), "2.50 thousand");
        assert_eq!(format(1000.0, &en()), "1.00 thousand");
        assert_eq!(format(65_536.0, &en()), "65.54 thousand");
    }

    #[test]
    fn format_millions_groups_integer_part() {
        assert_eq!(format(1_099_511_627_776.0, &en()), "1,099,511.63 million");
        assert_eq!(format(1_048_576.0, &en()), "1.05 million");
    }

    #[test]
    fn format_uses_language_number_style() {
        assert_eq!(format(1_099_511_627_776.0, &es()), "1.099.511.63 millones");
        assert_eq!(format(2500.0, &es()), "2.50 mil");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format(2125.0, &en()), "2.13 thousand");
        assert_eq!(format(1_125_000.0, &en()), "1.13 million");
        assert_eq!(format_compact(1250.0), "1.3K");
        assert_eq!(format_compact(2_250_000.0), "2.3M");
        assert_eq!(format(999.5, &en()), "1,000");
    }

    #[test]
    fn fixed_pads_small_fractions() {
        assert_eq!(fixed(0.05, 2), "0.05");
        assert_eq!(fixed(1.0, 1), "1.0");
        assert_eq!(to_fixed(12.345, 0), ("12".to_string(), String::new()));
    }

    #[test]
    fn format_non_finite() {
        assert_eq!(format(f64::INFINITY, &en()), "∞");
        assert_eq!(format_compact(f64::INFINITY), "∞");
    }

    #[test]
    fn compact_labels() {
        assert_eq!(format_compact(1_200_000.0), "1.2M");
        assert_eq!(format_compact(3_400.0), "3.4K");
        assert_eq!(format_compact(500.0), "500");
        assert_eq!(format_compact(0.0), "0");
    }

    #[test]
    fn unit_word_singular_and_plural() {
        assert_eq!(unit_word(1, &en()), "month");
        assert_eq!(unit_word(2, &en()), "months");
        assert_eq!(unit_word(24, &en()), "months");
        assert_eq!(unit_word(1, &es()), "mes");
        assert_eq!(unit_word(3, &es()), "meses");
    }

    #[test]
    fn summary_for_default_parameters() {
        let series = compute(1, 3, YEARS);
        assert_eq!(
            summary(&series, &en()),
            "After 10 years: 1,099,511.63 million groups"
        );
    }

    #[test]
    fn tooltip_prefixes_label() {
        assert_eq!(
            tooltip("Number of Groups", 16.0, &en()),
            "Number of Groups: 16"
        );
        assert_eq!(tooltip("", 2500.0, &en()), "2.50 thousand");
        assert_eq!(
            tooltip("Number of Groups", 1_099_511_627_776.0, &en()),
            "Number of Groups: 1099511.63 million"
        );
        assert_eq!(tooltip("", 2125.0, &es()), "2.13 mil");
    }
}
