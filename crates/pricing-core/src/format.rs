// File: crates/pricing-core/src/format.rs
// Summary: Number and date formatting for tick labels, legend and tooltip text.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use thousands::{digits, Separable, SeparatorPolicy};

/// Divider used when the caller does not pass one.
pub const DEFAULT_DIVIDER: &str = " ";

/// Insert `divider` every three digits from the right of the integer part.
///
/// Whitespace already present in the rendered value is dropped first, so a
/// pre-formatted "12 345" is regrouped instead of producing double spaces.
/// Negative and non-finite values go through the same rule applied to their
/// `Display` output (`-1234` -> `-1 234`, `NaN` stays `NaN`).
pub fn to_numeric_string_with_divider(value: impl Display, divider: &str) -> String {
    let compact: String = value
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let policy = SeparatorPolicy {
        separator: divider,
        groups: &[3],
        digits: digits::ASCII_DECIMAL,
    };
    compact.separate_by_policy(policy)
}

/// [`to_numeric_string_with_divider`] with the default single-space divider.
pub fn to_numeric_string(value: impl Display) -> String {
    to_numeric_string_with_divider(value, DEFAULT_DIVIDER)
}

/// Value-axis tick label: rounded to an integer, then grouped.
pub fn format_price(value: f64) -> String {
    format_price_with_divider(value, DEFAULT_DIVIDER)
}

pub fn format_price_with_divider(value: f64, divider: &str) -> String {
    let rounded = value.round();
    // -0.0 prints as "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    to_numeric_string_with_divider(rounded, divider)
}

fn to_datetime(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(ms as i64)
}

/// Time-axis tick label, e.g. `05 Mar`.
pub fn format_day_month(ms: f64) -> String {
    to_datetime(ms)
        .map(|d| d.format("%d %b").to_string())
        .unwrap_or_default()
}

/// Tooltip header, e.g. `05 March 2021`.
pub fn format_full_date(ms: f64) -> String {
    to_datetime(ms)
        .map(|d| d.format("%d %B %Y").to_string())
        .unwrap_or_default()
}
