//! Display formatting for report values.
//!
//! The output mirrors what en-US number formatting produces for the same
//! values, including the sign sitting after the currency symbol (`$-2,071`).

use rust_decimal::RoundingStrategy;
use rust_decimal_macros::dec;

use crate::types::{Money, Rate};

/// Shown in place of a value with no decimal rendering: a ratio whose
/// denominator was zero, or a value too large to round or scale.
pub const UNDEFINED: &str = "n/a";

/// Whole dollars with comma grouping: `12345.4` -> `$12,345`.
///
/// Halves round towards positive infinity, so `-2.5` becomes `$-2`. Any
/// negative input keeps its sign even when it rounds to zero: `-0.4` is
/// `$-0`, as en-US formatting of a negative zero prints it.
pub fn format_currency(value: Money) -> String {
    let Some(shifted) = value.checked_add(dec!(0.5)) else {
        return UNDEFINED.to_string();
    };
    let mut rounded = shifted.floor();
    rounded.rescale(0);

    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    format!("${}{}", sign, group_thousands(&rounded.abs().to_string()))
}

/// Ratio as a percentage with one fractional digit: `0.2056` -> `20.6%`.
pub fn format_percentage(value: Rate) -> String {
    let Some(scaled) = value.checked_mul(dec!(100)) else {
        return UNDEFINED.to_string();
    };
    let mut pct = scaled.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    pct.rescale(1);
    format!("{}%", pct)
}

/// Like [`format_percentage`], rendering an undefined ratio as `n/a`.
pub fn format_optional_percentage(value: Option<Rate>) -> String {
    match value {
        Some(v) => format_percentage(v),
        None => UNDEFINED.to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
