//! # Decimal Helpers
//!
//! Every derived figure in a report is rounded to two decimal places at each
//! stage of the calculation, using round-half-away-from-zero. The helpers in
//! this module are the only place that rule lives.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimals kept after every calculation step.
pub const SCALE: u32 = 2;

/// Rounds to [`SCALE`] decimals, halves away from zero (`45.725` becomes `45.73`).
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a float into a decimal using its shortest round-trip representation.
///
/// Returns `None` for NaN and infinities.
pub fn from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    value.to_string().parse().ok()
}

/// Formats a value with exactly two decimals and `,` as thousands separator.
///
/// `108820.14` becomes `108,820.14`, `5.2` becomes `5.20`.
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = round2(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded.set_sign_positive(true);
    rounded.rescale(SCALE);

    let text = rounded.to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3 + 1);
    if negative {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(fraction);
    grouped
}

/// Formats a percentage without padding: `21.0` becomes `21`, `9.50` becomes `9.5`.
pub fn format_percentage(value: Decimal) -> String {
    value.normalize().to_string()
}
