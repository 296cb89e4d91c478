//! Zero-guarded formula helpers shared by every aggregator.
//!
//! All derived metrics in the core go through these so missing or zero source
//! values degrade to the documented defaults instead of raising.

use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// `numerator / denominator`, 0 when the denominator is zero.
pub fn safe_divide(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

/// `part / whole * 100`, 0 when the whole is zero.
pub fn safe_percentage(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        part / whole * dec!(100)
    }
}

/// Period-over-period variance as a percentage of the previous value.
///
/// `(current - previous) / |previous| * 100`, 0 when previous is zero.
pub fn variance_percentage(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        Decimal::ZERO
    } else {
        (current - previous) / previous.abs() * dec!(100)
    }
}

/// Clamps a percentage into the [0, 100] range.
pub fn clamp_percentage(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO).min(dec!(100))
}

/// Converts a decimal percentage to the 0-100 float the DTOs expose.
pub fn percentage_to_f64(value: Decimal) -> f64 {
    decimal_to_f64(value.round_dp(DISPLAY_DECIMAL_PRECISION))
}

pub fn decimal_to_f64(d: Decimal) -> f64 {
    d.to_string().parse().unwrap_or(0.0)
}
