//! Decimal currency formatting.
//!
//! Fill costs are carried unrounded as f64 through the estimator; rounding to
//! cents happens only here, at the presentation edge.

use rust_decimal::prelude::*;
use rust_decimal::RoundingStrategy;

use super::num::group_thousands;

/// Convert an f64 dollar amount to a `Decimal` rounded half-up to cents.
///
/// Non-finite input maps to zero.
pub fn usd_from_f64(amount: f64) -> Decimal {
    Decimal::from_f64(amount)
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a dollar amount as `$1,234.56`. Always two decimal places.
pub fn display_usd(amount: &Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{sign}${}.{fraction}", group_thousands(integer))
}

/// Format a whole-cent price as `42¢`.
pub fn display_cents(cents: u32) -> String {
    format!("{cents}¢")
}
