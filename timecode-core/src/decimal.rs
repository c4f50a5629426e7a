//! Decimal arithmetic for seconds ↔ frames conversion
//!
//! Rates such as 30000/1001 have no finite binary representation, and multiplying
//! them as `f64` drifts by a frame at some second boundaries. Values are instead
//! taken at their shortest round-tripping decimal representation (the one `Display`
//! prints) and combined as [`Decimal`]s.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Shortest decimal representation of `value`.
///
/// Returns `None` for negative or non-finite input, and for magnitudes `Decimal`
/// cannot hold.
pub fn from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }

    // f64 Display never uses exponent notation
    Decimal::from_str(&value.to_string()).ok()
}

/// `seconds * fps`, truncated toward zero.
///
/// Returns `None` when either value has no decimal form or the product does not fit a `u64`.
pub fn frames_in(seconds: f64, fps: f64) -> Option<u64> {
    from_f64(seconds)?
        .checked_mul(from_f64(fps)?)?
        .trunc()
        .to_u64()
}

/// `numerator / fps` rounded half away from zero to `dp` decimal places.
///
/// Returns `None` for a zero or unrepresentable rate, or an out of range quotient.
pub fn div_round(numerator: Decimal, fps: f64, dp: u32) -> Option<Decimal> {
    numerator
        .checked_div(from_f64(fps)?)
        .map(|q| q.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
}
