//! Money helpers using rust_decimal for precision
//!
//! Monetary amounts are stored as integer cents (fixed-point, 2 fractional
//! digits) and computed as [`Decimal`]. Floats never carry money values;
//! conversion happens only at the storage and payload boundaries.

use rust_decimal::prelude::*;

/// Monetary values carry 2 fractional digits everywhere.
const DECIMAL_PLACES: u32 = 2;

/// Round a monetary amount to 2 decimal places (half-up).
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert a decimal amount to integer cents for storage.
///
/// The amount is rounded to 2 decimal places first, so `10.005` stores as
/// `1001` cents.
pub fn to_cents(value: Decimal) -> i64 {
    (round_money(value) * Decimal::ONE_HUNDRED)
        .to_i64()
        .unwrap_or(0)
}

/// Convert stored integer cents back to a 2-dp decimal amount.
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, DECIMAL_PLACES)
}

/// Round worked hours to 2 decimal places.
///
/// Hours are not money; they stay `f64` in storage, but the rounding rule
/// (banker's, matching the reference payroll figures) lives here with the
/// other fixed-point arithmetic.
pub fn round_hours(raw: f64) -> f64 {
    Decimal::from_f64_retain(raw)
        .map(|d| d.round_dp(DECIMAL_PLACES))
        .and_then(|d| d.to_f64())
        .unwrap_or(0.0)
}
