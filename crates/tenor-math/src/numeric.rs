//! Numeric constants and sentinel tests.
//!
//! Curve queries, valuation and the single bootstrap step never fail: they
//! signal "no value" by returning [`NAN`]. These helpers keep the checks
//! uniform across crates.

/// Quiet NaN, the "no value" sentinel.
pub const NAN: f64 = f64::NAN;

/// Positive infinity.
pub const INFINITY: f64 = f64::INFINITY;

/// Machine epsilon for `f64`.
pub const EPSILON: f64 = f64::EPSILON;

/// Square root of machine epsilon, `2^-26`.
///
/// Default solver tolerance and the repricing tolerance for bootstrapped
/// curves.
pub const SQRT_EPSILON: f64 = 1.0 / 67_108_864.0;

/// Returns `true` if `x` is the NaN sentinel.
#[inline]
#[must_use]
pub fn is_nan(x: f64) -> bool {
    x.is_nan()
}

/// Returns `true` if either half of a `(time, rate)` pair is the sentinel.
#[inline]
#[must_use]
pub fn is_sentinel_pair(pair: (f64, f64)) -> bool {
    pair.0.is_nan() || pair.1.is_nan()
}

/// Absolute comparison within `tol`. NaN never compares equal.
#[inline]
#[must_use]
pub fn approx_eq(x: f64, y: f64, tol: f64) -> bool {
    (x - y).abs() <= tol
}
