//! Closed-form bootstrap steps for money-market instruments.
//!
//! A deposit or FRA has a single unknown discount ratio, so its knot can be
//! written down directly instead of solved for. The results agree with
//! [`bootstrap0`](super::bootstrap0) on the corresponding instrument.

use tenor_math::numeric::NAN;

/// Knot repricing a deposit at simple rate `r` to time `t`, on an empty
/// curve: `(t, ln(1 + r·t) / t)`.
///
/// Returns `(NaN, NaN)` for a non-positive or non-finite `t`, or when
/// `1 + r·t <= 0`.
pub fn bootstrap_deposit(r: f64, t: f64) -> (f64, f64) {
    let growth = r * t;
    if !t.is_finite() || t <= 0.0 || growth.is_nan() || growth <= -1.0 {
        return (NAN, NAN);
    }

    (t, growth.ln_1p() / t)
}

/// Knot repricing an FRA at simple rate `r` over `[t1, t2]`, on a curve
/// whose last knot is `t1`: `(t2, ln(1 + r·τ) / τ)` with `τ = t2 - t1`.
///
/// Returns `(NaN, NaN)` for a non-positive or non-finite `τ`, or when
/// `1 + r·τ <= 0`.
pub fn bootstrap_fra(r: f64, t1: f64, t2: f64) -> (f64, f64) {
    let tau = t2 - t1;
    let growth = r * tau;
    if !tau.is_finite() || tau <= 0.0 || growth.is_nan() || growth <= -1.0 {
        return (NAN, NAN);
    }

    (t2, growth.ln_1p() / tau)
}
