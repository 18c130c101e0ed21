//! Piecewise-flat forward curve.
//!
//! A curve stored as knots `(t_k, f_k)`. The forward rate `f_k` applies on
//! `(t_{k-1}, t_k]` with `t_0 = 0`, and the last rate continues flat past
//! the last knot:
//!
//! ```text
//! forward
//!   f_3 |                 ┌────────────┬ ─ ─ ─ ─ (flat extrapolation)
//!   f_1 |──────┐          │            │
//!   f_2 |      └──────────┘            │
//!       └──────┴──────────┴────────────┴──────────▶ t
//!       0     t_1        t_2          t_3
//! ```
//!
//! Knots are append-only; [`PiecewiseFlat::push_back`] rejects a time before
//! the current last time, which keeps every query a single forward scan.

use serde::{Deserialize, Serialize};
use tenor_math::numeric::NAN;

use crate::error::{CurveError, CurveResult};
use crate::traits::Curve;

/// Piecewise-flat forward curve.
///
/// # Example
///
/// ```rust
/// use tenor_curves::curves::PiecewiseFlat;
/// use tenor_curves::traits::Curve;
///
/// let mut curve = PiecewiseFlat::empty();
/// curve.push_back(1.0, 0.02).unwrap();
/// curve.push_back(2.0, 0.03).unwrap();
///
/// assert_eq!(curve.forward(0.5), 0.02);
/// assert_eq!(curve.forward(1.0), 0.02);
/// assert_eq!(curve.forward(1.5), 0.03);
/// assert_eq!(curve.forward(5.0), 0.03); // flat past the last knot
/// assert!((curve.integral(1.5) - 0.035).abs() < 1e-15);
///
/// // Times must not go backwards.
/// assert!(curve.push_back(1.5, 0.04).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Knots", into = "Knots")]
pub struct PiecewiseFlat {
    times: Vec<f64>,
    rates: Vec<f64>,
}

/// Wire form: two equal-length sequences.
#[derive(Serialize, Deserialize)]
struct Knots {
    times: Vec<f64>,
    rates: Vec<f64>,
}

impl TryFrom<Knots> for PiecewiseFlat {
    type Error = CurveError;

    fn try_from(knots: Knots) -> CurveResult<Self> {
        Self::new(knots.times, knots.rates)
    }
}

impl From<PiecewiseFlat> for Knots {
    fn from(curve: PiecewiseFlat) -> Self {
        Self {
            times: curve.times,
            rates: curve.rates,
        }
    }
}

impl PiecewiseFlat {
    /// Creates a curve with no knots.
    ///
    /// Every query on an empty curve returns `NaN`.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a curve from knot times and forward rates.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequences differ in length, contain
    /// non-finite values or negative times, or if the times decrease.
    pub fn new(times: Vec<f64>, rates: Vec<f64>) -> CurveResult<Self> {
        if times.len() != rates.len() {
            return Err(CurveError::invalid_value(format!(
                "times and rates must have the same length: {} vs {}",
                times.len(),
                rates.len()
            )));
        }

        let mut curve = Self {
            times: Vec::with_capacity(times.len()),
            rates: Vec::with_capacity(rates.len()),
        };
        for (t, f) in times.into_iter().zip(rates) {
            curve.push_back(t, f)?;
        }

        Ok(curve)
    }

    /// Appends a knot.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NonMonotonicTimes`] if `t` is less than the last
    /// knot time, and [`CurveError::InvalidValue`] for a negative or
    /// non-finite time or a non-finite rate.
    pub fn push_back(&mut self, t: f64, f: f64) -> CurveResult<&mut Self> {
        if !t.is_finite() || t < 0.0 {
            return Err(CurveError::invalid_value(format!(
                "knot time must be finite and non-negative, got {t}"
            )));
        }
        if !f.is_finite() {
            return Err(CurveError::invalid_value(format!(
                "forward rate must be finite, got {f}"
            )));
        }
        if let Some(&last) = self.times.last() {
            if t < last {
                return Err(CurveError::non_monotonic_times(last, t));
            }
        }

        self.times.push(t);
        self.rates.push(f);

        Ok(self)
    }

    /// Removes every knot. Returns `true` if the curve was already empty.
    pub fn clear(&mut self) -> bool {
        let was_empty = self.times.is_empty();

        self.times.clear();
        self.rates.clear();

        was_empty
    }

    /// Number of knots.
    #[must_use]
    pub fn size(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the curve has no knots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Knot times.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Forward rates, one per knot.
    #[must_use]
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Last knot, if any.
    #[must_use]
    pub fn back(&self) -> Option<(f64, f64)> {
        Some((*self.times.last()?, *self.rates.last()?))
    }

    /// Iterates over `(time, rate)` knots.
    pub fn knots(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.rates.iter().copied())
    }
}

impl Curve for PiecewiseFlat {
    fn forward(&self, u: f64) -> f64 {
        if self.is_empty() || u.is_nan() || u < 0.0 {
            return NAN;
        }

        // First knot with t_k >= u, or the last knot past the end.
        let k = self.times.partition_point(|&t| t < u);
        self.rates[k.min(self.rates.len() - 1)]
    }

    fn integral(&self, u: f64) -> f64 {
        if self.is_empty() || u.is_nan() || u < 0.0 {
            return NAN;
        }

        let mut sum = 0.0;
        let mut t0 = 0.0;
        for (t, f) in self.knots() {
            if u <= t {
                return sum + f * (u - t0);
            }
            sum += f * (t - t0);
            t0 = t;
        }

        let last = self.rates[self.rates.len() - 1];
        sum + last * (u - t0)
    }
}
