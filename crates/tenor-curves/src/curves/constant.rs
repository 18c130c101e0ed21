//! Constant forward curve.

use serde::{Deserialize, Serialize};
use tenor_math::numeric::NAN;

use crate::traits::Curve;

/// A curve whose forward rate is the same at every time.
///
/// The degenerate zero-knot curve. Used as the seed of a bootstrap and to
/// price an instrument at a flat yield.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConstantCurve {
    rate: f64,
}

impl ConstantCurve {
    /// Creates a constant curve at `rate`.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Returns the forward rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Curve for ConstantCurve {
    fn forward(&self, u: f64) -> f64 {
        if u >= 0.0 {
            self.rate
        } else {
            NAN
        }
    }

    fn integral(&self, u: f64) -> f64 {
        if u >= 0.0 {
            self.rate * u
        } else {
            NAN
        }
    }
}
