//! Parallel spread view.
//!
//! [`Shifted`] adds a constant spread to every forward of a borrowed curve,
//! which multiplies every discount factor by `exp(-spread * u)`:
//!
//! ```text
//! forward_shifted(u)  = forward(u) + spread
//! integral_shifted(u) = integral(u) + spread * u
//! ```
//!
//! This is the curve behind option-adjusted spread calculations.

use crate::traits::Curve;

/// A borrowed curve with a parallel spread added to every forward.
///
/// # Example
///
/// ```rust
/// use tenor_curves::curves::{ConstantCurve, Shifted};
/// use tenor_curves::traits::Curve;
///
/// let base = ConstantCurve::new(0.03);
/// let shifted = Shifted::new(&base, 0.01); // +100 bps
///
/// assert!((shifted.forward(2.0) - 0.04).abs() < 1e-15);
/// assert!(shifted.discount(2.0) < base.discount(2.0));
/// ```
#[derive(Debug)]
pub struct Shifted<'a, C: Curve + ?Sized> {
    base: &'a C,
    spread: f64,
}

impl<C: Curve + ?Sized> Clone for Shifted<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Curve + ?Sized> Copy for Shifted<'_, C> {}

impl<'a, C: Curve + ?Sized> Shifted<'a, C> {
    /// Creates a new shifted curve.
    ///
    /// # Arguments
    ///
    /// * `base` - The underlying curve
    /// * `spread` - The spread to add (as decimal, e.g., 0.01 for 100 bps)
    pub fn new(base: &'a C, spread: f64) -> Self {
        Self { base, spread }
    }

    /// Returns the spread applied to this curve.
    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// Returns a reference to the base curve.
    pub fn base(&self) -> &C {
        self.base
    }

    /// Creates a new shifted curve with a different spread.
    #[must_use]
    pub fn with_spread(&self, spread: f64) -> Shifted<'a, C> {
        Shifted {
            base: self.base,
            spread,
        }
    }
}

impl<C: Curve + ?Sized> Curve for Shifted<'_, C> {
    fn forward(&self, u: f64) -> f64 {
        self.base.forward(u) + self.spread
    }

    fn integral(&self, u: f64) -> f64 {
        self.base.integral(u) + self.spread * u
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{ConstantCurve, PiecewiseFlat};
    use approx::assert_relative_eq;

    #[test]
    fn test_shifted_discount() {
        let base = PiecewiseFlat::new(vec![1.0, 3.0], vec![0.02, 0.04]).unwrap();
        let shifted = Shifted::new(&base, 0.01);

        let u = 2.0;
        let expected = base.discount(u) * (-0.01 * u).exp();
        assert_relative_eq!(shifted.discount(u), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_shifted_spot() {
        let base = ConstantCurve::new(0.05);
        let shifted = base.shifted(0.01);

        assert_relative_eq!(shifted.spot(1.0) - base.spot(1.0), 0.01, epsilon = 1e-15);
    }

    #[test]
    fn test_negative_spread_discounts_less() {
        let base = ConstantCurve::new(0.05);
        let shifted = Shifted::new(&base, -0.02);

        assert!(shifted.discount(1.0) > base.discount(1.0));
    }

    #[test]
    fn test_zero_spread_is_identity() {
        let base = PiecewiseFlat::new(vec![1.0, 3.0], vec![0.02, 0.04]).unwrap();
        let shifted = Shifted::new(&base, 0.0);

        for u in [0.0, 0.5, 1.0, 2.0, 5.0] {
            assert_eq!(shifted.forward(u), base.forward(u));
            assert_eq!(shifted.integral(u), base.integral(u));
        }
    }

    #[test]
    fn test_with_spread() {
        let base = ConstantCurve::new(0.05);
        let shifted = Shifted::new(&base, 0.01).with_spread(0.02);

        assert_eq!(shifted.spread(), 0.02);
        assert_relative_eq!(shifted.forward(1.0), 0.07, epsilon = 1e-15);
        assert_eq!(shifted.base().rate(), 0.05);
    }

    #[test]
    fn test_empty_base_stays_nan() {
        let base = PiecewiseFlat::empty();
        let shifted = Shifted::new(&base, 0.01);

        assert!(shifted.forward(1.0).is_nan());
        assert!(shifted.discount(1.0).is_nan());
    }
}
