//! Flat extrapolation view.
//!
//! During a bootstrap the solver evaluates an instrument on "the curve built
//! so far, followed by a trial forward `f` from the last knot `t` onwards".
//! [`Extrapolated`] expresses that without copying the curve:
//!
//! - for `u <= t` it reads the base curve;
//! - for `u > t` the forward is `f` and
//!   `integral(u) = base.integral(t) + f * (u - t)`.
//!
//! A pivot at `t == 0` never touches the base curve, so an empty curve can be
//! extrapolated from the origin. This is how the first bootstrap step works.

use tenor_math::numeric::NAN;

use crate::traits::Curve;

/// A borrowed curve extended flat at `f` past time `t`.
///
/// # Example
///
/// ```rust
/// use tenor_curves::curves::{extrapolate, PiecewiseFlat};
/// use tenor_curves::traits::Curve;
///
/// let curve = PiecewiseFlat::new(vec![1.0], vec![0.02]).unwrap();
/// let view = extrapolate(&curve, 1.0, 0.05);
///
/// assert_eq!(view.forward(0.5), 0.02);
/// assert_eq!(view.forward(2.0), 0.05);
/// assert!((view.integral(2.0) - 0.07).abs() < 1e-15);
/// ```
#[derive(Debug)]
pub struct Extrapolated<'a, C: Curve + ?Sized> {
    base: &'a C,
    t: f64,
    f: f64,
}

impl<C: Curve + ?Sized> Clone for Extrapolated<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Curve + ?Sized> Copy for Extrapolated<'_, C> {}

impl<'a, C: Curve + ?Sized> Extrapolated<'a, C> {
    /// Creates a view of `base` extended flat at `f` past `t`.
    pub fn new(base: &'a C, t: f64, f: f64) -> Self {
        Self { base, t, f }
    }

    /// Returns the underlying curve.
    pub fn base(&self) -> &C {
        self.base
    }

    /// Time from which the flat rate applies.
    pub fn pivot(&self) -> f64 {
        self.t
    }

    /// The flat rate applied past the pivot.
    pub fn rate(&self) -> f64 {
        self.f
    }

    /// Same pivot, different flat rate.
    #[must_use]
    pub fn with_rate(&self, f: f64) -> Self {
        Self {
            base: self.base,
            t: self.t,
            f,
        }
    }

    fn pivot_integral(&self) -> f64 {
        if self.t == 0.0 {
            0.0
        } else {
            self.base.integral(self.t)
        }
    }
}

impl<C: Curve + ?Sized> Curve for Extrapolated<'_, C> {
    fn forward(&self, u: f64) -> f64 {
        if u.is_nan() || u < 0.0 {
            return NAN;
        }
        if u > self.t || self.t == 0.0 {
            self.f
        } else {
            self.base.forward(u)
        }
    }

    fn integral(&self, u: f64) -> f64 {
        if u.is_nan() || u < 0.0 {
            return NAN;
        }
        if u > self.t {
            self.pivot_integral() + self.f * (u - self.t)
        } else if u == 0.0 {
            0.0
        } else {
            self.base.integral(u)
        }
    }
}

/// Views `curve` as extended flat at `f` past `t`.
pub fn extrapolate<C: Curve + ?Sized>(curve: &C, t: f64, f: f64) -> Extrapolated<'_, C> {
    Extrapolated::new(curve, t, f)
}
