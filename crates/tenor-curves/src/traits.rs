//! Core traits for forward curve operations.
//!
//! This module defines the [`Curve`] trait implemented by every curve in the
//! crate. A curve is fully described by its instantaneous forward rate and
//! the integral of that rate from zero; discount factors and spot rates are
//! derived from the integral.

use tenor_math::numeric::NAN;

use crate::curves::{Extrapolated, Shifted};

/// The core trait for forward curves.
///
/// # Required Methods
///
/// - [`forward`](Curve::forward): Instantaneous forward rate at time `u`
/// - [`integral`](Curve::integral): `∫₀ᵘ forward(s) ds`
///
/// # Derived Methods
///
/// - [`discount`](Curve::discount): `exp(-integral(u))`
/// - [`spot`](Curve::spot): `integral(u) / u`
///
/// All queries are total. Degenerate inputs (an empty curve, negative or
/// NaN times) produce `NaN` instead of an error, so pricing loops can test
/// for failure without branching on `Result`s.
///
/// # Example
///
/// ```rust
/// use tenor_curves::curves::ConstantCurve;
/// use tenor_curves::traits::Curve;
///
/// let curve = ConstantCurve::new(0.05);
///
/// assert!((curve.discount(2.0) - (-0.1_f64).exp()).abs() < 1e-15);
/// assert!((curve.spot(2.0) - 0.05).abs() < 1e-15);
/// ```
pub trait Curve: Send + Sync {
    /// Returns the forward rate applying at time `u`.
    fn forward(&self, u: f64) -> f64;

    /// Returns the integral of the forward rate from 0 to `u`.
    fn integral(&self, u: f64) -> f64;

    /// Returns the discount factor `exp(-integral(u))`.
    fn discount(&self, u: f64) -> f64 {
        (-self.integral(u)).exp()
    }

    /// Returns the continuously compounded spot rate `integral(u) / u`.
    ///
    /// `NaN` for `u <= 0`.
    fn spot(&self, u: f64) -> f64 {
        if u > 0.0 {
            self.integral(u) / u
        } else {
            NAN
        }
    }

    /// Discount factor at `u` on this curve extended flat at `f` past `t`.
    fn discount_with(&self, u: f64, t: f64, f: f64) -> f64
    where
        Self: Sized,
    {
        Extrapolated::new(self, t, f).discount(u)
    }

    /// Returns a view of this curve extended flat at `f` past `t`.
    fn extrapolated(&self, t: f64, f: f64) -> Extrapolated<'_, Self>
    where
        Self: Sized,
    {
        Extrapolated::new(self, t, f)
    }

    /// Returns a view of this curve with `spread` added to every forward.
    fn shifted(&self, spread: f64) -> Shifted<'_, Self>
    where
        Self: Sized,
    {
        Shifted::new(self, spread)
    }
}

impl<C: Curve + ?Sized> Curve for &C {
    fn forward(&self, u: f64) -> f64 {
        (**self).forward(u)
    }

    fn integral(&self, u: f64) -> f64 {
        (**self).integral(u)
    }

    fn discount(&self, u: f64) -> f64 {
        (**self).discount(u)
    }

    fn spot(&self, u: f64) -> f64 {
        (**self).spot(u)
    }
}

impl<C: Curve + ?Sized> Curve for Box<C> {
    fn forward(&self, u: f64) -> f64 {
        (**self).forward(u)
    }

    fn integral(&self, u: f64) -> f64 {
        (**self).integral(u)
    }

    fn discount(&self, u: f64) -> f64 {
        (**self).discount(u)
    }

    fn spot(&self, u: f64) -> f64 {
        (**self).spot(u)
    }
}
