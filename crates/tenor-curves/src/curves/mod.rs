//! Curve implementations.
//!
//! This module provides concrete curve types:
//!
//! - [`ConstantCurve`]: One forward rate everywhere; bootstrap seed and the
//!   curve behind price-at-yield
//! - [`PiecewiseFlat`]: Owned knots `(t_k, f_k)` with flat forwards between them
//! - [`Extrapolated`]: Borrowing view that replaces a curve past `t` by a flat rate
//! - [`Shifted`]: Borrowing view that adds a parallel spread to every forward

mod constant;
mod extrapolated;
mod pwflat;
mod shifted;

pub use constant::ConstantCurve;
pub use extrapolated::{extrapolate, Extrapolated};
pub use pwflat::PiecewiseFlat;
pub use shifted::Shifted;
