//! Curve bootstrap algorithms.
//!
//! Builds a [`PiecewiseFlat`](crate::curves::PiecewiseFlat) curve that
//! reprices a set of instruments, one knot per instrument, in input order:
//!
//! ```text
//! for each (instrument k, price p_k):
//!     t      = last knot time (t_0 initially)
//!     f_k    = root of  present(instrument k, curve extended flat at f past t) - p_k
//!     push   (maturity_k, f_k)
//! ```
//!
//! Later instruments never move earlier knots, so each step is a
//! one-dimensional root search.
//!
//! # Entry Points
//!
//! - [`bootstrap0`]: one step; returns `(NaN, NaN)` when no knot can be found
//! - [`bootstrap`]: the whole loop over slices; fails on the first bad step
//! - [`SequentialBootstrapper`]: builder over boxed instruments with a
//!   repricing report
//! - [`bootstrap_deposit`], [`bootstrap_fra`]: closed forms for money-market
//!   instruments
//!
//! # Example
//!
//! ```rust
//! use tenor_curves::bootstrap::bootstrap;
//! use tenor_curves::instruments::Deposit;
//!
//! let deposits = [
//!     Deposit::new(0.040, 0.5).unwrap(),
//!     Deposit::new(0.045, 1.0).unwrap(),
//! ];
//! let curve = bootstrap(&deposits, &[1.0, 1.0], 0.0, 0.03).unwrap();
//!
//! assert_eq!(curve.times(), &[0.5, 1.0]);
//! ```

mod closed_form;
mod sequential;

pub use closed_form::{bootstrap_deposit, bootstrap_fra};
pub use sequential::{
    bootstrap, bootstrap0, bootstrap0_with, bootstrap_with, BootstrapConfig,
    SequentialBootstrapper, DEFAULT_INITIAL_GUESS, FALLBACK_GUESS,
};
