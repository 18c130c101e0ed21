//! Valuation of instruments against a curve.
//!
//! Every measure is a single pass over the instrument's flows:
//!
//! ```text
//! present   =  Σ c_i D(u_i)
//! duration  = -Σ u_i c_i D(u_i)      d(present)/d(parallel shift)
//! convexity =  Σ u_i² c_i D(u_i)     second derivative
//! ```
//!
//! The solvers here ([`yield_from_price`], [`oas`]) return the raw
//! [`SolverResult`]; callers decide what a non-converged solve means.

use serde::{Deserialize, Serialize};
use tenor_math::solvers::{Secant, SolverConfig, SolverResult};

use crate::curves::{ConstantCurve, Shifted};
use crate::instruments::Instrument;
use crate::traits::Curve;

/// Present value of the instrument's flows.
pub fn present<I, C>(instrument: &I, curve: &C) -> f64
where
    I: Instrument + ?Sized,
    C: Curve + ?Sized,
{
    instrument
        .flows()
        .map(|(u, c)| c * curve.discount(u))
        .sum()
}

/// Derivative of present value with respect to a parallel shift of the
/// forward curve.
pub fn duration<I, C>(instrument: &I, curve: &C) -> f64
where
    I: Instrument + ?Sized,
    C: Curve + ?Sized,
{
    -instrument
        .flows()
        .map(|(u, c)| u * c * curve.discount(u))
        .sum::<f64>()
}

/// Second derivative of present value with respect to a parallel shift.
pub fn convexity<I, C>(instrument: &I, curve: &C) -> f64
where
    I: Instrument + ?Sized,
    C: Curve + ?Sized,
{
    instrument
        .flows()
        .map(|(u, c)| u * u * c * curve.discount(u))
        .sum()
}

/// Duration divided by present value.
///
/// Negative for a long position; its magnitude is the PV-weighted average
/// flow time.
pub fn macaulay_duration<I, C>(instrument: &I, curve: &C) -> f64
where
    I: Instrument + ?Sized,
    C: Curve + ?Sized,
{
    duration(instrument, curve) / present(instrument, curve)
}

/// Price at a constant continuously compounded yield `y`.
pub fn price<I: Instrument + ?Sized>(instrument: &I, y: f64) -> f64 {
    present(instrument, &ConstantCurve::new(y))
}

/// Constant yield at which the instrument prices to `p`.
///
/// Secant seeded at `(y0, y0 + 0.1)`.
pub fn yield_from_price<I: Instrument + ?Sized>(
    instrument: &I,
    p: f64,
    y0: f64,
    config: &SolverConfig,
) -> SolverResult {
    Secant::new(y0, y0 + 0.1)
        .with_config(config)
        .solve(|y| price(instrument, y) - p)
}

/// Option-adjusted spread: the parallel shift of `curve` at which the
/// instrument prices to `p`.
///
/// Secant seeded at `(s0, s0 + 0.01)`.
pub fn oas<I, C>(instrument: &I, curve: &C, p: f64, s0: f64, config: &SolverConfig) -> SolverResult
where
    I: Instrument + ?Sized,
    C: Curve + ?Sized,
{
    Secant::new(s0, s0 + 0.01)
        .with_config(config)
        .solve(|s| present(instrument, &Shifted::new(curve, s)) - p)
}

/// Continuously compounded rate equivalent to yield `y` compounded `n`
/// times a year: `(1 + y/n)^n = e^r`.
pub fn continuous_rate(y: f64, n: u32) -> f64 {
    let n = f64::from(n);
    n * (y / n).ln_1p()
}

/// Yield compounded `n` times a year equivalent to continuous rate `r`.
pub fn compound_yield(r: f64, n: u32) -> f64 {
    let n = f64::from(n);
    n * (r / n).exp_m1()
}

/// Valuation measures of one instrument on one curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    /// Present value.
    pub present: f64,
    /// Sensitivity to a parallel forward shift.
    pub duration: f64,
    /// Duration over present value.
    pub macaulay_duration: f64,
    /// Second-order sensitivity.
    pub convexity: f64,
}

/// Computes every [`Analytics`] measure.
pub fn analyze<I, C>(instrument: &I, curve: &C) -> Analytics
where
    I: Instrument + ?Sized,
    C: Curve + ?Sized,
{
    let present = present(instrument, curve);
    let duration = duration(instrument, curve);

    Analytics {
        present,
        duration,
        macaulay_duration: duration / present,
        convexity: convexity(instrument, curve),
    }
}
