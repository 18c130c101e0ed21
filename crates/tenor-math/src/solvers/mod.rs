//! Root-finding algorithms.
//!
//! Curve bootstrapping, yield and spread inversion all reduce to finding
//! the root of a scalar function of one rate. This module provides the
//! derivative-free secant method used for all of them:
//!
//! - [`Secant`]: solver instance holding two seed points, a tolerance and an
//!   iteration budget. [`Secant::solve`] never fails; it reports how it
//!   terminated through [`SolverResult`].
//! - [`secant`]: `Result`-returning wrapper for callers that treat
//!   non-convergence as an error.
//!
//! # Example: continuously compounded yield of a zero
//!
//! ```rust
//! use tenor_math::solvers::Secant;
//!
//! // Price 0.95 for 1.0 paid in 2 years.
//! let residual = |y: f64| (-2.0 * y).exp() - 0.95;
//!
//! let result = Secant::new(0.01, 0.02).solve(residual);
//! assert!(result.is_converged());
//! assert!((result.root - (-0.95_f64.ln() / 2.0)).abs() < 1e-8);
//! ```

mod secant;

pub use secant::{secant, Secant};

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::numeric::SQRT_EPSILON;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = SQRT_EPSILON;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the tolerance is positive and finite and the iteration
    /// budget is non-zero.
    pub fn validate(&self) -> MathResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input("max_iterations must be at least 1"));
        }
        Ok(())
    }
}

/// How a solve terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolverStatus {
    /// Residual or step fell below tolerance.
    Converged,
    /// The iteration budget ran out.
    MaxIterations,
    /// The secant line through the last two iterates was flat.
    Degenerate,
    /// The function or the next iterate was not finite.
    NonFinite,
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The last iterate. Meaningful only when converged.
    pub root: f64,
    /// Achieved tolerance, `|f(root)|`.
    pub tolerance: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Termination reason.
    pub status: SolverStatus,
}

impl SolverResult {
    /// Returns `true` if the solve met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == SolverStatus::Converged
    }

    /// Returns `(root, achieved tolerance, iterations)`.
    #[must_use]
    pub fn as_triple(&self) -> (f64, f64, u32) {
        (self.root, self.tolerance, self.iterations)
    }

    /// Converts a non-converged outcome into a [`MathError`].
    pub fn into_result(self) -> MathResult<Self> {
        match self.status {
            SolverStatus::Converged => Ok(self),
            SolverStatus::MaxIterations => Err(MathError::convergence_failed(
                self.iterations,
                self.tolerance,
            )),
            SolverStatus::Degenerate => Err(MathError::FlatSecant {
                iterations: self.iterations,
                residual: self.tolerance,
            }),
            SolverStatus::NonFinite => Err(MathError::NonFinite {
                iterations: self.iterations,
                last: self.root,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_solver_config_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.tolerance, SQRT_EPSILON);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_solver_config_rejects_bad_values() {
        assert!(SolverConfig::new(0.0, 10).validate().is_err());
        assert!(SolverConfig::new(f64::NAN, 10).validate().is_err());
        assert!(SolverConfig::new(1e-8, 0).validate().is_err());
    }

    #[test]
    fn test_solver_config_serde_defaults() {
        let config: SolverConfig = serde_json::from_str(r#"{"max_iterations": 7}"#).unwrap();
        assert_eq!(config.max_iterations, 7);
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_into_result() {
        let ok = SolverResult {
            root: 1.0,
            tolerance: 0.0,
            iterations: 3,
            status: SolverStatus::Converged,
        };
        assert_relative_eq!(ok.into_result().unwrap().root, 1.0);

        let exhausted = SolverResult {
            status: SolverStatus::MaxIterations,
            ..ok
        };
        assert!(matches!(
            exhausted.into_result(),
            Err(MathError::ConvergenceFailed { iterations: 3, .. })
        ));

        let flat = SolverResult {
            status: SolverStatus::Degenerate,
            ..ok
        };
        assert!(matches!(
            flat.into_result(),
            Err(MathError::FlatSecant { iterations: 3, .. })
        ));

        let blown_up = SolverResult {
            status: SolverStatus::NonFinite,
            ..ok
        };
        assert!(matches!(
            blown_up.into_result(),
            Err(MathError::NonFinite { last, .. }) if last == 1.0
        ));
    }

    // ============ Yield-like Financial Tests ============

    /// Price of an annual-pay bond at continuously compounded yield `y`.
    fn bond_price(y: f64, coupon: f64, years: i32) -> f64 {
        let mut pv = 0.0;
        for t in 1..=years {
            pv += coupon * (-y * f64::from(t)).exp();
        }
        pv + (-y * f64::from(years)).exp()
    }

    #[test]
    fn test_par_bond_yield() {
        // Continuously compounded yield of an annual par bond is ln(1 + c).
        let coupon = 0.05;
        let f = |y: f64| bond_price(y, coupon, 10) - 1.0;

        let result = secant(f, 0.01, 0.11, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, (1.0_f64 + coupon).ln(), epsilon = 1e-8);
    }

    #[test]
    fn test_discount_bond_yield_above_coupon() {
        let f = |y: f64| bond_price(y, 0.05, 5) - 0.95;

        let result = secant(f, 0.01, 0.11, &SolverConfig::default()).unwrap();

        assert!(result.root > (1.05_f64).ln());
        assert!(f(result.root).abs() < 1e-8);
    }

    #[test]
    fn test_spread_like_calculation() {
        let zero_rate = 0.03;
        let target = 0.97;
        let price_with_spread = |s: f64| {
            let mut pv = 0.0;
            for t in 1..=5 {
                pv += 0.05 * (-(zero_rate + s) * f64::from(t)).exp();
            }
            pv + (-(zero_rate + s) * 5.0).exp()
        };

        let result = Secant::new(0.0, 0.01).solve(|s| price_with_spread(s) - target);

        assert!(result.is_converged());
        assert!(result.root > 0.0);
    }
}
