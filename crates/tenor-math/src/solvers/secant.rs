//! Secant root-finding algorithm.

use crate::error::MathResult;
use crate::solvers::{SolverConfig, SolverResult, SolverStatus};

/// Secant lines flatter than this are treated as degenerate.
const MIN_DENOMINATOR: f64 = 1e-15;

/// Secant root finder.
///
/// Similar to Newton-Raphson but approximates the derivative using the
/// line through the two most recent iterates. Does not require an
/// analytical derivative or a bracketing interval.
///
/// Convergence rate is superlinear (order ~1.618, the golden ratio).
///
/// Iteration stops when `|f(x)|` or the last step falls below the
/// tolerance, when the iteration budget is exhausted, or when the secant
/// line is flat or the function value is not finite. Each case has its own
/// [`SolverStatus`]; no infinity or NaN is ever produced by the update
/// itself. A seed that is already a root converges even with a zero
/// iteration budget.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::Secant;
///
/// let result = Secant::new(1.0, 2.0).solve(|x| x * x - 2.0);
///
/// assert!(result.is_converged());
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Secant {
    x0: f64,
    x1: f64,
    config: SolverConfig,
}

impl Secant {
    /// Creates a solver seeded at `x0` and `x1` with default tolerance and
    /// iteration budget.
    #[must_use]
    pub fn new(x0: f64, x1: f64) -> Self {
        Self {
            x0,
            x1,
            config: SolverConfig::default(),
        }
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Replaces tolerance and iteration budget.
    #[must_use]
    pub fn with_config(mut self, config: &SolverConfig) -> Self {
        self.config = *config;
        self
    }

    /// Returns the seed points.
    pub fn seeds(&self) -> (f64, f64) {
        (self.x0, self.x1)
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Runs the iteration on `f`.
    pub fn solve<F>(&self, f: F) -> SolverResult
    where
        F: Fn(f64) -> f64,
    {
        let tolerance = self.config.tolerance;

        let mut x_prev = self.x0;
        let mut x_curr = self.x1;
        let mut f_prev = f(x_prev);
        let mut f_curr = f(x_curr);

        if !f_curr.is_finite() {
            return finish(x_prev, f_prev, 0, SolverStatus::NonFinite);
        }
        if f_curr.abs() < tolerance {
            return finish(x_curr, f_curr, 0, SolverStatus::Converged);
        }
        if !f_prev.is_finite() {
            return finish(x_curr, f_curr, 0, SolverStatus::NonFinite);
        }

        for iteration in 0..self.config.max_iterations {
            let denom = f_curr - f_prev;
            if denom.abs() < MIN_DENOMINATOR {
                return finish(x_curr, f_curr, iteration, SolverStatus::Degenerate);
            }

            let x_next = x_curr - f_curr * (x_curr - x_prev) / denom;
            if !x_next.is_finite() {
                return finish(x_curr, f_curr, iteration, SolverStatus::NonFinite);
            }

            let f_next = f(x_next);
            if !f_next.is_finite() {
                return finish(x_curr, f_curr, iteration + 1, SolverStatus::NonFinite);
            }

            let step = (x_next - x_curr).abs();

            x_prev = x_curr;
            f_prev = f_curr;
            x_curr = x_next;
            f_curr = f_next;

            if f_curr.abs() < tolerance || step < tolerance {
                return finish(x_curr, f_curr, iteration + 1, SolverStatus::Converged);
            }
        }

        finish(
            x_curr,
            f_curr,
            self.config.max_iterations,
            SolverStatus::MaxIterations,
        )
    }
}

fn finish(root: f64, residual: f64, iterations: u32, status: SolverStatus) -> SolverResult {
    if status != SolverStatus::Converged {
        log::trace!(
            "secant stopped: {:?} after {} iterations at x={}, |f|={:.3e}",
            status,
            iterations,
            root,
            residual.abs()
        );
    }

    SolverResult {
        root,
        tolerance: residual.abs(),
        iterations,
        status,
    }
}

/// Secant root-finding returning an error on non-convergence.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `x0` - First initial guess
/// * `x1` - Second initial guess (should be different from x0)
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{secant, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
///
/// let result = secant(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
/// ```
pub fn secant<F>(f: F, x0: f64, x1: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    Secant::new(x0, x1).with_config(config).solve(f).into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn tight() -> SolverConfig {
        SolverConfig::default().with_tolerance(1e-12)
    }

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;

        let result = secant(f, 1.0, 2.0, &tight()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_cube_root() {
        let f = |x: f64| x * x * x - 27.0;

        let result = secant(f, 2.0, 4.0, &tight()).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_sin() {
        let f = |x: f64| x.sin();

        let result = secant(f, 3.0, 3.5, &tight()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::PI, epsilon = 1e-10);
    }

    #[test]
    fn test_convergence_speed() {
        let result = Secant::new(1.0, 2.0).solve(|x| x * x - 2.0);

        assert!(result.is_converged());
        assert!(result.iterations < 15);
    }

    #[test]
    fn test_seed_already_a_root() {
        let result = Secant::new(0.0, 2.0).solve(|x| x - 2.0);

        assert!(result.is_converged());
        assert_eq!(result.iterations, 0);
        assert_eq!(result.root, 2.0);
        assert_eq!(result.tolerance, 0.0);
    }

    #[test]
    fn test_linear_function_one_step() {
        let result = Secant::new(0.0, 1.0).solve(|x| 3.0 * x - 1.5);

        assert!(result.is_converged());
        assert_relative_eq!(result.root, 0.5, epsilon = 1e-15);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_flat_function_is_degenerate() {
        let result = Secant::new(0.0, 1.0).solve(|_| 1.0);

        assert_eq!(result.status, SolverStatus::Degenerate);
        assert!(!result.is_converged());
        assert!(result.root.is_finite());
    }

    #[test]
    fn test_flat_function_wrapper_error() {
        let err = secant(|_| 1.0, 0.0, 1.0, &SolverConfig::default()).unwrap_err();

        assert!(matches!(err, MathError::FlatSecant { iterations: 0, .. }));
    }

    #[test]
    fn test_nan_function_is_non_finite() {
        let result = Secant::new(0.0, 1.0).solve(|_| f64::NAN);

        assert_eq!(result.status, SolverStatus::NonFinite);
        assert!(result.root.is_finite());

        let err = secant(|_| f64::NAN, 0.0, 1.0, &SolverConfig::default()).unwrap_err();
        assert!(matches!(err, MathError::NonFinite { .. }));
    }

    #[test]
    fn test_function_blows_up_mid_iteration() {
        // ln is NaN left of zero; the first secant step lands there.
        let result = Secant::new(2.0, 3.0).solve(|x: f64| x.ln() + 5.0);

        assert_eq!(result.status, SolverStatus::NonFinite);
        assert_eq!(result.root, 3.0);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_seed_root_with_zero_budget() {
        let result = Secant::new(0.0, 2.0)
            .with_max_iterations(0)
            .solve(|x| x - 2.0);

        assert!(result.is_converged());
        assert_eq!(result.iterations, 0);
        assert_eq!(result.root, 2.0);

        let miss = Secant::new(0.0, 1.0)
            .with_max_iterations(0)
            .solve(|x| x - 2.0);
        assert_eq!(miss.status, SolverStatus::MaxIterations);
    }

    #[test]
    fn test_iteration_budget() {
        // No real root: iterates wander until the budget is spent or the line flattens.
        let result = Secant::new(1.0, 2.0)
            .with_max_iterations(3)
            .solve(|x| x * x + 1.0);

        assert!(!result.is_converged());
        assert!(result.iterations <= 3);
    }

    #[test]
    fn test_triple() {
        let result = Secant::new(1.0, 2.0).solve(|x| x - 1.5);
        let (root, tol, iters) = result.as_triple();

        assert_relative_eq!(root, 1.5);
        assert!(tol < 1e-12);
        assert_eq!(iters, result.iterations);
    }

    proptest! {
        #[test]
        fn prop_finds_linear_roots(a in 0.1f64..10.0, r in -5.0f64..5.0) {
            let result = Secant::new(r - 1.0, r + 1.0).solve(|x| a * (x - r));

            prop_assert!(result.is_converged());
            prop_assert!((result.root - r).abs() < 1e-9);
        }
    }
}
