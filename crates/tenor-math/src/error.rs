//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone)]
pub enum MathError {
    /// Root-finding algorithm failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// The secant line through the last two iterates was flat.
    #[error("Flat secant after {iterations} iterations (residual: {residual:.2e})")]
    FlatSecant {
        /// Number of iterations completed.
        iterations: u32,
        /// Residual at the last iterate.
        residual: f64,
    },

    /// The function or the next iterate left the finite range.
    #[error("Non-finite value after {iterations} iterations (last finite iterate: {last})")]
    NonFinite {
        /// Number of iterations completed.
        iterations: u32,
        /// Last iterate at which the function was finite.
        last: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
