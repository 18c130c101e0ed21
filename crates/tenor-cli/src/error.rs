//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The instrument file lists no instruments.
    #[error("No instruments in {0}")]
    NoInstruments(String),

    /// A query time outside the curve's domain.
    #[error("Invalid time: {0}. Must be finite and non-negative.")]
    InvalidTime(f64),

    /// Invalid price.
    #[error("Invalid price: {0}. Must be finite.")]
    InvalidPrice(f64),

    /// The curve did not reprice its inputs and strict repricing is on.
    #[error("Repricing failed for {failed} of {total} instrument(s); max error {max_error:.2e}")]
    RepricingFailed {
        /// Instruments outside tolerance.
        failed: usize,
        /// Instruments checked.
        total: usize,
        /// Largest absolute pricing error.
        max_error: f64,
    },
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
