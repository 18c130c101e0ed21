//! Error types for curve operations.
//!
//! Curve queries and the single bootstrap step signal numerical failure with
//! `NaN`. The errors here cover structural problems: bad instrument data,
//! curve knots pushed out of order, mismatched inputs and the batch
//! bootstrap giving up on an instrument.

use tenor_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// A knot time is earlier than the curve's last knot.
    #[error("Non-monotonic knot time: {time:.6} is before last time {last:.6}")]
    NonMonotonicTimes {
        /// Time of the curve's last knot.
        last: f64,
        /// The rejected time.
        time: f64,
    },

    /// Invalid instrument definition.
    #[error("Invalid instrument: {reason}")]
    InvalidInstrument {
        /// Description of what's wrong with the instrument.
        reason: String,
    },

    /// Invalid value (NaN, Inf, or domain error).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of why value is invalid.
        reason: String,
    },

    /// Instrument and price sequences have different lengths.
    #[error("Size mismatch: {instruments} instruments but {prices} prices")]
    SizeMismatch {
        /// Number of instruments supplied.
        instruments: usize,
        /// Number of prices supplied.
        prices: usize,
    },

    /// Not enough inputs for the operation.
    #[error("Insufficient data: need at least {required}, got {got}")]
    InsufficientData {
        /// Minimum required items.
        required: usize,
        /// Actual number of items.
        got: usize,
    },

    /// A bootstrap step produced no knot.
    #[error("Bootstrap failed at instrument {index} (maturity {maturity:.6}): {reason}")]
    BootstrapFailed {
        /// 1-based position of the instrument in the input.
        index: usize,
        /// Last cash-flow time of the instrument.
        maturity: f64,
        /// Description of failure.
        reason: String,
    },

    /// One or more instruments did not reprice within tolerance.
    #[error("Repricing failed for {failed} instrument(s) (max error: {max_error:.2e}): {instruments:?}")]
    RepricingFailed {
        /// Number of instruments that failed.
        failed: usize,
        /// Largest absolute pricing error.
        max_error: f64,
        /// Descriptions of the failing instruments.
        instruments: Vec<String>,
    },

    /// Mathematical error.
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

impl CurveError {
    /// Creates a non-monotonic times error.
    #[must_use]
    pub fn non_monotonic_times(last: f64, time: f64) -> Self {
        Self::NonMonotonicTimes { last, time }
    }

    /// Creates an invalid instrument error.
    #[must_use]
    pub fn invalid_instrument(reason: impl Into<String>) -> Self {
        Self::InvalidInstrument {
            reason: reason.into(),
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// Creates a size mismatch error.
    #[must_use]
    pub fn size_mismatch(instruments: usize, prices: usize) -> Self {
        Self::SizeMismatch {
            instruments,
            prices,
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, got: usize) -> Self {
        Self::InsufficientData { required, got }
    }

    /// Creates a bootstrap failure error.
    #[must_use]
    pub fn bootstrap_failed(index: usize, maturity: f64, reason: impl Into<String>) -> Self {
        Self::BootstrapFailed {
            index,
            maturity,
            reason: reason.into(),
        }
    }

    /// Creates a repricing failure error.
    #[must_use]
    pub fn repricing_failed(failed: usize, max_error: f64, instruments: Vec<String>) -> Self {
        Self::RepricingFailed {
            failed,
            max_error,
            instruments,
        }
    }
}
