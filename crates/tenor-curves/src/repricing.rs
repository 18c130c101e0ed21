//! Repricing validation for curve bootstrap.
//!
//! A bootstrapped curve must reprice every input instrument at its market
//! price. This module measures how well it does:
//!
//! ```text
//! error_k = | present(instrument_k, curve) - price_k |      passed when error_k <= tolerance
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tenor_curves::bootstrap::SequentialBootstrapper;
//! use tenor_curves::instruments::Deposit;
//!
//! let result = SequentialBootstrapper::new()
//!     .add_instrument(Deposit::new(0.05, 0.5).unwrap(), Deposit::PRICE)
//!     .add_instrument(Deposit::new(0.052, 1.0).unwrap(), Deposit::PRICE)
//!     .bootstrap_validated()
//!     .unwrap();
//!
//! assert!(result.is_valid());
//! let curve = result.into_curve().unwrap();
//! assert_eq!(curve.size(), 2);
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::instruments::Instrument;
use crate::traits::Curve;
use crate::valuation::present;

/// Result of repricing a single instrument against the curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepricingCheck {
    /// 1-based position of the instrument in the bootstrap input.
    pub index: usize,

    /// Description of the instrument (e.g., "Deposit 0.5000Y 5.000%")
    pub description: String,

    /// Time of the instrument's last cash flow.
    pub maturity: f64,

    /// The market price.
    pub target: f64,

    /// Present value on the curve.
    pub model: f64,

    /// Absolute error |model - target|
    pub error: f64,

    /// Tolerance the error was checked against.
    pub tolerance: f64,

    /// Whether this instrument passed validation
    pub passed: bool,
}

impl RepricingCheck {
    /// Creates a new repricing check result.
    #[must_use]
    pub fn new(
        index: usize,
        description: String,
        maturity: f64,
        target: f64,
        model: f64,
        tolerance: f64,
    ) -> Self {
        let error = (model - target).abs();
        // NaN errors fail.
        let passed = error <= tolerance;

        Self {
            index,
            description,
            maturity,
            target,
            model,
            error,
            tolerance,
            passed,
        }
    }

    /// Prices `instrument` on `curve` and compares with `target`.
    pub fn from_instrument<I, C>(
        index: usize,
        instrument: &I,
        curve: &C,
        target: f64,
        tolerance: f64,
    ) -> Self
    where
        I: Instrument + ?Sized,
        C: Curve + ?Sized,
    {
        Self::new(
            index,
            instrument.description(),
            instrument.maturity(),
            target,
            present(instrument, curve),
            tolerance,
        )
    }
}

impl fmt::Display for RepricingCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "✓" } else { "✗" };
        write!(
            f,
            "{} #{} {} | PV: {:.10} | Error: {:.2e} (tol: {:.2e})",
            status, self.index, self.description, self.model, self.error, self.tolerance
        )
    }
}

/// Complete repricing report for audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepricingReport {
    /// Individual instrument checks
    checks: Vec<RepricingCheck>,

    /// Maximum absolute error across all instruments
    max_error: f64,

    /// Root mean square of all errors
    rms_error: f64,

    /// Whether all instruments passed validation
    all_passed: bool,

    /// Number of instruments that failed
    failed: usize,
}

impl RepricingReport {
    /// Creates a new repricing report from individual checks.
    #[must_use]
    pub fn new(checks: Vec<RepricingCheck>) -> Self {
        // A NaN error poisons the maximum.
        let max_error = checks.iter().map(|c| c.error).fold(0.0_f64, |m, e| {
            if e.is_nan() || m.is_nan() {
                f64::NAN
            } else {
                m.max(e)
            }
        });

        let rms_error = if checks.is_empty() {
            0.0
        } else {
            let sum_sq: f64 = checks.iter().map(|c| c.error * c.error).sum();
            (sum_sq / checks.len() as f64).sqrt()
        };

        let failed = checks.iter().filter(|c| !c.passed).count();

        Self {
            checks,
            max_error,
            rms_error,
            all_passed: failed == 0,
            failed,
        }
    }

    /// Creates an empty report (for curves with no instruments).
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns whether all instruments passed repricing validation.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.all_passed
    }

    /// Returns the individual repricing checks.
    #[must_use]
    pub fn checks(&self) -> &[RepricingCheck] {
        &self.checks
    }

    /// Returns the maximum absolute error.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.max_error
    }

    /// Returns the RMS error.
    #[must_use]
    pub fn rms_error(&self) -> f64 {
        self.rms_error
    }

    /// Returns the number of instruments that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Returns the total number of instruments checked.
    #[must_use]
    pub fn total(&self) -> usize {
        self.checks.len()
    }

    /// Returns failed instrument checks for error reporting.
    #[must_use]
    pub fn failed_checks(&self) -> Vec<&RepricingCheck> {
        self.checks.iter().filter(|c| !c.passed).collect()
    }

    /// Converts a failing report into [`CurveError::RepricingFailed`].
    pub fn ensure_passed(&self) -> CurveResult<()> {
        if self.all_passed {
            return Ok(());
        }

        Err(CurveError::repricing_failed(
            self.failed,
            self.max_error,
            self.failed_checks()
                .into_iter()
                .map(|c| c.description.clone())
                .collect(),
        ))
    }
}

impl fmt::Display for RepricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Repricing Report")?;
        writeln!(f, "================")?;
        writeln!(f, "Status: {}", if self.all_passed { "PASSED" } else { "FAILED" })?;
        writeln!(
            f,
            "Instruments: {}/{} passed",
            self.checks.len() - self.failed,
            self.checks.len()
        )?;
        writeln!(f, "Max Error: {:.2e}", self.max_error)?;
        writeln!(f, "RMS Error: {:.2e}", self.rms_error)?;

        if !self.checks.is_empty() {
            writeln!(f)?;
            writeln!(f, "Details:")?;
            for check in &self.checks {
                writeln!(f, "  {check}")?;
            }
        }

        Ok(())
    }
}

/// Reprices every instrument on `curve`.
///
/// # Errors
///
/// Returns [`CurveError::SizeMismatch`] if `instruments` and `prices` differ
/// in length.
pub fn validate_repricing<I, C>(
    curve: &C,
    instruments: &[I],
    prices: &[f64],
    tolerance: f64,
) -> CurveResult<RepricingReport>
where
    I: Instrument,
    C: Curve + ?Sized,
{
    if instruments.len() != prices.len() {
        return Err(CurveError::size_mismatch(instruments.len(), prices.len()));
    }

    let checks = instruments
        .iter()
        .zip(prices)
        .enumerate()
        .map(|(k, (i, &p))| RepricingCheck::from_instrument(k + 1, i, curve, p, tolerance))
        .collect();

    Ok(RepricingReport::new(checks))
}

/// Result of curve bootstrap including mandatory repricing validation.
///
/// This type wraps the bootstrapped curve with its repricing report,
/// ensuring that every curve comes with an audit trail of how well
/// it fits the input instruments.
#[derive(Debug, Clone)]
pub struct BootstrapResult<C> {
    /// The bootstrapped curve.
    pub curve: C,

    /// Mandatory repricing validation report.
    pub report: RepricingReport,

    /// Time taken to build the curve.
    pub build_duration: Duration,
}

impl<C> BootstrapResult<C> {
    /// Creates a new bootstrap result.
    #[must_use]
    pub fn new(curve: C, report: RepricingReport, build_duration: Duration) -> Self {
        Self {
            curve,
            report,
            build_duration,
        }
    }

    /// Returns whether the bootstrap succeeded (all instruments reprice).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.report.all_passed()
    }

    /// Returns the maximum repricing error.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.report.max_error()
    }

    /// Returns failed instrument checks.
    #[must_use]
    pub fn failed_checks(&self) -> Vec<&RepricingCheck> {
        self.report.failed_checks()
    }

    /// Consumes the result and returns the curve if every instrument
    /// repriced.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::RepricingFailed`] otherwise. Use
    /// [`into_curve_unchecked`](Self::into_curve_unchecked) to keep the
    /// curve anyway.
    pub fn into_curve(self) -> CurveResult<C> {
        self.report.ensure_passed()?;
        Ok(self.curve)
    }

    /// Consumes the result and returns the curve without checking validity.
    #[must_use]
    pub fn into_curve_unchecked(self) -> C {
        self.curve
    }

    /// Returns a reference to the curve.
    #[must_use]
    pub fn curve(&self) -> &C {
        &self.curve
    }
}

impl<C> fmt::Display for BootstrapResult<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bootstrap Result")?;
        writeln!(f, "Build time: {:?}", self.build_duration)?;
        writeln!(f)?;
        write!(f, "{}", self.report)?;
        Ok(())
    }
}

/// Helper to time curve building operations.
pub struct BuildTimer {
    start: Instant,
}

impl BuildTimer {
    /// Starts a new timer.
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Returns the elapsed duration.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
