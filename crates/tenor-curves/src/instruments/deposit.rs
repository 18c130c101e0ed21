//! Cash deposit.
//!
//! A deposit is the simplest instrument for curve bootstrap, used for the
//! short end of the curve.

use super::{validate_flows, Instrument};
use crate::error::{CurveError, CurveResult};

/// A deposit of 1 at time 0 repaid with simple interest at maturity.
///
/// # Pricing Formula
///
/// The deposit is priced at its principal, so the curve reprices it when
/// ```text
/// D(t) × (1 + r × t) = 1
/// ```
///
/// # Example
///
/// ```rust
/// use tenor_curves::instruments::{Deposit, Instrument};
///
/// // 6-month deposit at 5%
/// let deposit = Deposit::new(0.05, 0.5).unwrap();
///
/// assert_eq!(deposit.last(), (0.5, 1.025));
/// assert_eq!(Deposit::PRICE, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deposit {
    rate: f64,
    time: [f64; 1],
    cash: [f64; 1],
}

impl Deposit {
    /// Market price of a deposit: its principal.
    pub const PRICE: f64 = 1.0;

    /// Creates a deposit at simple `rate` maturing at `maturity` years.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidInstrument`] for a non-positive maturity
    /// or non-finite inputs.
    pub fn new(rate: f64, maturity: f64) -> CurveResult<Self> {
        if !maturity.is_finite() || maturity <= 0.0 {
            return Err(CurveError::invalid_instrument(format!(
                "deposit maturity must be positive, got {maturity}"
            )));
        }
        let cash = 1.0 + rate * maturity;
        validate_flows(&[maturity], &[cash])?;

        Ok(Self {
            rate,
            time: [maturity],
            cash: [cash],
        })
    }

    /// Simple interest rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Instrument for Deposit {
    fn times(&self) -> &[f64] {
        &self.time
    }

    fn cashes(&self) -> &[f64] {
        &self.cash
    }

    fn description(&self) -> String {
        format!("Deposit {:.4}Y {:.3}%", self.time[0], self.rate * 100.0)
    }
}
