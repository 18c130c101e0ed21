//! Cash-flow instruments for curve bootstrap.
//!
//! An instrument is an ordered sequence of cash flows `(u_i, c_i)`: times in
//! years from the valuation date, strictly increasing, with signed amounts.
//! Every instrument implements the [`Instrument`] trait, which is all the
//! valuation and bootstrap code needs to see.
//!
//! # Available Instruments
//!
//! - [`CashFlows`]: Arbitrary flows from two equal-length sequences
//! - [`ZeroCouponBond`]: A single flow at maturity
//! - [`Bond`]: Fixed coupon bond paying `coupon / frequency` per period
//! - [`Deposit`]: Cash deposit at a simple rate, priced at 1
//! - [`ForwardRateAgreement`]: FRA at a simple rate, priced at 0
//!
//! Instruments are immutable once built. Constructors validate their
//! inputs and return [`CurveError::InvalidInstrument`](crate::error::CurveError)
//! on bad data.
//!
//! # Serialization
//!
//! [`InstrumentSpec`] is the tagged, serde-friendly description of an
//! instrument used by configuration files; [`QuotedInstrument`] pairs it with
//! a market price.

mod bond;
mod cashflows;
mod deposit;
mod fra;
mod frequency;
pub mod quotes;
mod zero;

pub use bond::Bond;
pub use cashflows::CashFlows;
pub use deposit::Deposit;
pub use fra::ForwardRateAgreement;
pub use frequency::Frequency;
pub use quotes::{InstrumentSpec, QuotedInstrument};
pub use zero::ZeroCouponBond;

use std::fmt;
use std::iter::{Copied, Zip};
use std::slice::Iter;

use tenor_math::numeric::NAN;

use crate::error::{CurveError, CurveResult};

/// Iterator over `(time, cash)` pairs of an instrument.
pub type Flows<'a> = Zip<Copied<Iter<'a, f64>>, Copied<Iter<'a, f64>>>;

/// A sequence of cash flows `(u_i, c_i)` with strictly increasing times.
///
/// Implementors only provide the two slices; everything else is derived.
/// The trait is object safe, so mixed instrument sets are held as
/// `Vec<Box<dyn Instrument>>`.
///
/// # Example
///
/// ```rust
/// use tenor_curves::instruments::{Bond, Frequency, Instrument};
///
/// let bond = Bond::new(1.0, 0.04, Frequency::SemiAnnual).unwrap();
///
/// assert_eq!(bond.times(), &[0.5, 1.0]);
/// assert_eq!(bond.cashes(), &[0.02, 1.02]);
/// assert_eq!(bond.last(), (1.0, 1.02));
/// ```
pub trait Instrument: Send + Sync + fmt::Debug {
    /// Cash-flow times, strictly increasing.
    fn times(&self) -> &[f64];

    /// Cash-flow amounts, one per time.
    fn cashes(&self) -> &[f64];

    /// Number of cash flows.
    fn size(&self) -> usize {
        self.times().len()
    }

    /// Time of flow `i`, `NaN` if out of range.
    fn time(&self, i: usize) -> f64 {
        self.times().get(i).copied().unwrap_or(NAN)
    }

    /// Amount of flow `i`, `NaN` if out of range.
    fn cash(&self, i: usize) -> f64 {
        self.cashes().get(i).copied().unwrap_or(NAN)
    }

    /// Earliest flow, or `(NaN, NaN)` for an instrument without flows.
    fn first(&self) -> (f64, f64) {
        (self.time(0), self.cash(0))
    }

    /// Latest flow, or `(NaN, NaN)` for an instrument without flows.
    ///
    /// Its time is the knot a bootstrap step commits.
    fn last(&self) -> (f64, f64) {
        match self.size() {
            0 => (NAN, NAN),
            n => (self.time(n - 1), self.cash(n - 1)),
        }
    }

    /// Time of the last flow.
    fn maturity(&self) -> f64 {
        self.last().0
    }

    /// Iterates over `(time, cash)` pairs.
    fn flows(&self) -> Flows<'_> {
        self.times()
            .iter()
            .copied()
            .zip(self.cashes().iter().copied())
    }

    /// Short human-readable label.
    fn description(&self) -> String {
        format!("{} flows to {:.4}Y", self.size(), self.maturity())
    }
}

impl<T: Instrument + ?Sized> Instrument for &T {
    fn times(&self) -> &[f64] {
        (**self).times()
    }

    fn cashes(&self) -> &[f64] {
        (**self).cashes()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

impl<T: Instrument + ?Sized> Instrument for Box<T> {
    fn times(&self) -> &[f64] {
        (**self).times()
    }

    fn cashes(&self) -> &[f64] {
        (**self).cashes()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// Checks the cash-flow invariants shared by every instrument.
pub(crate) fn validate_flows(times: &[f64], cashes: &[f64]) -> CurveResult<()> {
    if times.len() != cashes.len() {
        return Err(CurveError::invalid_instrument(format!(
            "times and cashes must have the same length: {} vs {}",
            times.len(),
            cashes.len()
        )));
    }
    if times.is_empty() {
        return Err(CurveError::invalid_instrument("no cash flows"));
    }
    if let Some(i) = times.iter().position(|t| !t.is_finite()) {
        return Err(CurveError::invalid_instrument(format!(
            "time {} is not finite: {}",
            i, times[i]
        )));
    }
    if let Some(i) = cashes.iter().position(|c| !c.is_finite()) {
        return Err(CurveError::invalid_instrument(format!(
            "cash {} is not finite: {}",
            i, cashes[i]
        )));
    }
    if let Some(w) = times.windows(2).find(|w| w[1] <= w[0]) {
        return Err(CurveError::invalid_instrument(format!(
            "times must be strictly increasing: {} then {}",
            w[0], w[1]
        )));
    }

    Ok(())
}
