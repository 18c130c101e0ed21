//! Zero-coupon bond.

use super::{validate_flows, Instrument};
use crate::error::CurveResult;

/// A single cash flow `c` at time `u`.
///
/// # Example
///
/// ```rust
/// use tenor_curves::instruments::{Instrument, ZeroCouponBond};
///
/// let zcb = ZeroCouponBond::unit(5.0).unwrap();
/// assert_eq!(zcb.last(), (5.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZeroCouponBond {
    time: [f64; 1],
    cash: [f64; 1],
}

impl ZeroCouponBond {
    /// Creates a zero-coupon bond paying `cash` at `maturity`.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is not finite.
    pub fn new(maturity: f64, cash: f64) -> CurveResult<Self> {
        validate_flows(&[maturity], &[cash])?;
        Ok(Self {
            time: [maturity],
            cash: [cash],
        })
    }

    /// Creates a zero-coupon bond paying 1 at `maturity`.
    ///
    /// # Errors
    ///
    /// Returns an error if `maturity` is not finite.
    pub fn unit(maturity: f64) -> CurveResult<Self> {
        Self::new(maturity, 1.0)
    }
}

impl Instrument for ZeroCouponBond {
    fn times(&self) -> &[f64] {
        &self.time
    }

    fn cashes(&self) -> &[f64] {
        &self.cash
    }

    fn description(&self) -> String {
        format!("ZCB {:.4}Y", self.time[0])
    }
}
