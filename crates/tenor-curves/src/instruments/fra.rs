//! Forward Rate Agreement (FRA).

use super::{validate_flows, Instrument};
use crate::error::{CurveError, CurveResult};

/// A forward deposit over `[start, end]` at a simple rate.
///
/// Modelled as paying 1 at `start` and receiving `1 + r × τ` at `end`,
/// with `τ = end - start`. At the market rate the two legs offset, so the
/// FRA is priced at 0:
///
/// ```text
/// -D(start) + D(end) × (1 + r × τ) = 0
/// ```
///
/// # Example
///
/// ```rust
/// use tenor_curves::instruments::{ForwardRateAgreement, Instrument};
///
/// // 1x2 FRA at 6%
/// let fra = ForwardRateAgreement::new(0.06, 1.0, 2.0).unwrap();
///
/// assert_eq!(fra.first(), (1.0, -1.0));
/// assert_eq!(fra.last(), (2.0, 1.06));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardRateAgreement {
    rate: f64,
    times: [f64; 2],
    cashes: [f64; 2],
}

impl ForwardRateAgreement {
    /// Market price of an FRA.
    pub const PRICE: f64 = 0.0;

    /// Creates an FRA at simple `rate` from `start` to `end` (years).
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidInstrument`] if `start` is negative,
    /// `end <= start`, or any input is not finite.
    pub fn new(rate: f64, start: f64, end: f64) -> CurveResult<Self> {
        if start < 0.0 {
            return Err(CurveError::invalid_instrument(format!(
                "FRA start must be non-negative, got {start}"
            )));
        }
        if end <= start {
            return Err(CurveError::invalid_instrument(format!(
                "FRA end {end} must be after start {start}"
            )));
        }

        let times = [start, end];
        let cashes = [-1.0, 1.0 + rate * (end - start)];
        validate_flows(&times, &cashes)?;

        Ok(Self {
            rate,
            times,
            cashes,
        })
    }

    /// Simple forward rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Start of the forward period.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.times[0]
    }

    /// End of the forward period.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.times[1]
    }

    /// Accrual period `end - start`.
    #[must_use]
    pub fn tau(&self) -> f64 {
        self.times[1] - self.times[0]
    }
}

impl Instrument for ForwardRateAgreement {
    fn times(&self) -> &[f64] {
        &self.times
    }

    fn cashes(&self) -> &[f64] {
        &self.cashes
    }

    fn description(&self) -> String {
        format!(
            "FRA {:.4}Y-{:.4}Y {:.3}%",
            self.times[0],
            self.times[1],
            self.rate * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fra_flows() {
        let fra = ForwardRateAgreement::new(0.05, 0.25, 0.75).unwrap();

        assert_eq!(fra.times(), &[0.25, 0.75]);
        assert_eq!(fra.cashes(), &[-1.0, 1.025]);
        assert_eq!(fra.start(), 0.25);
        assert_eq!(fra.end(), 0.75);
        assert_eq!(fra.tau(), 0.5);
        assert_eq!(fra.rate(), 0.05);
    }

    #[test]
    fn test_spot_starting_fra() {
        let fra = ForwardRateAgreement::new(0.05, 0.0, 1.0).unwrap();
        assert_eq!(fra.first(), (0.0, -1.0));
    }

    #[test]
    fn test_rejects_bad_period() {
        assert!(ForwardRateAgreement::new(0.05, 1.0, 1.0).is_err());
        assert!(ForwardRateAgreement::new(0.05, 2.0, 1.0).is_err());
        assert!(ForwardRateAgreement::new(0.05, -1.0, 1.0).is_err());
        assert!(ForwardRateAgreement::new(0.05, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_description() {
        let fra = ForwardRateAgreement::new(0.06, 1.0, 2.0).unwrap();
        assert_eq!(fra.description(), "FRA 1.0000Y-2.0000Y 6.000%");
    }
}
