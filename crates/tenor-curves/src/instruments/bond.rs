//! Fixed coupon bond.

use super::{validate_flows, Frequency, Instrument};
use crate::error::{CurveError, CurveResult};

/// Payment times at or below this are treated as the valuation date and dropped.
const MIN_PAYMENT_TIME: f64 = 1e-10;

/// A bond paying `coupon / frequency` every period and 1 at maturity.
///
/// Payment times are generated backward from maturity in steps of one
/// period while they stay positive, so a bond with a broken first period
/// simply has a shorter first coupon interval. Each generated time carries
/// one coupon.
///
/// ```text
/// maturity 1.75, semi-annual, coupon c:
///
///   0 ── 0.25 ──── 0.75 ──── 1.25 ──── 1.75
///        c/2       c/2       c/2      1 + c/2
/// ```
///
/// # Example
///
/// ```rust
/// use tenor_curves::instruments::{Bond, Frequency, Instrument};
///
/// let bond = Bond::new(1.75, 0.05, Frequency::SemiAnnual).unwrap();
///
/// assert_eq!(bond.times(), &[0.25, 0.75, 1.25, 1.75]);
/// assert_eq!(bond.last(), (1.75, 1.025));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    maturity: f64,
    coupon: f64,
    frequency: Frequency,
    times: Vec<f64>,
    cashes: Vec<f64>,
}

impl Bond {
    /// Creates a bond from maturity (years), annual coupon rate and frequency.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidInstrument`] for a non-positive or
    /// non-finite maturity, or a non-finite coupon.
    pub fn new(maturity: f64, coupon: f64, frequency: Frequency) -> CurveResult<Self> {
        if !maturity.is_finite() || maturity <= 0.0 {
            return Err(CurveError::invalid_instrument(format!(
                "bond maturity must be positive, got {maturity}"
            )));
        }
        if !coupon.is_finite() {
            return Err(CurveError::invalid_instrument(format!(
                "bond coupon must be finite, got {coupon}"
            )));
        }

        let times = payment_times(maturity, frequency);
        let n = f64::from(frequency.periods_per_year());
        let mut cashes = vec![coupon / n; times.len()];
        if let Some(principal) = cashes.last_mut() {
            *principal += 1.0;
        }
        validate_flows(&times, &cashes)?;

        Ok(Self {
            maturity,
            coupon,
            frequency,
            times,
            cashes,
        })
    }

    /// Maturity in years.
    #[must_use]
    pub fn maturity_years(&self) -> f64 {
        self.maturity
    }

    /// Annual coupon rate.
    #[must_use]
    pub fn coupon(&self) -> f64 {
        self.coupon
    }

    /// Payment frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }
}

fn payment_times(maturity: f64, frequency: Frequency) -> Vec<f64> {
    let n = f64::from(frequency.periods_per_year());

    let mut times: Vec<f64> = (0u32..)
        .map(|k| maturity - f64::from(k) / n)
        .take_while(|&t| t > MIN_PAYMENT_TIME)
        .collect();
    times.reverse();

    times
}

impl Instrument for Bond {
    fn times(&self) -> &[f64] {
        &self.times
    }

    fn cashes(&self) -> &[f64] {
        &self.cashes
    }

    fn description(&self) -> String {
        format!(
            "Bond {:.4}Y {:.3}% {}",
            self.maturity,
            self.coupon * 100.0,
            self.frequency
        )
    }
}
