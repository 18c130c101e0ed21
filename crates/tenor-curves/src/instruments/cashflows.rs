//! Generic cash-flow instrument.

use serde::{Deserialize, Serialize};

use super::{validate_flows, Instrument};
use crate::error::{CurveError, CurveResult};

/// An instrument built from explicit times and amounts.
///
/// # Example
///
/// ```rust
/// use tenor_curves::instruments::{CashFlows, Instrument};
///
/// let swap_leg = CashFlows::new(vec![1.0, 2.0], vec![0.03, 1.03]).unwrap();
/// assert_eq!(swap_leg.size(), 2);
///
/// // Times must be strictly increasing.
/// assert!(CashFlows::new(vec![1.0, 1.0], vec![0.5, 0.5]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Flows", into = "Flows")]
pub struct CashFlows {
    times: Vec<f64>,
    cashes: Vec<f64>,
}

#[derive(Serialize, Deserialize)]
struct Flows {
    times: Vec<f64>,
    cashes: Vec<f64>,
}

impl TryFrom<Flows> for CashFlows {
    type Error = CurveError;

    fn try_from(flows: Flows) -> CurveResult<Self> {
        Self::new(flows.times, flows.cashes)
    }
}

impl From<CashFlows> for Flows {
    fn from(i: CashFlows) -> Self {
        Self {
            times: i.times,
            cashes: i.cashes,
        }
    }
}

impl CashFlows {
    /// Creates an instrument from cash-flow times and amounts.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidInstrument`] if the sequences are empty,
    /// differ in length, hold non-finite values, or the times are not
    /// strictly increasing.
    pub fn new(times: Vec<f64>, cashes: Vec<f64>) -> CurveResult<Self> {
        validate_flows(&times, &cashes)?;
        Ok(Self { times, cashes })
    }
}

impl Instrument for CashFlows {
    fn times(&self) -> &[f64] {
        &self.times
    }

    fn cashes(&self) -> &[f64] {
        &self.cashes
    }
}
