//! Serializable instrument descriptions and market quotes.
//!
//! Configuration files describe instruments by their defining parameters
//! rather than by cash flows:
//!
//! ```toml
//! [[instruments]]
//! instrument = { type = "deposit", rate = 0.05, maturity = 0.5 }
//!
//! [[instruments]]
//! instrument = { type = "bond", maturity = 5.0, coupon = 0.045, frequency = "semi-annual" }
//! price = 0.99
//! ```
//!
//! Deposits and FRAs carry their own price (1 and 0); other instruments need
//! an explicit quote.

use serde::{Deserialize, Serialize};

use super::{
    Bond, CashFlows, Deposit, ForwardRateAgreement, Frequency, Instrument, ZeroCouponBond,
};
use crate::error::{CurveError, CurveResult};

/// Parameters that define an instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InstrumentSpec {
    /// Explicit cash flows.
    CashFlows {
        /// Flow times in years.
        times: Vec<f64>,
        /// Flow amounts.
        cashes: Vec<f64>,
    },
    /// Zero-coupon bond.
    ZeroCouponBond {
        /// Maturity in years.
        maturity: f64,
        /// Amount paid at maturity.
        #[serde(default = "unit_cash")]
        cash: f64,
    },
    /// Fixed coupon bond.
    Bond {
        /// Maturity in years.
        maturity: f64,
        /// Annual coupon rate.
        coupon: f64,
        /// Coupon frequency.
        #[serde(default)]
        frequency: Frequency,
    },
    /// Cash deposit.
    Deposit {
        /// Simple rate.
        rate: f64,
        /// Maturity in years.
        maturity: f64,
    },
    /// Forward rate agreement.
    Fra {
        /// Simple forward rate.
        rate: f64,
        /// Start of the forward period in years.
        start: f64,
        /// End of the forward period in years.
        end: f64,
    },
}

fn unit_cash() -> f64 {
    1.0
}

impl InstrumentSpec {
    /// Builds the described instrument.
    ///
    /// # Errors
    ///
    /// Returns the instrument constructor's error for invalid parameters.
    pub fn build(&self) -> CurveResult<Box<dyn Instrument>> {
        Ok(match self {
            Self::CashFlows { times, cashes } => {
                Box::new(CashFlows::new(times.clone(), cashes.clone())?)
            }
            Self::ZeroCouponBond { maturity, cash } => {
                Box::new(ZeroCouponBond::new(*maturity, *cash)?)
            }
            Self::Bond {
                maturity,
                coupon,
                frequency,
            } => Box::new(Bond::new(*maturity, *coupon, *frequency)?),
            Self::Deposit { rate, maturity } => Box::new(Deposit::new(*rate, *maturity)?),
            Self::Fra { rate, start, end } => {
                Box::new(ForwardRateAgreement::new(*rate, *start, *end)?)
            }
        })
    }

    /// Price implied by the instrument type, if it has one.
    #[must_use]
    pub fn implied_price(&self) -> Option<f64> {
        match self {
            Self::Deposit { .. } => Some(Deposit::PRICE),
            Self::Fra { .. } => Some(ForwardRateAgreement::PRICE),
            _ => None,
        }
    }

    /// Short type name, matching the serialized tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CashFlows { .. } => "cash-flows",
            Self::ZeroCouponBond { .. } => "zero-coupon-bond",
            Self::Bond { .. } => "bond",
            Self::Deposit { .. } => "deposit",
            Self::Fra { .. } => "fra",
        }
    }
}

/// An instrument together with its market price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotedInstrument {
    /// The instrument.
    pub instrument: InstrumentSpec,
    /// Market price. Optional for deposits and FRAs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl QuotedInstrument {
    /// Creates a quote with an explicit price.
    #[must_use]
    pub fn new(instrument: InstrumentSpec, price: f64) -> Self {
        Self {
            instrument,
            price: Some(price),
        }
    }

    /// Creates a quote priced by the instrument type.
    #[must_use]
    pub fn implied(instrument: InstrumentSpec) -> Self {
        Self {
            instrument,
            price: None,
        }
    }

    /// The explicit price, or the one implied by the instrument type.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidInstrument`] when neither exists or the
    /// price is not finite.
    pub fn resolved_price(&self) -> CurveResult<f64> {
        let price = self
            .price
            .or_else(|| self.instrument.implied_price())
            .ok_or_else(|| {
                CurveError::invalid_instrument(format!(
                    "{} requires an explicit price",
                    self.instrument.kind()
                ))
            })?;

        if price.is_finite() {
            Ok(price)
        } else {
            Err(CurveError::invalid_instrument(format!(
                "price must be finite, got {price}"
            )))
        }
    }

    /// Builds the instrument and resolves its price.
    ///
    /// # Errors
    ///
    /// Returns an error if the instrument is invalid or has no price.
    pub fn resolve(&self) -> CurveResult<(Box<dyn Instrument>, f64)> {
        Ok((self.instrument.build()?, self.resolved_price()?))
    }
}
