//! # Tenor Curves
//!
//! Piecewise-flat forward curve bootstrapping.
//!
//! This crate provides:
//!
//! - **Curve Trait**: Core [`Curve`] trait: forward rate, integrated forward,
//!   discount factor and spot rate
//! - **Curve Types**: The bootstrapped [`PiecewiseFlat`] curve, a constant
//!   curve, and borrowing views that extend or shift another curve
//! - **Instruments**: Cash-flow instruments: zero-coupon bonds, coupon bonds,
//!   deposits, FRAs and explicit flows
//! - **Valuation**: Present value, duration, convexity, yield and spread
//! - **Bootstrap**: Sequential construction of a curve that reprices a set
//!   of instruments, plus closed forms for deposits and FRAs
//! - **Repricing**: Audit reports showing how well a curve reprices its inputs
//!
//! ## Quick Start
//!
//! ```rust
//! use tenor_curves::prelude::*;
//!
//! let result = SequentialBootstrapper::new()
//!     .add_instrument(Deposit::new(0.045, 0.5).unwrap(), Deposit::PRICE)
//!     .add_instrument(ForwardRateAgreement::new(0.05, 0.5, 1.0).unwrap(), ForwardRateAgreement::PRICE)
//!     .add_instrument(Bond::new(2.0, 0.05, Frequency::SemiAnnual).unwrap(), 1.0)
//!     .bootstrap_validated()
//!     .unwrap();
//!
//! assert!(result.is_valid());
//!
//! let curve = result.into_curve().unwrap();
//!
//! // Discount factor and spot rate at 1.5 years
//! let df = curve.discount(1.5);
//! let spot = curve.spot(1.5);
//! assert!((df - (-1.5 * spot).exp()).abs() < 1e-15);
//! ```
//!
//! ## Failure Signalling
//!
//! Curve queries and single bootstrap steps return `NaN` (or a `(NaN, NaN)`
//! knot) instead of failing; [`CurveError`] is reserved for malformed input
//! and for the batch bootstrap reporting which instrument it stopped at.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod bootstrap;
pub mod curves;
pub mod error;
pub mod instruments;
pub mod repricing;
pub mod traits;
pub mod valuation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{
        bootstrap, bootstrap0, bootstrap_deposit, bootstrap_fra, BootstrapConfig,
        SequentialBootstrapper,
    };
    pub use crate::curves::{extrapolate, ConstantCurve, Extrapolated, PiecewiseFlat, Shifted};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::instruments::{
        Bond, CashFlows, Deposit, ForwardRateAgreement, Frequency, Instrument, InstrumentSpec,
        QuotedInstrument, ZeroCouponBond,
    };
    pub use crate::repricing::{BootstrapResult, RepricingCheck, RepricingReport};
    pub use crate::traits::Curve;
    pub use crate::valuation::{analyze, convexity, duration, present, Analytics};
}

pub use curves::PiecewiseFlat;
pub use error::{CurveError, CurveResult};
pub use traits::Curve;
