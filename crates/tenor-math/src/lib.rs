//! # Tenor Math
//!
//! Numerical building blocks for the Tenor curve bootstrapping library.
//!
//! This crate provides:
//!
//! - **Numeric**: NaN / epsilon constants and sentinel tests used for
//!   "no value" signalling on hot numerical paths
//! - **Solvers**: The secant root finder used to invert price into rate
//!
//! ## Design Philosophy
//!
//! - **Sentinels on the hot path**: Queries return `NaN` instead of failing
//! - **Results at the boundary**: [`MathError`] is reserved for callers that
//!   want a `Result` rather than a raw solver outcome

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

pub mod error;
pub mod numeric;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::numeric::{approx_eq, is_nan, is_sentinel_pair, EPSILON, NAN, SQRT_EPSILON};
    pub use crate::solvers::{secant, Secant, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
