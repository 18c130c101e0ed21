//! Tenor Configuration Layer
//!
//! This crate provides the settings that drive a bootstrap run and the file
//! handling shared by the `tenor` command line.
//!
//! # Features
//!
//! - **Solver Settings**: Secant tolerance and iteration budget
//! - **Bootstrap Settings**: Initial time and guess, optional maturity ordering
//! - **Repricing Settings**: Tolerance and whether a failed check aborts
//! - **Validation**: Every section reports all of its problems at once
//! - **Files**: TOML or JSON, picked by extension
//!
//! # Example
//!
//! ```rust
//! use tenor_config::{TenorConfig, Validate};
//!
//! let config: TenorConfig = toml::from_str(
//!     r#"
//!     [solver]
//!     tolerance = 1e-12
//!
//!     [repricing]
//!     strict = true
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(config.is_valid());
//! assert_eq!(config.bootstrap_config().solver.tolerance, 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod loader;
mod settings;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use loader::{load_file, save_file, Format};
pub use settings::{BootstrapSettings, RepricingSettings, SolverSettings, TenorConfig};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::loader::{load_file, save_file};
    pub use crate::settings::TenorConfig;
}
