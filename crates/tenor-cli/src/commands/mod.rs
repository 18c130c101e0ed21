//! CLI command implementations.

pub mod bootstrap;
pub mod curve;
pub mod value;

// Re-export submodules for convenience
pub use bootstrap::BootstrapArgs;
pub use curve::CurveArgs;
pub use value::ValueArgs;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tenor_config::TenorConfig;
use tenor_curves::curves::PiecewiseFlat;
use tenor_curves::instruments::QuotedInstrument;

use crate::error::{CliError, CliResult};

/// An instrument file: a list of quoted instruments.
#[derive(Debug, Deserialize)]
pub struct InstrumentFile {
    /// Instruments with their market prices.
    pub instruments: Vec<QuotedInstrument>,
}

/// Loads an instrument file, TOML or JSON.
pub fn load_instruments(path: &Path) -> Result<Vec<QuotedInstrument>> {
    let file: InstrumentFile = tenor_config::load_file(path)
        .with_context(|| format!("reading instruments from {}", path.display()))?;

    if file.instruments.is_empty() {
        return Err(CliError::NoInstruments(path.display().to_string()).into());
    }
    Ok(file.instruments)
}

/// Loads and validates a settings file, or the defaults when none is given.
pub fn load_settings(path: Option<&Path>) -> Result<TenorConfig> {
    match path {
        Some(path) => TenorConfig::from_file(path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => Ok(TenorConfig::default()),
    }
}

/// Loads a saved curve, TOML or JSON.
pub fn load_curve(path: &Path) -> Result<PiecewiseFlat> {
    tenor_config::load_file(path).with_context(|| format!("reading curve from {}", path.display()))
}

/// Validates a query time.
pub fn validate_time(t: f64) -> CliResult<f64> {
    if !t.is_finite() || t < 0.0 {
        return Err(CliError::InvalidTime(t));
    }
    Ok(t)
}

/// Validates a price value.
pub fn validate_price(price: f64) -> CliResult<f64> {
    if !price.is_finite() {
        return Err(CliError::InvalidPrice(price));
    }
    Ok(price)
}
