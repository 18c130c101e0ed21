//! Value command implementation.
//!
//! Values one instrument on a saved curve. With a market price it also
//! solves for the instrument's flat yield and its spread over the curve.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::warn;

use tenor_config::load_file;
use tenor_curves::instruments::{Instrument, InstrumentSpec};
use tenor_curves::valuation::{analyze, oas, yield_from_price, Analytics};
use tenor_math::solvers::SolverResult;

use crate::cli::OutputFormat;
use crate::commands::{load_curve, load_settings, validate_price};
use crate::output::{format_bps, format_percent, print_header, print_json, print_output, KeyValue};

/// Starting point of the yield solve.
const YIELD_GUESS: f64 = 0.05;

/// Arguments for the value command.
#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Curve file written by `tenor bootstrap --output`
    #[arg(short, long)]
    pub curve: PathBuf,

    /// Instrument file (TOML or JSON), e.g. `type = "bond"`, `maturity = 5.0`, `coupon = 0.05`
    #[arg(short, long)]
    pub instrument: PathBuf,

    /// Market price; adds yield and OAS to the output
    #[arg(short, long, allow_negative_numbers = true)]
    pub price: Option<f64>,

    /// Settings file (TOML or JSON); its solver section drives the yield and OAS solves
    #[arg(long, env = "TENOR_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ValueOutput {
    instrument: String,
    #[serde(flatten)]
    analytics: Analytics,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    yield_continuous: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    oas: Option<f64>,
}

/// Keeps a converged root, logging the failure otherwise.
fn converged(what: &str, result: SolverResult) -> Option<f64> {
    if result.is_converged() {
        Some(result.root)
    } else {
        warn!(
            status = ?result.status,
            iterations = result.iterations,
            residual = result.tolerance,
            "{what} did not converge"
        );
        None
    }
}

/// Execute the value command.
pub fn execute(args: &ValueArgs, format: OutputFormat) -> Result<()> {
    let curve = load_curve(&args.curve)?;
    let spec: InstrumentSpec = load_file(&args.instrument)
        .with_context(|| format!("reading instrument from {}", args.instrument.display()))?;
    let instrument = spec.build()?;
    let price = args.price.map(validate_price).transpose()?;

    let solver = load_settings(args.config.as_deref())?.solver_config();
    let analytics = analyze(&instrument, &curve);
    let yield_continuous = price.and_then(|p| {
        converged("yield", yield_from_price(&instrument, p, YIELD_GUESS, &solver))
    });
    let spread = price.and_then(|p| converged("OAS", oas(&instrument, &curve, p, 0.0, &solver)));

    let output = ValueOutput {
        instrument: instrument.description(),
        analytics,
        price,
        yield_continuous,
        oas: spread,
    };

    if format == OutputFormat::Json {
        return print_json(&output);
    }

    let mut rows = vec![
        KeyValue::new("Instrument", output.instrument.clone()),
        KeyValue::from_f64("Present Value", analytics.present, 10),
        KeyValue::from_f64("Duration", analytics.duration, 6),
        KeyValue::from_f64("Macaulay Duration", analytics.macaulay_duration, 6),
        KeyValue::from_f64("Convexity", analytics.convexity, 6),
    ];
    if let Some(p) = price {
        rows.push(KeyValue::from_f64("Price", p, 10));
        rows.push(KeyValue::new(
            "Yield (continuous)",
            yield_continuous.map_or_else(|| "-".to_string(), format_percent),
        ));
        rows.push(KeyValue::new(
            "OAS",
            spread.map_or_else(|| "-".to_string(), format_bps),
        ));
    }

    if format == OutputFormat::Table {
        print_header("Valuation");
    }
    print_output(&rows, format)
}
