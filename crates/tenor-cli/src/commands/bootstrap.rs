//! Bootstrap command implementation.
//!
//! Bootstraps a piecewise-flat forward curve from an instrument file:
//!
//! ```toml
//! [[instruments]]
//! instrument = { type = "deposit", rate = 0.045, maturity = 0.5 }
//!
//! [[instruments]]
//! instrument = { type = "bond", maturity = 5.0, coupon = 0.05 }
//! price = 1.01
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, info};

use tenor_config::save_file;
use tenor_curves::bootstrap::SequentialBootstrapper;
use tenor_curves::curves::PiecewiseFlat;
use tenor_curves::repricing::RepricingReport;
use tenor_curves::traits::Curve;

use crate::cli::OutputFormat;
use crate::commands::{load_instruments, load_settings};
use crate::error::CliError;
use crate::output::{print_header, print_json, print_output, print_success, print_warning};

/// Arguments for the bootstrap command.
#[derive(Args, Debug)]
pub struct BootstrapArgs {
    /// Instrument file (TOML or JSON) with an `instruments` list
    #[arg(short, long)]
    pub input: PathBuf,

    /// Settings file (TOML or JSON)
    #[arg(short, long, env = "TENOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the curve to this file (TOML or JSON)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Order instruments by maturity first
    #[arg(long)]
    pub sort: bool,

    /// Fail unless every instrument reprices
    #[arg(long)]
    pub strict: bool,
}

/// One knot of the bootstrapped curve.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KnotRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Time", display_with = "fmt_time")]
    pub time: f64,
    #[tabled(rename = "Forward", display_with = "fmt_rate")]
    pub forward: f64,
    #[tabled(rename = "Spot", display_with = "fmt_rate")]
    pub spot: f64,
    #[tabled(rename = "Discount", display_with = "fmt_discount")]
    pub discount: f64,
}

fn fmt_time(t: &f64) -> String {
    format!("{t:.4}")
}

fn fmt_rate(r: &f64) -> String {
    format!("{:.6}%", r * 100.0)
}

fn fmt_discount(d: &f64) -> String {
    format!("{d:.10}")
}

/// Tabulates the knots of `curve`.
pub fn knot_rows(curve: &PiecewiseFlat) -> Vec<KnotRow> {
    curve
        .knots()
        .enumerate()
        .map(|(k, (t, f))| KnotRow {
            index: k + 1,
            time: t,
            forward: f,
            spot: curve.spot(t),
            discount: curve.discount(t),
        })
        .collect()
}

#[derive(Serialize)]
struct BootstrapOutput<'a> {
    curve: &'a PiecewiseFlat,
    knots: Vec<KnotRow>,
    report: &'a RepricingReport,
    build_time_us: u128,
}

/// Execute the bootstrap command.
pub fn execute(args: BootstrapArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let mut config = load_settings(args.config.as_deref())?;
    if args.sort {
        config = config.with_sort_by_maturity(true);
    }
    if args.strict {
        config = config.with_strict_repricing(true);
    }
    debug!(?config, "bootstrap settings");

    let quotes = load_instruments(&args.input)?;
    info!(count = quotes.len(), input = %args.input.display(), "loaded instruments");

    let mut bootstrapper =
        SequentialBootstrapper::from_quotes(&quotes)?.with_config(config.bootstrap_config());
    if config.bootstrap.sort_by_maturity {
        bootstrapper = bootstrapper.sorted();
    }

    let result = bootstrapper.bootstrap_validated()?;
    let report = &result.report;

    if !report.all_passed() {
        if config.repricing.strict {
            return Err(CliError::RepricingFailed {
                failed: report.failed(),
                total: report.total(),
                max_error: report.max_error(),
            }
            .into());
        }
        print_warning(&format!(
            "{} of {} instruments did not reprice within {:.2e}",
            report.failed(),
            report.total(),
            config.repricing.tolerance
        ));
    }

    let rows = knot_rows(&result.curve);
    match format {
        OutputFormat::Table => {
            print_header("Bootstrapped Curve");
            print_output(&rows, format)?;
            if !quiet {
                println!();
                print!("{report}");
                println!("Build time: {:?}", result.build_duration);
            }
        }
        OutputFormat::Json => print_json(&BootstrapOutput {
            curve: &result.curve,
            knots: rows,
            report,
            build_time_us: result.build_duration.as_micros(),
        })?,
        OutputFormat::Csv => print_output(&rows, format)?,
    }

    if let Some(path) = &args.output {
        save_file(&result.curve, path)
            .with_context(|| format!("writing curve to {}", path.display()))?;
        if !quiet {
            print_success(&format!("Curve written to {}", path.display()));
        }
    }

    Ok(())
}
