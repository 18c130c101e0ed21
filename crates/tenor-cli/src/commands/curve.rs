//! Curve command implementation.
//!
//! Evaluates a saved curve at a list of times.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tenor_curves::traits::Curve;

use crate::cli::OutputFormat;
use crate::commands::{load_curve, validate_time};
use crate::output::{print_header, print_output};

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Curve file written by `tenor bootstrap --output`
    #[arg(short, long)]
    pub curve: PathBuf,

    /// Times in years to evaluate the curve at
    #[arg(short, long, num_args = 1.., required = true, allow_negative_numbers = true)]
    pub at: Vec<f64>,
}

/// Curve values at one time.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct CurvePoint {
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
    if r.is_nan() {
        "-".to_string()
    } else {
        format!("{:.6}%", r * 100.0)
    }
}

fn fmt_discount(d: &f64) -> String {
    format!("{d:.10}")
}

/// Evaluates `curve` at `t`.
pub fn curve_point<C: Curve + ?Sized>(curve: &C, t: f64) -> CurvePoint {
    CurvePoint {
        time: t,
        forward: curve.forward(t),
        spot: curve.spot(t),
        discount: curve.discount(t),
    }
}

/// Execute the curve command.
pub fn execute(args: &CurveArgs, format: OutputFormat) -> Result<()> {
    let curve = load_curve(&args.curve)?;

    let points = args
        .at
        .iter()
        .map(|&t| validate_time(t).map(|t| curve_point(&curve, t)))
        .collect::<Result<Vec<_>, _>>()?;

    if format == OutputFormat::Table {
        print_header(&format!("Curve ({} knots)", curve.size()));
    }
    print_output(&points, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenor_curves::curves::PiecewiseFlat;

    #[test]
    fn test_curve_point() {
        let curve = PiecewiseFlat::new(vec![1.0, 2.0], vec![0.02, 0.04]).unwrap();

        let p = curve_point(&curve, 2.0);
        assert_eq!(p.forward, 0.04);
        assert!((p.spot - 0.03).abs() < 1e-15);
        assert!((p.discount - (-0.06_f64).exp()).abs() < 1e-15);

        // Spot is undefined at the origin
        assert_eq!(fmt_rate(&curve_point(&curve, 0.0).spot), "-");
    }
}
