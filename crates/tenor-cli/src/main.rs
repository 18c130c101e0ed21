//! Tenor CLI - Command-line interface for forward curve bootstrapping.
//!
//! # Usage
//!
//! ```bash
//! # Bootstrap a curve and save it
//! tenor bootstrap --input quotes.toml --output curve.json
//!
//! # Query the curve
//! tenor curve --curve curve.json --at 0.5 1 2.5 10
//!
//! # Value an instrument, with yield and OAS at a market price
//! tenor value --curve curve.json --instrument bond.toml --price 0.985
//! ```
//!
//! Logging goes to stderr. `RUST_LOG` sets the filter (default `warn`);
//! `--verbose` forces `debug`.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Set up output format
    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Bootstrap(args) => commands::bootstrap::execute(args, format, cli.quiet)?,
        Commands::Curve(args) => commands::curve::execute(&args, format)?,
        Commands::Value(args) => commands::value::execute(&args, format)?,
    }

    Ok(())
}

/// Installs the stderr subscriber. Library `log` records are forwarded to it.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
