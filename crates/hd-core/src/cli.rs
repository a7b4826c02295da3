//! Command-line interface for the `heredity` binary.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use hd_common::{OutputFormat, Result};
use hd_config::Priors;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::inference::compute_posterior;
use crate::pedigree::load_pedigree;
use crate::report;

/// Compute per-person posterior gene and trait distributions for a family
/// pedigree.
#[derive(Parser, Debug)]
#[command(name = "heredity", version, about)]
pub struct Cli {
    /// CSV file with name, mother, father, and trait columns.
    pub data: PathBuf,

    /// Priors JSON file overriding the built-in inheritance model.
    #[arg(long, value_name = "FILE")]
    pub priors: Option<PathBuf>,

    /// Output format for the posterior table.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Initialize tracing to stderr, honoring `RUST_LOG` when set.
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load inputs, run inference, and write the rendered table to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let priors = match &cli.priors {
        Some(path) => Priors::from_file(path)?,
        None => Priors::default(),
    };

    let pedigree = load_pedigree(&cli.data)?;
    info!(people = pedigree.len(), "pedigree loaded");

    let table = compute_posterior(&pedigree, &priors)?;

    let rendered = match cli.format {
        OutputFormat::Text => report::render_text(&table),
        OutputFormat::Json => report::render_json(&table)?,
    };
    io::stdout().lock().write_all(rendered.as_bytes())?;
    Ok(())
}
