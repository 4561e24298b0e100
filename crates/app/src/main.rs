//! greenprint: estimate a household's annual carbon footprint and rank the
//! reduction strategies that pay off most.
//!
//! Reads a lifestyle record as JSON, runs the estimation engine, and prints
//! either a plain-text report or the full JSON payload. With no input file it
//! falls back to a built-in example profile, so `greenprint` with no
//! arguments always produces something to look at.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use engine::{
    compute_footprint_with, generate_strategies, EmissionFactors, FootprintInput,
    EMISSION_FACTORS,
};
use report::text::render_report;
use report::Report;

/// Household carbon footprint calculator.
#[derive(Parser)]
#[command(name = "greenprint")]
#[command(version = "0.1.0")]
#[command(about = "Estimate a household's annual carbon footprint and how to shrink it")]
struct Cli {
    /// Lifestyle record to estimate (JSON). Uses a built-in example profile
    /// when omitted.
    input: Option<PathBuf>,

    /// Custom emission-factor table (JSON), merged field by field over the
    /// built-in values.
    #[arg(long, value_name = "PATH")]
    factors: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Number of strategies to include.
    #[arg(long, default_value_t = 8)]
    top: usize,

    /// Print the example lifestyle record as JSON and exit.
    #[arg(long)]
    example: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.example {
        println!(
            "{}",
            serde_json::to_string_pretty(&FootprintInput::default())?
        );
        return Ok(());
    }

    let input = load_input(cli.input.as_deref())?;
    let factors = load_factors(cli.factors.as_deref())?;

    let result = compute_footprint_with(&factors, &input);
    let strategies = generate_strategies(&result);
    debug!(
        total = result.total,
        strategies = strategies.len(),
        "footprint computed"
    );

    match cli.format {
        Format::Text => println!("{}", render_report(&result, &strategies, cli.top)),
        Format::Json => {
            let payload = Report::build(&result, &strategies, cli.top);
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}

/// Set up logging based on verbosity. Logs go to stderr so piped output stays
/// clean.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn load_input(path: Option<&Path>) -> Result<FootprintInput> {
    let Some(path) = path else {
        info!("no input file given, using the built-in example profile");
        return Ok(FootprintInput::default());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    let input: FootprintInput = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse lifestyle record {}", path.display()))?;
    debug!(path = %path.display(), "lifestyle record loaded");
    Ok(input)
}

fn load_factors(path: Option<&Path>) -> Result<EmissionFactors> {
    let Some(path) = path else {
        return Ok(EMISSION_FACTORS);
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read factor table {}", path.display()))?;
    let factors: EmissionFactors = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse factor table {}", path.display()))?;
    factors
        .validate()
        .with_context(|| format!("invalid factor table {}", path.display()))?;
    info!(path = %path.display(), "custom emission factors loaded");
    Ok(factors)
}
