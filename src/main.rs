//! Command-line interface for flatcsv
//!
//! # Usage Examples
//!
//! ## Benchmark
//! ```bash
//! # Defaults: 100000 timed iterations, 1000 warmup iterations
//! flatcsv bench
//!
//! # Settings from a YAML file, iterations overridden on the command line
//! flatcsv bench --config bench.yaml --iterations 5000
//!
//! # Machine-readable report without header lines
//! flatcsv bench --no-header --format json
//! ```
//!
//! ## Sample
//! ```bash
//! flatcsv sample
//! ```

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use flatcsv::bench::{self, SampleOrder};
use flatcsv::config::{BenchConfig, BenchOverrides};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flatcsv")]
#[command(about = "Single-record CSV serialization driven by derived member tables")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time the CSV record codec against serde_json
    Bench(BenchArgs),

    /// Print the benchmark's sample record as CSV
    Sample {
        /// Omit the header line
        #[arg(long)]
        no_header: bool,
    },
}

#[derive(Args)]
struct BenchArgs {
    /// YAML file with benchmark settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Timed iterations per phase
    #[arg(long, env = "FLATCSV_ITERATIONS")]
    iterations: Option<usize>,

    /// Warmup iterations per codec
    #[arg(long, env = "FLATCSV_WARMUP")]
    warmup: Option<usize>,

    /// Serialize without the header line
    #[arg(long)]
    no_header: bool,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bench(args) => {
            let overrides = BenchOverrides {
                iterations: args.iterations,
                warmup: args.warmup,
                no_header: args.no_header,
            };
            let config = BenchConfig::resolve(args.config.as_deref(), &overrides)
                .context("Failed to load benchmark configuration")?;

            let report = bench::run(&config)?;
            match args.format {
                OutputFormat::Text => println!("{report}"),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&report)
                        .context("Failed to encode benchmark report")?
                ),
            }
        }
        Commands::Sample { no_header } => {
            let text = flatcsv::serialize_with_header(&SampleOrder::sample(), !no_header);
            print!("{text}");
        }
    }

    Ok(())
}
