//! Cashrisk CLI - Command Line Cash-Flow Risk Analysis
//!
//! This is the operational entry point for the cashrisk libraries.
//!
//! # Commands
//!
//! - `cashrisk aggregate --input <file>` - Print the daily net-flow series
//! - `cashrisk fit --input <file>` - Fit the AR(1) cash-flow model
//! - `cashrisk simulate --input <file> --starting-cash <x>` - Fan chart and risk KPIs
//! - `cashrisk check` - Print the effective configuration
//!
//! # Architecture
//!
//! As the service layer on top of core → models → engine → risk, this crate
//! only parses input, resolves configuration and formats output.

use std::io::Write;
use std::path::PathBuf;

use cashrisk_core::StressParams;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod input;

use config::{build_config, CliArgs, CliConfig};
pub use error::{CliError, Result};

/// Cashrisk cash-flow risk CLI
#[derive(Parser)]
#[command(name = "cashrisk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Input file and aggregation flags shared by the data commands
#[derive(Args)]
struct InputArgs {
    /// Path to the transactions CSV file
    #[arg(short, long)]
    input: PathBuf,

    /// Percentage change applied to inflows (e.g. -10 for a 10% drop)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    sales_pct: f64,

    /// Percentage change applied to outflows
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    costs_pct: f64,

    /// Days by which every inflow is delayed (at most 3650)
    #[arg(long, default_value_t = 0)]
    dso_days: u32,

    /// Zero-fill days without activity
    #[arg(long)]
    dense: bool,
}

impl InputArgs {
    fn stress(&self) -> StressParams {
        StressParams {
            sales_pct: self.sales_pct,
            costs_pct: self.costs_pct,
            dso_days: self.dso_days,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate transactions into daily net flows
    Aggregate {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Fit an AR(1) model to the daily net flows
    Fit {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Simulate cash paths and report risk KPIs
    Simulate {
        #[command(flatten)]
        input: InputArgs,

        /// Cash balance at the end of the history
        #[arg(short = 's', long, allow_hyphen_values = true)]
        starting_cash: f64,

        /// Horizon in days
        #[arg(long)]
        horizon: Option<usize>,

        /// Number of Monte Carlo paths
        #[arg(short = 'n', long)]
        paths: Option<usize>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check system configuration
    Check,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let mut args = CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            verbose: self.verbose,
            output_format: self.format.clone(),
            ..Default::default()
        };
        match &self.command {
            Commands::Aggregate { input } | Commands::Fit { input } => {
                args.dense = input.dense;
            }
            Commands::Simulate {
                input,
                horizon,
                paths,
                seed,
                ..
            } => {
                args.dense = input.dense;
                args.horizon_days = *horizon;
                args.num_paths = *paths;
                args.seed = *seed;
            }
            Commands::Check => {}
        }
        args
    }
}

fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(&config);
    info!("Log level: {}", config.log_level);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Aggregate { input } => {
            commands::aggregate::run(&input.input, input.stress(), &config, &mut out)?
        }
        Commands::Fit { input } => {
            commands::fit::run(&input.input, input.stress(), &config, &mut out)?
        }
        Commands::Simulate {
            input,
            starting_cash,
            ..
        } => commands::simulate::run(
            &input.input,
            input.stress(),
            *starting_cash,
            &config,
            &mut out,
        )?,
        Commands::Check => commands::check::run(&config, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
