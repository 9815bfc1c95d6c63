// src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use config::ConfigError;
use env_logger::Env;
use log::{debug, error, info, warn};
use serde::Serialize;

use gcd_lamps::config::{AppConfig, OutputFormat};
use gcd_lamps::core::form::{render_gcd, run_gcd, run_lamps};
use gcd_lamps::core::InvalidArgument;

/// Prefix-GCD and lamps exercises on the command line
#[derive(Parser)]
#[command(name = "gcd-lamps")]
#[command(version = "0.1.0")]
#[command(about = "Prefix GCD and the eight-lamps automaton", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./gcd_lamps.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print a JSON object instead of plain text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// GCD of the first N numbers of a comma-separated list
    Gcd {
        /// How many leading numbers take part
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        count: String,

        /// Comma-separated integers, e.g. "12,8,30"
        #[arg(short, long, allow_hyphen_values = true)]
        array: String,
    },

    /// Run the lamps rule over eight comma-separated 0/1 values
    Lamps {
        /// Eight comma-separated 0/1 values, e.g. "1,0,0,0,0,0,1,0"
        #[arg(short, long, allow_hyphen_values = true)]
        array: String,

        /// Number of days to simulate
        #[arg(short, long, allow_hyphen_values = true)]
        days: String,
    },
}

#[derive(Serialize)]
#[serde(untagged)]
enum Report<T: Serialize> {
    Result { result: T },
    Error { error: String },
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(path) => AppConfig::load_from_file(path),
        None => AppConfig::load(),
    }
}

fn print_outcome<T: Serialize>(
    format: OutputFormat,
    outcome: Result<T, InvalidArgument>,
    render: impl Fn(&T) -> String,
) -> ExitCode {
    let failed = outcome.is_err();

    match format {
        OutputFormat::Text => match &outcome {
            Ok(value) => println!("{}", render(value)),
            Err(e) => println!("{}", e),
        },
        OutputFormat::Json => {
            let report = match outcome {
                Ok(result) => Report::Result { result },
                Err(e) => Report::Error { error: e.message },
            };
            match serde_json::to_string(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    error!("Failed to serialize report: {}", e);
                    return ExitCode::from(2);
                }
            }
        }
    }

    if failed {
        warn!("Input was rejected");
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Could not load configuration: {}", e);
            return ExitCode::from(2);
        }
    };

    // Initialize the logger
    let env = Env::default()
        .filter_or("GCD_LAMPS_LOG", config.log_level.as_str())
        .write_style_or("GCD_LAMPS_LOG_STYLE", "auto");

    env_logger::Builder::from_env(env).init();
    debug!("Loaded configuration: {:?}", config);

    let format = if cli.json { OutputFormat::Json } else { config.output.format };

    match &cli.command {
        Commands::Gcd { count, array } => {
            info!("Computing GCD of the first {} numbers of [{}]", count, array);
            print_outcome(format, run_gcd(count, array), render_gcd)
        }
        Commands::Lamps { array, days } => {
            info!("Simulating lamps [{}] for {} days", array, days);
            print_outcome(format, run_lamps(array, days), |lamps| lamps.to_string())
        }
    }
}
