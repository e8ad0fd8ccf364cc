//! Street Aggregator CLI
//!
//! Groups GeoJSON street features by name and writes a lookup document
//! keyed by street name, ready to serve to the map frontend.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use street_aggregator::commands::{
    display_schema, display_version, execute_aggregate, validate_args, validate_streets_file,
    AggregateArgs,
};
use street_aggregator::utils::config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};

/// Street Aggregator - street-name grouping for GeoJSON feature collections
#[derive(Parser, Debug)]
#[command(name = "street-aggregator")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate a feature collection into a street document
    Aggregate {
        /// Path to the raw feature collection
        #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,

        /// Output path for the aggregated JSON document
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate an aggregated street JSON file
    Validate {
        /// Path to the street JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Aggregate {
            input,
            output,
            summary,
        } => {
            let args = AggregateArgs {
                input,
                output,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute aggregation
            execute_aggregate(args)?;
        }

        Commands::Validate { file } => {
            validate_streets_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
