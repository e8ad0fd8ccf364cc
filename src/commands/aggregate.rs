//! Aggregate command implementation.
//!
//! The aggregate command:
//! 1. Reads the raw feature collection
//! 2. Groups features by street name
//! 3. Writes the aggregated document

use crate::aggregator::{aggregate_streets, calculate_street_stats};
use crate::output::write_streets;
use crate::parser::read_collection;
use crate::utils::config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the aggregate command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AggregateArgs {
    /// Path to the raw feature collection
    pub input: PathBuf,

    /// Output path for the aggregated JSON document
    pub output: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for AggregateArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            print_summary: false,
        }
    }
}

/// Execute the aggregate command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Aggregate command arguments
///
/// # Returns
/// Ok if aggregation succeeds, Err with context if any step fails
///
/// # Errors
/// * Input read or parse errors
/// * Output write errors
///
/// # Example
/// ```ignore
/// let args = AggregateArgs {
///     input: PathBuf::from("resources/streets.geojson"),
///     output: PathBuf::from("public/streets.geojson"),
///     print_summary: true,
/// };
///
/// execute_aggregate(args)?;
/// ```
pub fn execute_aggregate(args: AggregateArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting aggregation for: {}", args.input.display());

    // Step 1: Read the feature collection
    info!("Step 1/3: Reading feature collection...");
    let collection = read_collection(&args.input)
        .context("Failed to read feature collection")?;

    let feature_count = collection.features.len();
    debug!("Collection holds {} features", feature_count);

    // Step 2: Group features by street name
    info!("Step 2/3: Grouping features by street name...");
    let streets = aggregate_streets(collection.features);

    let stats = calculate_street_stats(feature_count, &streets);
    info!("Aggregation: {}", stats.summary());

    // Step 3: Write the aggregated document
    info!("Step 3/3: Writing aggregated streets...");
    write_streets(&streets, &args.output)
        .context("Failed to write aggregated streets")?;

    info!("✓ Streets written to: {}", args.output.display());

    // Print text summary (if requested)
    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("AGGREGATION SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Input:      {}", args.input.display());
        println!("Output:     {}", args.output.display());
        println!("Features:   {}", stats.feature_count);
        println!("Streets:    {}", stats.street_count);
        println!("Geometries: {}", stats.geometry_count);
        println!("Unnamed:    {}", stats.skipped_features);
        println!("Duplicates: {:.1}%", stats.duplicate_percentage);
        if let Some((name, count)) = &stats.largest_street {
            println!("Largest:    {} ({} segments)", name, count);
        }
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Aggregation completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate aggregate arguments
///
/// **Public** - can be called before execute_aggregate for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &AggregateArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    // Writing over the input would destroy the source data
    if args.input == args.output {
        anyhow::bail!("Input and output paths must differ");
    }

    Ok(())
}

/// Quick aggregation with defaults (convenience function)
///
/// **Public** - simplified API for common use case
///
/// # Arguments
/// * `input` - Path to the raw feature collection
/// * `output` - Path for the aggregated document
///
/// # Returns
/// Path to the written file
pub fn quick_aggregate(input: &str, output: &str) -> Result<PathBuf> {
    let args = AggregateArgs {
        input: PathBuf::from(input),
        output: PathBuf::from(output),
        print_summary: false,
    };

    validate_args(&args)?;
    execute_aggregate(args.clone())?;

    Ok(args.output)
}
