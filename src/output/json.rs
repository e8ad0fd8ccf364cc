//! JSON output writer for aggregated street documents.
//!
//! Writes the name-keyed result to disk with human-readable formatting.

use crate::parser::schema::{AggregatedStreet, StreetMap};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::Path;

/// Write an aggregation result to a JSON file
///
/// **Public** - main entry point for output
///
/// The document is serialized fully in memory first and then written in
/// one pass, so a serialization failure never leaves a half-written file.
/// An existing file at `output_path` is overwritten. Keys are emitted in
/// sorted order, which makes repeated runs byte-identical.
///
/// # Arguments
/// * `streets` - Aggregation result to write
/// * `output_path` - Path to the output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_streets(streets: &StreetMap, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!(
        "Writing {} street entries to: {}",
        streets.len(),
        output_path.display()
    );

    // Validate path
    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Sort keys for a stable document, then serialize with pretty printing
    let ordered: BTreeMap<&str, &AggregatedStreet> = streets
        .iter()
        .map(|(name, street)| (name.as_str(), street))
        .collect();

    let body =
        serde_json::to_string_pretty(&ordered).map_err(OutputError::SerializationFailed)?;

    // Single write; nothing has touched the file before this point
    fs::write(output_path, body).map_err(OutputError::WriteFailed)?;

    info!(
        "Output written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read an aggregated street document from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing the io variant)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_streets(input_path: impl AsRef<Path>) -> Result<StreetMap, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading street document from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let streets: StreetMap =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!("Loaded {} street entries", streets.len());

    Ok(streets)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Refuse to overwrite a directory
    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
