use anyhow::Result;
use std::path::PathBuf;
use crate::output::read_streets;
use crate::utils::config::NAME_PREVIEW_LIMIT;

/// Validate an aggregated street JSON file
pub fn validate_streets_file(file_path: PathBuf) -> Result<()> {
    println!("Validating street document: {}", file_path.display());

    let streets = read_streets(&file_path)?;

    for (key, street) in &streets {
        if key != &street.name {
            anyhow::bail!(
                "Key '{}' does not match entry name '{}'",
                key,
                street.name
            );
        }

        if street.lowercase_name != street.name.to_lowercase() {
            anyhow::bail!(
                "Entry '{}' carries a stale lowercase name '{}'",
                street.name,
                street.lowercase_name
            );
        }

        if street.geometry.is_empty() {
            anyhow::bail!("Entry '{}' has no geometry", street.name);
        }
    }

    let geometry_count: usize = streets.values().map(|s| s.geometry.len()).sum();

    println!("✓ Valid street document");
    println!("  Streets:    {}", streets.len());
    println!("  Geometries: {}", geometry_count);

    let mut names: Vec<&str> = streets.keys().map(String::as_str).collect();
    names.sort_unstable();

    for name in names.iter().take(NAME_PREVIEW_LIMIT) {
        println!("  - {}", name);
    }
    if names.len() > NAME_PREVIEW_LIMIT {
        println!("  ... and {} more", names.len() - NAME_PREVIEW_LIMIT);
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Street Aggregator Output Schema");
    println!();

    if show_details {
        println!("Schema Structure (object keyed by street name):");
        println!("  <name>: object           - One entry per distinct street name");
        println!("    name: string           - Street name exactly as it appears in the input");
        println!("    lowercase_name: string - Lowercased form of the name");
        println!("    geometry: array        - Geometry objects, in input order");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Street Aggregator v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Groups GeoJSON street features by name into a single lookup document.");
}
