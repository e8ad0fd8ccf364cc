//! Configuration and constants for the CLI.

/// Default location of the raw street feature collection
///
/// Mirrors the layout of the map project this tool feeds: raw survey
/// exports live under `resources/`, build artifacts under `public/`.
pub const DEFAULT_INPUT_PATH: &str = "resources/streets.geojson";

/// Default location for the aggregated output document
pub const DEFAULT_OUTPUT_PATH: &str = "public/streets.geojson";

/// Maximum number of street names the validate command lists
pub const NAME_PREVIEW_LIMIT: usize = 10;
