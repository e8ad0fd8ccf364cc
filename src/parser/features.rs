//! Input parser for GeoJSON-like feature collections.
//!
//! Parses raw JSON from the survey export into typed features.
//! Geometry values are never interpreted; they ride along as opaque JSON.

use crate::utils::error::ParseError;
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// A single feature from the input collection
///
/// Both fields are required; a feature without `properties` or without
/// `geometry` makes the whole document invalid.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    /// Attributes attached to the feature; only `name` is read
    pub properties: FeatureProperties,

    /// Opaque geometry value, passed through to the output unmodified
    pub geometry: Value,
}

/// The subset of feature properties this tool reads
///
/// Survey exports carry many more attributes; serde drops the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureProperties {
    /// Street name; `null` or an absent key marks an unnamed feature
    pub name: Option<String>,
}

/// An ordered collection of features
///
/// Sibling fields of `features` (`type`, `crs`, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    /// Features in document order
    pub features: Vec<Feature>,
}

/// Read and parse a feature collection from a file
///
/// **Public** - main entry point for input loading
///
/// # Arguments
/// * `path` - Path to a JSON document with a `features` array
///
/// # Returns
/// The typed collection, features in document order
///
/// # Errors
/// * `ParseError::IoError` - File missing or unreadable
/// * `ParseError::JsonError` - Not valid JSON, or a feature is missing a
///   required field
/// * `ParseError::InvalidFormat` - Valid JSON but not a feature collection
pub fn read_collection(path: impl AsRef<Path>) -> Result<FeatureCollection, ParseError> {
    let path = path.as_ref();

    debug!("Reading feature collection from: {}", path.display());

    let raw = fs::read_to_string(path)?;
    parse_collection(&raw)
}

/// Parse a feature collection from raw JSON text
///
/// **Public** - used by read_collection and directly by tests
pub fn parse_collection(raw: &str) -> Result<FeatureCollection, ParseError> {
    let value: Value = serde_json::from_str(raw)?;

    // Check the document shape before the typed pass so the common
    // mistakes get a targeted message instead of a generic serde one.
    let Value::Object(obj) = &value else {
        return Err(ParseError::InvalidFormat(
            "expected a JSON object at the top level".to_string(),
        ));
    };
    if !obj.contains_key("features") {
        return Err(ParseError::InvalidFormat(
            "missing `features` array".to_string(),
        ));
    }

    let collection: FeatureCollection = serde_json::from_value(value)?;

    debug!("Parsed {} features", collection.features.len());

    Ok(collection)
}
