//! Feature parsing and schema definitions.
//!
//! This module handles:
//! - Parsing raw JSON feature collections
//! - Validating the document shape
//! - Defining the output schema

pub mod features;
pub mod schema;

// Re-export main types
pub use features::{parse_collection, read_collection, Feature, FeatureCollection, FeatureProperties};
pub use schema::{AggregatedStreet, StreetMap};
