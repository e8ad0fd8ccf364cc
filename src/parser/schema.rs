//! Output JSON schema definitions for aggregated street data.
//!
//! This module defines the structure of the document we write to disk:
//! a JSON object keyed by street name, one entry per distinct name.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A single street entry in the output document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedStreet {
    /// Street name exactly as it appeared in the input
    pub name: String,

    /// Lower-cased form of `name`, fixed when the entry is created
    pub lowercase_name: String,

    /// Every geometry observed for this name, in input order
    pub geometry: Vec<Value>,
}

/// Name-keyed aggregation result
///
/// Key order carries no meaning; the writer sorts keys on serialization.
pub type StreetMap = HashMap<String, AggregatedStreet>;

impl AggregatedStreet {
    /// Create an entry for `name` seeded with its first geometry
    ///
    /// `lowercase_name` is derived here with [`str::to_lowercase`], the
    /// Unicode simple lowercase mapping. It is locale-independent, so
    /// accented names fold the same way on every host. The derived form is
    /// never recomputed when further geometries are appended.
    pub fn new(name: impl Into<String>, geometry: Value) -> Self {
        let name = name.into();
        let lowercase_name = name.to_lowercase();

        Self {
            name,
            lowercase_name,
            geometry: vec![geometry],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_entry_derives_lowercase() {
        let street = AggregatedStreet::new("Main St", json!({"type": "Point"}));

        assert_eq!(street.name, "Main St");
        assert_eq!(street.lowercase_name, "main st");
        assert_eq!(street.geometry.len(), 1);
    }

    #[test]
    fn test_new_entry_lowercases_accents() {
        let street = AggregatedStreet::new("Überseeallee", json!(null));
        assert_eq!(street.lowercase_name, "überseeallee");
    }

    #[test]
    fn test_entry_round_trips_through_json() {
        let street = AggregatedStreet::new("Oak Ave", json!([[1.0, 2.0], [3.0, 4.0]]));

        let encoded = serde_json::to_string(&street).unwrap();
        let decoded: AggregatedStreet = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, street);
    }
}
