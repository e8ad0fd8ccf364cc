//! Single-pass grouping of features by street name.
//!
//! Survey exports carry one feature per mapped segment, so a street that
//! crosses many blocks appears many times under the same name. This pass
//! folds those duplicates into one entry per name while keeping every
//! segment geometry.

use crate::parser::schema::{AggregatedStreet, StreetMap};
use crate::parser::Feature;
use log::debug;

/// Group features into one entry per distinct street name
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `features` - Parsed features in document order
///
/// # Returns
/// Name-keyed map with one entry per distinct non-null name. Each entry
/// holds the geometries of all features sharing that name, in the order
/// the features arrived.
///
/// # Algorithm
/// One forward pass, left to right:
/// 1. Features without a name are skipped and touch nothing.
/// 2. A name seen before gets its geometry appended in place.
/// 3. A new name gets a fresh entry with the lower-cased form computed
///    once (see [`AggregatedStreet::new`]).
pub fn aggregate_streets(features: Vec<Feature>) -> StreetMap {
    debug!("Aggregating {} features", features.len());

    let mut streets = StreetMap::new();
    let mut unnamed = 0usize;

    for feature in features {
        let Some(name) = feature.properties.name else {
            unnamed += 1;
            continue;
        };

        if let Some(entry) = streets.get_mut(&name) {
            entry.geometry.push(feature.geometry);
        } else {
            streets.insert(name.clone(), AggregatedStreet::new(name, feature.geometry));
        }
    }

    debug!(
        "Aggregated into {} street names ({} unnamed features skipped)",
        streets.len(),
        unnamed
    );

    streets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::FeatureProperties;
    use serde_json::{json, Value};

    fn feature(name: Option<&str>, geometry: Value) -> Feature {
        Feature {
            properties: FeatureProperties {
                name: name.map(str::to_string),
            },
            geometry,
        }
    }

    #[test]
    fn test_duplicate_names_merge_in_order() {
        let features = vec![
            feature(Some("Main St"), json!("A")),
            feature(Some("Main St"), json!("B")),
            feature(None, json!("C")),
            feature(Some("Oak Ave"), json!("D")),
        ];

        let streets = aggregate_streets(features);

        assert_eq!(streets.len(), 2);

        let main = &streets["Main St"];
        assert_eq!(main.name, "Main St");
        assert_eq!(main.lowercase_name, "main st");
        assert_eq!(main.geometry, vec![json!("A"), json!("B")]);

        let oak = &streets["Oak Ave"];
        assert_eq!(oak.lowercase_name, "oak ave");
        assert_eq!(oak.geometry, vec![json!("D")]);
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let streets = aggregate_streets(Vec::new());
        assert!(streets.is_empty());
    }

    #[test]
    fn test_all_unnamed_yields_empty_map() {
        let features = vec![
            feature(None, json!("A")),
            feature(None, json!("B")),
            feature(None, json!("C")),
        ];

        let streets = aggregate_streets(features);
        assert!(streets.is_empty());
    }

    #[test]
    fn test_unnamed_features_do_not_touch_other_entries() {
        let features = vec![
            feature(Some("Main St"), json!("A")),
            feature(None, json!("X")),
            feature(Some("Main St"), json!("B")),
        ];

        let streets = aggregate_streets(features);

        assert_eq!(streets.len(), 1);
        assert_eq!(streets["Main St"].geometry, vec![json!("A"), json!("B")]);
    }

    #[test]
    fn test_interleaved_names_keep_relative_order() {
        let features = vec![
            feature(Some("Main St"), json!(1)),
            feature(Some("Oak Ave"), json!(2)),
            feature(Some("Main St"), json!(3)),
            feature(Some("Oak Ave"), json!(4)),
            feature(Some("Main St"), json!(5)),
        ];

        let streets = aggregate_streets(features);

        assert_eq!(
            streets["Main St"].geometry,
            vec![json!(1), json!(3), json!(5)]
        );
        assert_eq!(streets["Oak Ave"].geometry, vec![json!(2), json!(4)]);
    }

    #[test]
    fn test_case_variants_are_distinct_names() {
        let features = vec![
            feature(Some("Main St"), json!("A")),
            feature(Some("MAIN ST"), json!("B")),
        ];

        let streets = aggregate_streets(features);

        assert_eq!(streets.len(), 2);
        assert_eq!(streets["Main St"].lowercase_name, "main st");
        assert_eq!(streets["MAIN ST"].lowercase_name, "main st");
    }

    #[test]
    fn test_lowercase_fixed_at_first_insertion() {
        let features = vec![
            feature(Some("Übergasse"), json!("A")),
            feature(Some("Übergasse"), json!("B")),
            feature(Some("Übergasse"), json!("C")),
        ];

        let streets = aggregate_streets(features);

        let entry = &streets["Übergasse"];
        assert_eq!(entry.lowercase_name, "übergasse");
        assert_eq!(entry.geometry.len(), 3);
    }

    #[test]
    fn test_aggregation_is_deterministic() {
        let build = || {
            vec![
                feature(Some("Main St"), json!({"type": "LineString"})),
                feature(Some("Oak Ave"), json!({"type": "Point"})),
                feature(Some("Main St"), json!(null)),
                feature(None, json!("ignored")),
            ]
        };

        assert_eq!(aggregate_streets(build()), aggregate_streets(build()));
    }
}
