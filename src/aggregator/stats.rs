//! Summary statistics over an aggregation result.
//!
//! These numbers only feed logging and the `--summary` block; they are
//! never written into the output document.

use crate::parser::StreetMap;

/// Counters describing one aggregation run
///
/// **Public** - returned from calculate_street_stats
#[derive(Debug, Clone, Default)]
pub struct AggregationStats {
    /// Features in the input collection, named or not
    pub feature_count: usize,

    /// Distinct street names in the result
    pub street_count: usize,

    /// Geometries collected across all names
    pub geometry_count: usize,

    /// Features skipped because they carry no name
    pub skipped_features: usize,

    /// Geometries beyond the first for their name
    pub duplicate_count: usize,

    /// Share of collected geometries that were duplicates, in percent
    pub duplicate_percentage: f64,

    /// Name with the most geometries, with its count
    pub largest_street: Option<(String, usize)>,
}

/// Calculate statistics for a finished aggregation
///
/// **Public** - called by the aggregate command after grouping
///
/// # Arguments
/// * `feature_count` - Size of the input collection before grouping
/// * `streets` - The aggregation result
pub fn calculate_street_stats(feature_count: usize, streets: &StreetMap) -> AggregationStats {
    let street_count = streets.len();
    let geometry_count: usize = streets.values().map(|s| s.geometry.len()).sum();
    let duplicate_count = geometry_count - street_count;

    let duplicate_percentage = if geometry_count > 0 {
        (duplicate_count as f64 / geometry_count as f64) * 100.0
    } else {
        0.0
    };

    let largest_street = streets
        .values()
        .max_by_key(|s| s.geometry.len())
        .map(|s| (s.name.clone(), s.geometry.len()));

    AggregationStats {
        feature_count,
        street_count,
        geometry_count,
        skipped_features: feature_count - geometry_count,
        duplicate_count,
        duplicate_percentage,
        largest_street,
    }
}

impl AggregationStats {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Features: {} | Streets: {} | Geometries: {} | Unnamed: {} | Duplicates: {:.1}%",
            self.feature_count,
            self.street_count,
            self.geometry_count,
            self.skipped_features,
            self.duplicate_percentage
        )
    }
}
