//! Aggregation of parsed features into name-keyed street entries.
//!
//! This module transforms a parsed feature collection into:
//! - One entry per distinct street name, geometries merged in input order
//! - Summary statistics for logging

pub mod stats;
pub mod streets;

// Re-export main types and functions
pub use stats::{calculate_street_stats, AggregationStats};
pub use streets::aggregate_streets;
