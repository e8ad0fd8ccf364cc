//! Output generation for aggregated streets
//!
//! Supports:
//! - Pretty-printed JSON documents keyed by street name
//! - Reading a written document back for validation

pub mod json;

pub use json::{read_streets, write_streets};
