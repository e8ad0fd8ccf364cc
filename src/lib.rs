//! Street Aggregator library
//!
//! Groups GeoJSON street features by name into a single lookup document.
//! The modules mirror the pipeline: `parser` reads the raw collection,
//! `aggregator` groups features per street name, `output` writes the
//! resulting JSON document, and `commands` wires them together for the CLI.

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
