//! Command implementations for the CLI.
//!
//! Each command is a thin orchestration layer over the library modules:
//! - `aggregate` - read, group, and write street features
//! - `utils` - validation and informational helpers

pub mod aggregate;
pub mod utils;

pub use aggregate::{execute_aggregate, quick_aggregate, validate_args, AggregateArgs};
pub use utils::{display_schema, display_version, validate_streets_file};
