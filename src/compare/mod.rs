//! Field-by-field comparison of heterogeneous JSON records
//!
//! Discovers every field path across all inputs, then resolves each path
//! against each input to record whether it exists, its type and its value.

pub mod types;
pub mod classify;
pub mod path;
pub mod collector;
pub mod resolver;
pub mod builder;

pub use types::{CompareConfig, ComparisonResult, Observation, ValueType, DEFAULT_PLATFORMS};
pub use classify::{classify, format_value};
pub use path::{compare_paths, FieldPath, PathKind, Segment};
pub use collector::{collect_paths, KeyPathCollector};
pub use resolver::{resolve, Resolution};
pub use builder::ComparisonBuilder;
