//! # fieldcompare - Field-by-field comparison of JSON records
//!
//! Compares schema-less records exported from different platforms (for
//! example product payloads from several e-commerce systems) and reports,
//! for every field path seen in any of them, what each platform has there.
//!
//! ## Modules
//!
//! - **compare**: path discovery, per-platform resolution and the comparison rows
//! - **render**: markdown table output
//! - **input**: loading records from files
//!
//! ## Field paths
//!
//! Nested objects flatten into dotted paths (`price.amount`). A non-empty array
//! adds a marker path (`tags[array]`), and when its first element is an object
//! that element's fields are listed under `[0]` (`variants[0].sku`).
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcompare::{compare, compare_json_inputs, CompareConfig};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let inputs = vec![
//!     json!({"title": "Shirt", "variants": [{"sku": "S-1"}]}),
//!     json!({"name": "Shirt", "price": "19.99"}),
//! ];
//!
//! let config = CompareConfig::new(["Magento", "Shopify"]);
//! let rows = compare(&inputs, &config)?;
//! assert_eq!(rows.len(), 6);
//!
//! let table = compare_json_inputs(&inputs, &config)?;
//! assert!(table.contains("| variants[0].sku | string: S-1 | - |"));
//! # Ok(())
//! # }
//! ```

use serde_json::Value;

pub mod compare;
pub mod error;
pub mod input;
pub mod logging;
pub mod render;

// Re-export commonly used types for convenience
pub use compare::{
    ComparisonBuilder, CompareConfig, ComparisonResult, FieldPath, KeyPathCollector, Observation,
    ValueType,
};
pub use error::{CompareError, Result};
pub use render::MarkdownTable;

/// Compare `inputs` and return one row per distinct field path
pub fn compare(inputs: &[Value], config: &CompareConfig) -> Result<Vec<ComparisonResult>> {
    ComparisonBuilder::new(config.clone()).build(inputs)
}

/// Compare `inputs` and render the result as a markdown table
pub fn compare_json_inputs(inputs: &[Value], config: &CompareConfig) -> Result<String> {
    let results = compare(inputs, config)?;
    Ok(MarkdownTable::new(&config.platforms).render(&results))
}
