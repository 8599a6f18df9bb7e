//! Key path discovery
//!
//! Walks every input record and accumulates the union of field paths seen in
//! any of them. Paths from all platforms are pooled into one set so that a
//! field present on only one platform still gets a row.
//!
//! Arrays are represented by a single example: a non-empty array adds an
//! `[array]` marker path, and if its first element is an object, that
//! element's fields are added under a `[0]` prefix. Only that first element
//! is inspected; a scalar or nested-array first element adds nothing further.

use crate::compare::classify::classify;
use crate::compare::path::{FieldPath, ARRAY_MARKER, EXAMPLE_ELEMENT};
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Accumulates the unified set of field paths across inputs
#[derive(Debug, Default)]
pub struct KeyPathCollector {
    paths: HashSet<String>,
    sample_count: usize,
}

impl KeyPathCollector {
    pub fn new() -> Self {
        KeyPathCollector::default()
    }

    /// Add every path found in one input record
    pub fn add_value(&mut self, value: &Value) {
        self.sample_count += 1;
        match value {
            Value::Object(obj) => self.add_object(obj, None),
            other => {
                warn!(
                    input = self.sample_count,
                    kind = %classify(Some(other)),
                    "input root is not an object; it contributes no paths"
                );
            }
        }
    }

    /// Add every path from a sequence of input records
    pub fn extend<'a, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'a Value>,
    {
        for value in values {
            self.add_value(value);
        }
    }

    fn add_object(&mut self, obj: &Map<String, Value>, prefix: Option<&str>) {
        for (key, value) in obj.iter() {
            let full_key = match prefix {
                Some(prefix) => format!("{}.{}", prefix, key),
                None => key.clone(),
            };

            match value {
                Value::Object(nested) => {
                    self.add_object(nested, Some(&full_key));
                }
                Value::Array(items) => {
                    if let Some(first) = items.first() {
                        self.paths.insert(format!("{}{}", full_key, ARRAY_MARKER));
                        if let Value::Object(example) = first {
                            let element_prefix = format!("{}{}", full_key, EXAMPLE_ELEMENT);
                            self.add_object(example, Some(&element_prefix));
                        }
                    }
                }
                _ => {}
            }

            self.paths.insert(full_key);
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Finish collection and return the paths in table order
    pub fn into_sorted(self) -> Vec<FieldPath> {
        let mut sorted: Vec<FieldPath> = self.paths.into_iter().map(FieldPath::new).collect();
        sorted.sort();
        debug!(
            inputs = self.sample_count,
            paths = sorted.len(),
            "collected field paths"
        );
        sorted
    }
}

/// Collect the unified, unordered path set for a group of inputs
pub fn collect_paths(inputs: &[Value]) -> HashSet<String> {
    let mut collector = KeyPathCollector::new();
    collector.extend(inputs);
    collector.paths
}
