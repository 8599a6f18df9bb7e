//! Comparison assembly
//!
//! Collects the unified path set over all inputs, sorts it into table order,
//! then resolves and classifies every path against every input. Each input is
//! labeled with the configured platform name at the same position.

use crate::compare::classify::classify;
use crate::compare::collector::KeyPathCollector;
use crate::compare::resolver::resolve;
use crate::compare::types::{CompareConfig, ComparisonResult, Observation};
use crate::error::Result;
use serde_json::Value;
use tracing::{debug, trace};

/// Builds the per-path comparison across a set of platform inputs
pub struct ComparisonBuilder {
    config: CompareConfig,
}

impl ComparisonBuilder {
    pub fn new(config: CompareConfig) -> Self {
        ComparisonBuilder { config }
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compare `inputs`, the i-th input belonging to the i-th configured platform.
    ///
    /// Returns one result per distinct field path, in table order. Fails only
    /// when the platform configuration cannot label every input.
    pub fn build(&self, inputs: &[Value]) -> Result<Vec<ComparisonResult>> {
        self.config.validate_inputs(inputs.len())?;

        let mut collector = KeyPathCollector::new();
        collector.extend(inputs);
        let paths = collector.into_sorted();

        let results: Vec<ComparisonResult> = paths
            .into_iter()
            .map(|path| {
                let platforms = inputs
                    .iter()
                    .zip(self.config.platforms.iter())
                    .map(|(input, name)| {
                        let resolution = resolve(&path, input);
                        let observation = Observation::new(
                            resolution.exists,
                            classify(Some(resolution.value)),
                            resolution.value.clone(),
                        );
                        trace!(path = %path, platform = %name, exists = observation.exists, "resolved");
                        (name.clone(), observation)
                    })
                    .collect();

                ComparisonResult { key: path, platforms }
            })
            .collect();

        debug!(
            inputs = inputs.len(),
            rows = results.len(),
            "built comparison"
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::types::ValueType;
    use crate::error::CompareError;
    use serde_json::json;

    fn four(first: Value) -> Vec<Value> {
        vec![first, json!({}), json!({}), json!({})]
    }

    fn build(inputs: &[Value]) -> Vec<ComparisonResult> {
        ComparisonBuilder::new(CompareConfig::default())
            .build(inputs)
            .unwrap()
    }

    fn keys(results: &[ComparisonResult]) -> Vec<&str> {
        results.iter().map(|r| r.key.as_str()).collect()
    }

    #[test]
    fn test_all_empty_inputs() {
        let results = build(&[json!({}), json!({}), json!({}), json!({})]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_single_field_on_one_platform() {
        let results = build(&four(json!({"a": 1})));
        assert_eq!(keys(&results), vec!["a"]);

        let row = &results[0];
        assert_eq!(
            row.platform("Magento"),
            Some(&Observation::new(true, ValueType::Number, json!(1)))
        );
        for name in ["WooCommerce", "Shopify", "Lightspeed"] {
            assert_eq!(row.platform(name), Some(&Observation::missing()));
        }
    }

    #[test]
    fn test_nested_object() {
        let results = build(&four(json!({"a": {"b": true}})));
        assert_eq!(keys(&results), vec!["a", "a.b"]);

        let a = results[0].platform("Magento").unwrap();
        assert!(a.exists);
        assert_eq!(a.value_type, ValueType::Object);

        let ab = results[1].platform("Magento").unwrap();
        assert_eq!(ab, &Observation::new(true, ValueType::Boolean, json!(true)));
    }

    #[test]
    fn test_scalar_array() {
        let results = build(&four(json!({"tags": ["x", "y"]})));
        assert_eq!(keys(&results), vec!["tags", "tags[array]"]);

        for row in &results {
            let obs = row.platform("Magento").unwrap();
            assert!(obs.exists);
            assert_eq!(obs.value_type, ValueType::Array);
            assert_eq!(obs.value, json!(["x", "y"]));
        }
    }

    #[test]
    fn test_object_array() {
        let results = build(&four(json!({"items": [{"id": 1}]})));
        assert_eq!(keys(&results), vec!["items", "items[0].id", "items[array]"]);

        let id = results[1].platform("Magento").unwrap();
        assert_eq!(id, &Observation::new(true, ValueType::Number, json!(1)));
        assert!(!results[1].platform("Shopify").unwrap().exists);
    }

    #[test]
    fn test_empty_array_on_one_platform() {
        let results = build(&[
            json!({"items": [{"id": 1}]}),
            json!({"items": []}),
        ]);
        assert_eq!(keys(&results), vec!["items", "items[0].id", "items[array]"]);

        let woo_items = results[0].platform("WooCommerce").unwrap();
        assert_eq!(woo_items.value_type, ValueType::Array);
        assert!(woo_items.exists);
        assert!(!results[1].platform("WooCommerce").unwrap().exists);
        assert!(results[2].platform("WooCommerce").unwrap().exists);
    }

    #[test]
    fn test_mixed_types_are_not_normalized() {
        let results = build(&[json!({"price": "9.99"}), json!({"price": 9.99})]);
        assert_eq!(results[0].platform("Magento").unwrap().value_type, ValueType::String);
        assert_eq!(results[0].platform("WooCommerce").unwrap().value_type, ValueType::Number);
    }

    #[test]
    fn test_fewer_inputs_than_platforms() {
        let results = build(&[json!({"a": 1})]);
        assert_eq!(results[0].platforms.len(), 1);
        assert!(results[0].platform("WooCommerce").is_none());
    }

    #[test]
    fn test_too_many_inputs_fails_fast() {
        let builder = ComparisonBuilder::new(CompareConfig::new(["A", "B"]));
        let err = builder
            .build(&[json!({}), json!({}), json!({})])
            .unwrap_err();
        assert_eq!(
            err,
            CompareError::TooManyInputs {
                inputs: 3,
                platforms: 2
            }
        );
    }

    #[test]
    fn test_missing_always_null() {
        let inputs = vec![
            json!({"a": {"b": [1]}, "items": [{"x": {"y": null}}]}),
            json!({"a": 5, "items": []}),
            json!({"items": "none"}),
            json!([]),
        ];
        for row in build(&inputs) {
            for (_, obs) in &row.platforms {
                if !obs.exists {
                    assert_eq!(obs.value_type, ValueType::Null);
                    assert_eq!(obs.value, Value::Null);
                }
            }
        }
    }

    #[test]
    fn test_deterministic_and_sorted() {
        let inputs = vec![
            json!({"z": 1, "b": {"c": {"d": 1}, "a": 2}, "list": [{"k": 1}]}),
            json!({"a": [], "b": {"e": true}}),
        ];
        let first = build(&inputs);
        let second = build(&inputs);
        assert_eq!(first, second);

        for pair in first.windows(2) {
            assert!(pair[0].key < pair[1].key, "{} !< {}", pair[0].key, pair[1].key);
        }
    }

    #[test]
    fn test_every_key_appears() {
        let inputs = vec![
            json!({"name": "shirt", "meta": {"seo": {"title": "t"}}}),
            json!({"title": "shirt", "variants": [{"sku": "S-1"}]}),
        ];
        let results = build(&inputs);
        let found = keys(&results);
        for expected in ["name", "meta", "meta.seo", "meta.seo.title", "title", "variants", "variants[array]", "variants[0].sku"] {
            assert!(found.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_array_marker_inside_example_element_is_missing() {
        let results = build(&[json!({"items": [{"tags": ["new"]}]})]);
        let row = results
            .iter()
            .find(|r| r.key.as_str() == "items[0].tags[array]")
            .unwrap();
        assert_eq!(row.platform("Magento"), Some(&Observation::missing()));

        let tags = results
            .iter()
            .find(|r| r.key.as_str() == "items[0].tags")
            .unwrap();
        assert_eq!(
            tags.platform("Magento"),
            Some(&Observation::new(true, ValueType::Array, json!(["new"])))
        );
    }

    #[test]
    fn test_keys_containing_brackets() {
        let results = build(&[json!({
            "attributes[1]": "red",
            "sizes": {"eu[42]": true},
            "a[00]": 1,
            "x[array]": 2,
            "code[0]": "c"
        })]);
        let magento = |key: &str| {
            results
                .iter()
                .find(|r| r.key.as_str() == key)
                .and_then(|r| r.platform("Magento"))
                .cloned()
                .unwrap()
        };

        // no `[array]` or `[0]`: looked up literally
        assert_eq!(
            magento("attributes[1]"),
            Observation::new(true, ValueType::String, json!("red"))
        );
        assert_eq!(
            magento("sizes.eu[42]"),
            Observation::new(true, ValueType::Boolean, json!(true))
        );
        assert_eq!(magento("a[00]"), Observation::new(true, ValueType::Number, json!(1)));

        // `[array]` resolves the base `x`, `[0]` walks `code` then index 0
        assert_eq!(magento("x[array]"), Observation::missing());
        assert_eq!(magento("code[0]"), Observation::missing());
    }
}
