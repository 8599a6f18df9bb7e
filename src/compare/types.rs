use crate::compare::path::FieldPath;
use crate::error::{CompareError, Result};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// Semantic kind of a value as shown in the comparison table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Null,
    Undefined,
}

impl ValueType {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Number => "number",
            ValueType::Boolean => "boolean",
            ValueType::Object => "object",
            ValueType::Array => "array",
            ValueType::Null => "null",
            ValueType::Undefined => "undefined",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What one platform has at one field path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    /// Whether the path resolved in this platform's record
    pub exists: bool,

    /// Classified type of the resolved value (`null` when missing)
    #[serde(rename = "type")]
    pub value_type: ValueType,

    /// The resolved value (`null` when missing)
    pub value: Value,
}

impl Observation {
    pub fn new(exists: bool, value_type: ValueType, value: Value) -> Self {
        Observation {
            exists,
            value_type,
            value,
        }
    }

    /// The observation recorded for a path that did not resolve
    pub fn missing() -> Self {
        Observation::new(false, ValueType::Null, Value::Null)
    }
}

/// One row of the comparison: a field path and every platform's observation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub key: FieldPath,

    /// Observations keyed by platform name, in platform order
    #[serde(serialize_with = "serialize_platforms")]
    pub platforms: Vec<(String, Observation)>,
}

impl ComparisonResult {
    pub fn new(key: FieldPath) -> Self {
        ComparisonResult {
            key,
            platforms: Vec::new(),
        }
    }

    pub fn with_observation(mut self, platform: impl Into<String>, observation: Observation) -> Self {
        self.platforms.push((platform.into(), observation));
        self
    }

    /// Look up the observation for a platform by name
    pub fn platform(&self, name: &str) -> Option<&Observation> {
        self.platforms
            .iter()
            .find(|(platform, _)| platform == name)
            .map(|(_, observation)| observation)
    }
}

fn serialize_platforms<S: Serializer>(
    platforms: &[(String, Observation)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(platforms.len()))?;
    for (name, observation) in platforms {
        map.serialize_entry(name, observation)?;
    }
    map.end()
}

/// Platform names used when none are configured
pub const DEFAULT_PLATFORMS: [&str; 4] = ["Magento", "WooCommerce", "Shopify", "Lightspeed"];

/// Configuration for a comparison run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    /// Display names; the i-th input is labeled with the i-th name
    pub platforms: Vec<String>,
}

impl CompareConfig {
    pub fn new<I, S>(platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CompareConfig {
            platforms: platforms.into_iter().map(Into::into).collect(),
        }
    }

    /// Name of the platform at `index`, if one is configured
    pub fn platform_name(&self, index: usize) -> Option<&str> {
        self.platforms.get(index).map(String::as_str)
    }

    /// Check the names themselves: none empty, none repeated
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (index, name) in self.platforms.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(CompareError::EmptyPlatform { index });
            }
            if !seen.insert(name.as_str()) {
                return Err(CompareError::DuplicatePlatform(name.clone()));
            }
        }
        Ok(())
    }

    /// Check that every one of `input_count` inputs gets a name
    pub fn validate_inputs(&self, input_count: usize) -> Result<()> {
        self.validate()?;
        if input_count > self.platforms.len() {
            return Err(CompareError::TooManyInputs {
                inputs: input_count,
                platforms: self.platforms.len(),
            });
        }
        Ok(())
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        CompareConfig::new(DEFAULT_PLATFORMS)
    }
}
