//! Key path resolution
//!
//! Resolves one field path against one input record, independently of every
//! other input. A failed step stops the walk and reports the path as missing
//! with a `null` value.

use crate::compare::path::{FieldPath, Segment};
use serde_json::Value;

static NULL: Value = Value::Null;

/// Outcome of resolving a path against one record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    pub exists: bool,
    /// The value at the path, or `null` when it does not exist
    pub value: &'a Value,
}

impl<'a> Resolution<'a> {
    fn found(value: &'a Value) -> Self {
        Resolution {
            exists: true,
            value,
        }
    }

    fn missing() -> Self {
        Resolution {
            exists: false,
            value: &NULL,
        }
    }
}

/// Resolve `path` against `root`.
///
/// - Plain paths look up each `.`-separated part as a literal object key.
/// - Array-marker paths drop the first `[array]` and resolve the rest like a
///   plain path. They report whether the base field exists, not whether it
///   holds an array.
/// - Example-element paths walk tokens split on `.`, `[` and `]`; a token
///   selects an object property, or an array element when it is numeric.
pub fn resolve<'a>(path: &FieldPath, root: &'a Value) -> Resolution<'a> {
    // the path kind already decided how the string was split into segments
    let found = path
        .segments()
        .iter()
        .try_fold(root, |current, segment| step(current, segment));

    match found {
        Some(value) => Resolution::found(value),
        None => Resolution::missing(),
    }
}

fn step<'a>(current: &'a Value, segment: &Segment) -> Option<&'a Value> {
    match (current, segment) {
        (Value::Object(obj), Segment::Key(key)) => obj.get(key),
        (Value::Object(obj), Segment::Element(token)) => obj.get(token),
        (Value::Array(items), Segment::Element(token)) => {
            token.parse::<usize>().ok().and_then(|index| items.get(index))
        }
        _ => None,
    }
}
