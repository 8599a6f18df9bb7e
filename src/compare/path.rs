//! Field path grammar
//!
//! A field path is the string key shown in the comparison table, e.g.
//! `customer.address.city`, `tags[array]` or `items[0].sku`. The collector
//! builds it from `.`-separated object keys plus two suffixes:
//!
//! - `[array]` marks "the field before me was observed as an array"
//! - `[0]` describes the first array element, standing in for the shape of
//!   every element
//!
//! The resolution rule is picked from the string itself: any `[array]` makes
//! it an array-marker path, otherwise any `[0]` makes it an example-element
//! path, otherwise it is plain. Data keys may contain brackets of their own
//! (`attributes[1]`), which plain paths look up literally.
//!
//! The string is kept verbatim for display and ordering, and parsed once
//! into [`Segment`]s for resolution.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Suffix appended to a key whose value is a non-empty array
pub const ARRAY_MARKER: &str = "[array]";

/// Suffix appended to a key to describe its first array element
pub const EXAMPLE_ELEMENT: &str = "[0]";

/// One lookup step of a parsed field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object property name, looked up literally
    Key(String),
    /// Example-element token: an object property, or an array position
    /// when the container is an array and the token is numeric
    Element(String),
}

/// Which resolution rule a path follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Literal object keys split on `.`
    Plain,
    /// Contains `[array]`; resolves the base field with literal keys
    ArrayMarker,
    /// Contains `[0]`; walks keys and array indices
    ExampleElement,
}

/// A field path: its display string plus the parsed lookup steps
#[derive(Debug, Clone)]
pub struct FieldPath {
    raw: String,
    kind: PathKind,
    segments: Vec<Segment>,
}

impl FieldPath {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let kind = path_kind(&raw);
        let segments = parse_segments(&raw, kind);
        FieldPath {
            raw,
            kind,
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn kind(&self) -> PathKind {
        self.kind
    }

    /// The first `.`-separated segment, used to group related rows
    pub fn top_level(&self) -> &str {
        top_level(&self.raw)
    }

    /// Number of `.`-separated segments
    pub fn depth(&self) -> usize {
        depth(&self.raw)
    }
}

fn top_level(path: &str) -> &str {
    path.split('.').next().unwrap_or(path)
}

fn depth(path: &str) -> usize {
    path.split('.').count()
}

fn path_kind(raw: &str) -> PathKind {
    if raw.contains(ARRAY_MARKER) {
        PathKind::ArrayMarker
    } else if raw.contains(EXAMPLE_ELEMENT) {
        PathKind::ExampleElement
    } else {
        PathKind::Plain
    }
}

fn parse_segments(raw: &str, kind: PathKind) -> Vec<Segment> {
    match kind {
        PathKind::Plain => literal_keys(raw),
        // only the first marker is stripped; the rest stays in the key text
        PathKind::ArrayMarker => literal_keys(&raw.replacen(ARRAY_MARKER, "", 1)),
        PathKind::ExampleElement => raw
            .split(['.', '[', ']'])
            .filter(|token| !token.is_empty())
            .map(|token| Segment::Element(token.to_string()))
            .collect(),
    }
}

fn literal_keys(path: &str) -> Vec<Segment> {
    path.split('.').map(|key| Segment::Key(key.to_string())).collect()
}

/// Ordering used for the comparison table.
///
/// Paths sort by their top-level segment, then shallow before deep, then by
/// the full string. This keeps every path under one top-level field together.
/// Strings compare byte-wise, so uppercase keys sort before lowercase ones.
pub fn compare_paths(a: &str, b: &str) -> Ordering {
    top_level(a)
        .cmp(top_level(b))
        .then_with(|| depth(a).cmp(&depth(b)))
        .then_with(|| a.cmp(b))
}

impl PartialEq for FieldPath {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for FieldPath {}

impl std::hash::Hash for FieldPath {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl PartialOrd for FieldPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldPath {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_paths(&self.raw, &other.raw)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for FieldPath {
    fn from(raw: &str) -> Self {
        FieldPath::new(raw)
    }
}

impl From<String> for FieldPath {
    fn from(raw: String) -> Self {
        FieldPath::new(raw)
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}
