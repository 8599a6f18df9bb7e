//! Loading platform records from files or streams

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Read one JSON document from a reader.
///
/// Parses with simd-json first and falls back to serde_json, which also
/// gives the better error message when the input is malformed.
pub fn read_value<R: Read>(reader: R) -> Result<Value> {
    let mut content = Vec::new();
    BufReader::new(reader)
        .read_to_end(&mut content)
        .context("Failed to read input")?;

    let mut scratch = content.clone();
    match simd_json::serde::from_slice::<Value>(&mut scratch) {
        Ok(value) => Ok(value),
        Err(err) => {
            debug!(error = %err, "simd-json parse failed, retrying with serde_json");
            serde_json::from_slice(&content).context("Failed to parse JSON")
        }
    }
}

/// Read one JSON document from a file
pub fn load_value<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    let value = read_value(file)
        .with_context(|| format!("Failed to load JSON from {}", path.display()))?;
    debug!(path = %path.display(), "loaded input");
    Ok(value)
}

/// Load one record per path, in order
pub fn load_values<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Value>> {
    paths.iter().map(load_value).collect()
}
