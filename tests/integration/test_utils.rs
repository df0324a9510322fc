//! Shared helpers for integration tests.

use briefing_context::Record;
use std::path::{Path, PathBuf};

/// Build a record from a JSON object literal.
pub fn record(json: serde_json::Value) -> Record {
    serde_json::from_value(json).expect("test record must be a JSON object")
}

/// Write a JSON document into `dir` and return its path.
pub fn write_json(dir: &Path, name: &str, json: &serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(json).unwrap()).unwrap();
    path
}
