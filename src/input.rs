//! Reading form and extras records from JSON documents.

use crate::error::ContextError;
use crate::value::{Record, Value};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Path that reads from standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Parse a JSON document whose top level must be an object.
pub fn parse_record(text: &str) -> Result<Record, ContextError> {
    let document: serde_json::Value = serde_json::from_str(text)?;
    match Value::from(document) {
        Value::Record(record) => Ok(record),
        other => Err(ContextError::InvalidInput(format!(
            "expected a JSON object, got {}",
            kind_name(&other)
        ))),
    }
}

/// Read a record from a file, or from stdin when `path` is `-`.
pub fn read_record(path: &Path) -> Result<Record, ContextError> {
    let text = if path.as_os_str() == STDIN_PATH {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|source| ContextError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?
    };

    let record = parse_record(&text)?;
    debug!(path = %path.display(), fields = record.len(), "Record loaded");
    Ok(record)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::Text(_) => "a string",
        Value::List(_) => "an array",
        Value::Record(_) => "an object",
    }
}
