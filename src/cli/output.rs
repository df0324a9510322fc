//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ContextError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ContextError) -> String {
    match e {
        ContextError::Json(inner) => format!("Invalid JSON input: {}", inner),
        other => other.to_string(),
    }
}
