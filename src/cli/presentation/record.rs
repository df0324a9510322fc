//! Record output for build and normalize.

use crate::error::ContextError;
use crate::value::Record;

pub fn format_record_json(record: &Record, pretty: bool) -> Result<String, ContextError> {
    let json = if pretty {
        serde_json::to_string_pretty(record)?
    } else {
        serde_json::to_string(record)?
    };
    Ok(json)
}
