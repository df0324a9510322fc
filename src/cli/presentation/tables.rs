//! Lookup table listings.

use crate::error::ContextError;
use crate::lookup::LookupTable;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

pub fn format_tables_text(tables: &[LookupTable]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Table", "Field", "Code", "Label"]);
    for lookup in tables {
        for &(code, label) in lookup.entries() {
            table.add_row(vec![lookup.as_str(), lookup.form_field(), code, label]);
        }
    }
    table.to_string()
}

pub fn format_tables_json(tables: &[LookupTable]) -> Result<String, ContextError> {
    let out: serde_json::Map<String, serde_json::Value> = tables
        .iter()
        .map(|lookup| {
            let entries = lookup
                .entries()
                .iter()
                .map(|(code, label)| serde_json::json!({ "code": code, "label": label }))
                .collect();
            (lookup.as_str().to_string(), serde_json::Value::Array(entries))
        })
        .collect();
    Ok(serde_json::to_string_pretty(&out)?)
}
