//! Label resolution and code passthrough for the coded survey fields.

use crate::context::first_truthy;
use crate::lookup::LookupTable;
use crate::value::{Record, Value};

/// Output keys carrying the human-readable label of each coded field.
pub const LABEL_KEYS: [(LookupTable, &str); 3] = [
    (LookupTable::Sector, "BRANCHE_LABEL"),
    (LookupTable::Size, "UNTERNEHMENSGROESSE_LABEL"),
    (LookupTable::Jurisdiction, "BUNDESLAND_LABEL"),
];

/// Output keys carrying the raw code of each coded field.
pub const CODE_KEYS: [(LookupTable, &str); 3] = [
    (LookupTable::Sector, "BRANCHE"),
    (LookupTable::Size, "UNTERNEHMENSGROESSE"),
    (LookupTable::Jurisdiction, "BUNDESLAND"),
];

/// Resolve one code to its label.
///
/// Known codes map to their label, unknown non-empty codes are shown as typed,
/// and a missing or empty code becomes empty text.
pub fn resolve_label(table: LookupTable, code: Option<&Value>) -> Value {
    let Some(code) = code else {
        return Value::empty_text();
    };
    if let Some(label) = code.as_text().and_then(|c| table.label(c)) {
        return Value::from(label);
    }
    if code.is_truthy() {
        code.clone()
    } else {
        Value::empty_text()
    }
}

pub fn resolve_labels(form: &Record, ctx: &mut Record) {
    for (table, key) in LABEL_KEYS {
        ctx.insert(key.to_string(), resolve_label(table, form.get(table.form_field())));
    }
}

pub fn passthrough_codes(form: &Record, ctx: &mut Record) {
    for (table, key) in CODE_KEYS {
        ctx.insert(key.to_string(), first_truthy(form, &[table.form_field()]));
    }
}
