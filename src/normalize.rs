//! Answer normalization
//!
//! Some form front-ends submit display labels ("IT & Software") or full state names
//! instead of the short codes the lookup tables use. [`normalize_answers`] maps those
//! back onto codes so label resolution can find them. It is opt-in: the context
//! builder itself never rewrites form fields.

use crate::lookup::LookupTable;
use crate::value::{Record, Value};
use unicode_normalization::UnicodeNormalization;

/// Size-class spellings seen in older form versions.
const SIZE_SPELLINGS: &[(&str, &str)] = &[
    ("1 (solo-selbstständig/freiberuflich)", "solo"),
    ("2-10", "team"),
    ("2–10", "team"),
    ("11-100", "kmu"),
    ("11–100", "kmu"),
];

/// Research window fields the UI submits as text ("7", "30", "60").
const DAY_WINDOW_FIELDS: &[&str] = &["research_days", "tools_days", "funding_days"];

/// Return a copy of `form` with coded fields mapped onto canonical codes.
pub fn normalize_answers(form: &Record) -> Record {
    let mut out = form.clone();

    normalize_coded(&mut out, LookupTable::Sector, &[]);
    normalize_coded(&mut out, LookupTable::Size, SIZE_SPELLINGS);
    normalize_jurisdiction(&mut out);

    for field in DAY_WINDOW_FIELDS {
        if let Some(days) = out.get(*field).and_then(parse_days) {
            out.insert(field.to_string(), Value::Number(days));
        }
    }

    out
}

/// NFC-normalized, trimmed, lower-cased comparison key.
fn comparison_key(text: &str) -> String {
    text.nfc().collect::<String>().trim().to_lowercase()
}

fn normalize_coded(out: &mut Record, table: LookupTable, spellings: &[(&str, &'static str)]) {
    let field = table.form_field();
    let Some(text) = out.get(field).and_then(Value::as_text) else {
        return;
    };
    let key = comparison_key(text);

    let code = table.code_for_label(&key).or_else(|| {
        spellings
            .iter()
            .find(|(spelling, _)| *spelling == key)
            .map(|(_, code)| *code)
    });
    if let Some(code) = code {
        out.insert(field.to_string(), Value::from(code));
    }
}

fn normalize_jurisdiction(out: &mut Record) {
    let field = LookupTable::Jurisdiction.form_field();
    let Some(text) = out.get(field).and_then(Value::as_text) else {
        return;
    };
    let key = comparison_key(text);

    let code = match LookupTable::Jurisdiction.code_for_label(&key) {
        Some(code) => code.to_string(),
        None => key.chars().take(2).collect(),
    };
    out.insert(field.to_string(), Value::Text(code));
}

fn parse_days(value: &Value) -> Option<f64> {
    match value {
        Value::Text(text) => text.trim().parse::<i64>().ok().map(|days| days as f64),
        Value::Number(n) if n.is_finite() && n.fract() == 0.0 => Some(*n),
        _ => None,
    }
}
