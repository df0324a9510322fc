//! Multi-select flattening.

use crate::value::{Record, Value};

const SEPARATOR: &str = ", ";

/// `(output key, input key)` pairs for the multi-select fields rendered as text.
pub const LIST_FIELDS: &[(&str, &str)] = &[
    ("KI_HEMMNISSE", "ki_hemmnisse"),
    ("TRAININGS_INTERESSEN", "trainings_interessen"),
    ("ZIELGRUPPEN", "zielgruppen"),
    ("DATENQUELLEN", "datenquellen"),
    ("ki_usecases", "anwendungsfaelle"),
];

/// Join a list into one display string, keeping order and duplicates.
/// Non-list values pass through; null and absent become empty text.
pub fn flatten(value: Option<&Value>) -> Value {
    match value {
        Some(Value::List(items)) => Value::Text(
            items
                .iter()
                .map(Value::to_display)
                .collect::<Vec<_>>()
                .join(SEPARATOR),
        ),
        Some(Value::Null) | None => Value::empty_text(),
        Some(other) => other.clone(),
    }
}

pub fn flatten_lists(form: &Record, ctx: &mut Record) {
    for (output, input) in LIST_FIELDS {
        ctx.insert(output.to_string(), flatten(form.get(*input)));
    }
}
