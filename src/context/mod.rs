//! Context domain: turns a form submission into a template-ready context record.
//! Pure and synchronous; stages run in a fixed order inside [`ContextBuilder::build`].

pub mod aliases;
pub mod builder;
pub mod financials;
pub mod labels;
pub mod lists;

pub use aliases::{consolidate_aliases, AliasRule, ALIAS_RULES};
pub use builder::{build_context, merge_extras, redact, ContextBuilder, REDACTED_FIELD};
pub use financials::{derive_financials, FinancialDefaults};
pub use labels::{passthrough_codes, resolve_label, resolve_labels};
pub use lists::{flatten, flatten_lists, LIST_FIELDS};

use crate::value::{Record, Value};

/// First non-empty value among `keys`, or empty text when none has one.
pub(crate) fn first_truthy(form: &Record, keys: &[&str]) -> Value {
    keys.iter()
        .filter_map(|key| form.get(*key))
        .find(|value| value.is_truthy())
        .cloned()
        .unwrap_or_else(Value::empty_text)
}
