//! Context builder: the single entry point running every stage in order.

use crate::context::aliases::consolidate_aliases;
use crate::context::financials::{derive_financials, FinancialDefaults};
use crate::context::labels::{passthrough_codes, resolve_labels};
use crate::context::lists::flatten_lists;
use crate::value::Record;

/// Organization name. Never handed to a renderer.
pub const REDACTED_FIELD: &str = "unternehmen_name";

/// Builds context records from form submissions.
///
/// Stateless apart from its financial defaults, so one builder can be shared
/// freely across threads.
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    defaults: FinancialDefaults,
}

impl ContextBuilder {
    pub fn new(defaults: FinancialDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &FinancialDefaults {
        &self.defaults
    }

    /// Build the context for one submission.
    ///
    /// The result holds every form field, the derived label, code, alias, list and
    /// financial fields, and every extras field (which win over anything derived).
    /// The organization name is always removed, even when extras supply it.
    pub fn build(&self, form: &Record, extras: Option<&Record>) -> Record {
        let mut ctx = form.clone();

        resolve_labels(form, &mut ctx);
        passthrough_codes(form, &mut ctx);
        consolidate_aliases(form, &mut ctx);
        flatten_lists(form, &mut ctx);
        derive_financials(form, &self.defaults, &mut ctx);

        if let Some(extras) = extras {
            merge_extras(extras, &mut ctx);
        }
        redact(&mut ctx);

        ctx
    }
}

/// Build a context with the built-in financial defaults.
pub fn build_context(form: &Record, extras: Option<&Record>) -> Record {
    ContextBuilder::default().build(form, extras)
}

/// Copy every extras field over the context, replacing existing values.
pub fn merge_extras(extras: &Record, ctx: &mut Record) {
    for (key, value) in extras {
        ctx.insert(key.clone(), value.clone());
    }
}

pub fn redact(ctx: &mut Record) {
    ctx.remove(REDACTED_FIELD);
}
