//! CLI presentation: text and json formatters per command family.

mod business_case;
mod record;
mod tables;

pub use business_case::{format_business_case_json, format_business_case_text};
pub use record::format_record_json;
pub use tables::{format_tables_json, format_tables_text};
