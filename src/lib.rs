//! briefing-context: Survey Submission to Report Context
//!
//! Turns a loosely-structured business survey submission into the flat, canonical
//! context record consumed by text, HTML and PDF report templates. Coded answers gain
//! readable labels, legacy field names are consolidated, multi-select answers are
//! flattened to text and savings projections are derived. Caller-supplied extras are
//! merged last and the organization name is always removed.
//!
//! ```
//! use briefing_context::{build_context, Record, Value};
//!
//! let mut form = Record::new();
//! form.insert("branche".into(), Value::from("it"));
//! form.insert("qw1_monat_stunden".into(), Value::from(2.0));
//!
//! let ctx = build_context(&form, None);
//! assert_eq!(ctx["BRANCHE_LABEL"], Value::from("IT & Software"));
//! assert_eq!(ctx["monatsersparnis_eur"], Value::from(120.0));
//! ```

pub mod business_case;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod input;
pub mod logging;
pub mod lookup;
pub mod normalize;
pub mod value;

pub use context::{build_context, ContextBuilder, FinancialDefaults};
pub use error::ContextError;
pub use value::{Record, Value};
