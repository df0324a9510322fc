//! CLI domain: parse, route, help, output, and presentation only.
//! No domain logic; the route table dispatches to the context builder and friends.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_business_case_json, format_business_case_text, format_record_json,
    format_tables_json, format_tables_text,
};
pub use route::RunContext;
