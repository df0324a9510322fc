//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Stable command name for log fields (e.g. "build", "tables").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Build { .. } => "build",
        Commands::Normalize { .. } => "normalize",
        Commands::BusinessCase { .. } => "business_case",
        Commands::Tables { .. } => "tables",
    }
}
