//! CLI parse: clap types for briefing-context. No behavior; definitions only.

use crate::lookup::LookupTable;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// briefing-context - Normalize survey submissions into report contexts
#[derive(Parser)]
#[command(name = "briefing-context")]
#[command(about = "Normalize business survey submissions into template-ready report contexts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (config/ is read from here)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the template context for a form submission
    Build {
        /// Form submission JSON file ("-" for stdin)
        #[arg(long)]
        form: PathBuf,
        /// Extras JSON file merged over the derived fields
        #[arg(long)]
        extras: Option<PathBuf>,
        /// Map display labels in the form back to codes first
        #[arg(long)]
        normalize: bool,
        /// Add break-even and ROI figures to the context
        #[arg(long)]
        business_case: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Normalize coded answers of a form submission
    Normalize {
        /// Form submission JSON file ("-" for stdin)
        #[arg(long)]
        form: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Show the business case for a form submission
    BusinessCase {
        /// Form submission JSON file ("-" for stdin)
        #[arg(long)]
        form: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List the code/label lookup tables
    Tables {
        /// Only this table (sector, size, jurisdiction)
        #[arg(long)]
        table: Option<LookupTable>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
