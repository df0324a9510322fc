//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::business_case::BusinessCase;
use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_business_case_json, format_business_case_text, format_record_json,
    format_tables_json, format_tables_text,
};
use crate::config::{BriefingConfig, ConfigLoader};
use crate::context::{merge_extras, ContextBuilder};
use crate::error::ContextError;
use crate::input::read_record;
use crate::lookup::LookupTable;
use crate::normalize::normalize_answers;
use crate::value::Record;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: loaded configuration and the context builder.
pub struct RunContext {
    builder: ContextBuilder,
    workspace_root: PathBuf,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ContextError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self::from_config(config, workspace_root))
    }

    pub fn from_config(config: BriefingConfig, workspace_root: PathBuf) -> Self {
        Self {
            builder: ContextBuilder::new(config.financial),
            workspace_root,
        }
    }

    pub fn builder(&self) -> &ContextBuilder {
        &self.builder
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Execute one command and return its stdout text.
    pub fn execute(&self, command: &Commands) -> Result<String, ContextError> {
        let started = Instant::now();
        let name = command_name(command);
        debug!(command = name, "Executing command");

        let output = match command {
            Commands::Build {
                form,
                extras,
                normalize,
                business_case,
                pretty,
            } => {
                let form = self.load_form(form, *normalize)?;
                let extras = extras.as_deref().map(read_record).transpose()?;
                let ctx = self.build(&form, extras.as_ref(), *business_case);
                info!(command = name, fields = ctx.len(), "Context built");
                format_record_json(&ctx, *pretty)
            }
            Commands::Normalize { form, pretty } => {
                let form = self.load_form(form, true)?;
                format_record_json(&form, *pretty)
            }
            Commands::BusinessCase { form, format } => {
                let form = self.load_form(form, false)?;
                let case = BusinessCase::from_context(&self.builder.build(&form, None));
                match format.as_str() {
                    "json" => format_business_case_json(&case),
                    "text" => Ok(format_business_case_text(&case)),
                    other => Err(invalid_format(other)),
                }
            }
            Commands::Tables { table, format } => {
                let tables: Vec<LookupTable> = match table {
                    Some(table) => vec![*table],
                    None => LookupTable::ALL.to_vec(),
                };
                match format.as_str() {
                    "json" => format_tables_json(&tables),
                    "text" => Ok(format_tables_text(&tables)),
                    other => Err(invalid_format(other)),
                }
            }
        }?;

        debug!(
            command = name,
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        Ok(output)
    }

    fn load_form(&self, path: &Path, normalize: bool) -> Result<Record, ContextError> {
        let form = read_record(path)?;
        Ok(if normalize {
            normalize_answers(&form)
        } else {
            form
        })
    }

    /// Build a context, optionally folding the business case in as extras.
    /// Caller extras still win over the business case figures.
    fn build(&self, form: &Record, extras: Option<&Record>, with_business_case: bool) -> Record {
        if !with_business_case {
            return self.builder.build(form, extras);
        }

        let draft = self.builder.build(form, extras);
        let mut combined = BusinessCase::from_context(&draft).into_extras();
        if let Some(extras) = extras {
            merge_extras(extras, &mut combined);
        }
        self.builder.build(form, Some(&combined))
    }
}

fn invalid_format(format: &str) -> ContextError {
    ContextError::InvalidInput(format!(
        "Invalid output format: {} (must be 'text' or 'json')",
        format
    ))
}
