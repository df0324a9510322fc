//! Config loader: merges sources in precedence order and validates the result.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::BriefingConfig;
use crate::error::ContextError;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use std::path::Path;
use tracing::debug;

/// Prefix for environment overrides, e.g. `BRIEFING__FINANCIAL__HOURLY_RATE=80`.
pub const ENV_PREFIX: &str = "BRIEFING";
const ENV_SEPARATOR: &str = "__";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// `config/config.toml`, workspace `config/{BRIEFING_ENV}.toml`, environment.
    pub fn load(workspace_root: &Path) -> Result<BriefingConfig, ContextError> {
        Self::load_with_global(workspace_root, global_file::global_config_path().as_deref())
    }

    /// Same as [`ConfigLoader::load`] with the global file location given explicitly.
    /// `None` skips the global layer.
    pub fn load_with_global(
        workspace_root: &Path,
        global_path: Option<&Path>,
    ) -> Result<BriefingConfig, ContextError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        if let Some(path) = global_path {
            builder = global_file::add_to_builder(builder, path)?;
        }
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        Self::finish(builder)
    }

    /// Load configuration from one explicit file (plus defaults and environment).
    pub fn load_from_file(path: &Path) -> Result<BriefingConfig, ContextError> {
        if !path.exists() {
            return Err(ContextError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<BriefingConfig, ContextError> {
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );
        let config: BriefingConfig = builder.build()?.try_deserialize()?;

        config.validate().map_err(|errors| {
            ContextError::Config(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

        debug!(
            hourly_rate = config.financial.hourly_rate,
            capex_conservative = config.financial.capex_conservative,
            opex_conservative = config.financial.opex_conservative,
            "Configuration loaded"
        );
        Ok(config)
    }
}
