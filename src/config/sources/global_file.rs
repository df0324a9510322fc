//! Global config file source: $XDG_CONFIG_HOME/briefing-context/config.toml or ~/.config/briefing-context/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "briefing-context";

/// Path to global config file.
///
/// Uses XDG_CONFIG_HOME when set and non-empty, otherwise HOME/.config.
pub fn global_config_path() -> Option<PathBuf> {
    resolve_config_path(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn resolve_config_path(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    let base = match xdg_config_home.filter(|dir| !dir.as_os_str().is_empty()) {
        Some(dir) => dir,
        None => home?.join(".config"),
    };
    Some(base.join(APP_DIR).join("config.toml"))
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if path.exists() {
        builder = builder.add_source(File::from(path).required(false));
    } else {
        debug!(
            config_path = %path.display(),
            "No global configuration file, using built-in defaults"
        );
    }
    Ok(builder)
}
