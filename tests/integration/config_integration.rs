//! Integration tests for Configuration System

use briefing_context::cli::RunContext;
use briefing_context::config::ConfigLoader;
use briefing_context::ContextError;
use tempfile::TempDir;

#[test]
fn test_config_file_overrides_financial_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("briefing.toml");

    std::fs::write(
        &config_file,
        r#"
[financial]
hourly_rate = 80.0
capex_conservative = 4000.0

[logging]
level = "debug"
format = "json"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert_eq!(config.financial.hourly_rate, 80.0);
    assert_eq!(config.financial.capex_conservative, 4000.0);
    assert_eq!(config.financial.opex_conservative, 600.0);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_missing_config_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = ConfigLoader::load_from_file(&temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ContextError::Config(_)));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_invalid_values_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    std::fs::write(
        &config_file,
        r#"
[financial]
hourly_rate = -5.0

[logging]
output = "printer"
"#,
    )
    .unwrap();

    let err = ConfigLoader::load_from_file(&config_file).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("hourly_rate"), "{}", message);
    assert!(message.contains("printer"), "{}", message);
}

#[test]
fn test_workspace_config_is_picked_up() {
    let workspace = TempDir::new().unwrap();
    let config_dir = workspace.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        r#"
[financial]
opex_conservative = 1200.0
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_with_global(workspace.path(), None).unwrap();
    assert_eq!(config.financial.opex_conservative, 1200.0);
    assert_eq!(config.financial.hourly_rate, 60.0);
}

#[test]
fn test_workspace_config_overrides_global_file() {
    let home = TempDir::new().unwrap();
    let global = home.path().join("global.toml");
    std::fs::write(
        &global,
        r#"
[financial]
hourly_rate = 90.0
capex_conservative = 5000.0
"#,
    )
    .unwrap();

    let workspace = TempDir::new().unwrap();
    let config_dir = workspace.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[financial]\nhourly_rate = 70.0\n").unwrap();

    let config = ConfigLoader::load_with_global(workspace.path(), Some(&global)).unwrap();
    assert_eq!(config.financial.hourly_rate, 70.0);
    assert_eq!(config.financial.capex_conservative, 5000.0);
}

#[test]
fn test_missing_global_file_is_skipped() {
    let workspace = TempDir::new().unwrap();
    let absent = workspace.path().join("no-such-global.toml");
    let config = ConfigLoader::load_with_global(workspace.path(), Some(&absent)).unwrap();
    assert_eq!(config.financial.hourly_rate, 60.0);
}

#[test]
fn test_empty_workspace_uses_defaults() {
    let workspace = TempDir::new().unwrap();
    let config = ConfigLoader::load_with_global(workspace.path(), None).unwrap();
    let context = RunContext::from_config(config, workspace.path().to_path_buf());
    assert_eq!(context.builder().defaults().hourly_rate, 60.0);
    assert_eq!(context.workspace_root(), workspace.path());
}
