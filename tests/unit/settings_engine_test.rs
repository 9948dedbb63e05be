//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface:
//! default loading, persistence of changes, malformed files, and reset.

use download_history::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use download_history::types::errors::SettingsError;
use download_history::types::settings::{HistorySettings, SizeUnits};
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

/// Without a config file the built-in defaults are used.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, HistorySettings::default());
    assert_eq!(settings.display.size_units, SizeUnits::Decimal);
    assert_eq!(settings.grouping.utc_offset_minutes, 0);
}

/// A change made through `set_value` is visible to a fresh engine on the same file.
#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value("display.size_units", serde_json::json!("binary"))
            .unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    let loaded = engine.load().unwrap();
    assert_eq!(loaded.display.size_units, SizeUnits::Binary);
}

/// Parent directories are created on save.
#[test]
fn test_save_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b").join("settings.json");
    let engine = SettingsEngine::new(Some(nested.to_string_lossy().to_string()));

    engine.save().unwrap();

    assert!(nested.exists());
}

/// A file that is not valid JSON is a serialization error, not silently defaults.
#[test]
fn test_malformed_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
    let mut engine = engine_in_temp(&dir);

    assert!(matches!(
        engine.load(),
        Err(SettingsError::SerializationError(_))
    ));
}

/// A well-formed file with an unusable offset is rejected on load.
#[test]
fn test_out_of_range_offset_in_file_is_invalid_value() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{"display":{"size_units":"decimal","date_header_format":"%Y"},"grouping":{"utc_offset_minutes":5000}}"#,
    )
    .unwrap();
    let mut engine = engine_in_temp(&dir);

    assert!(matches!(engine.load(), Err(SettingsError::InvalidValue(_))));
}

/// `reset` restores defaults in memory and on disk.
#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine
        .set_value("grouping.utc_offset_minutes", serde_json::json!(330))
        .unwrap();
    engine
        .set_value("display.date_header_format", serde_json::json!("%d/%m/%Y"))
        .unwrap();

    engine.reset().unwrap();
    assert_eq!(*engine.get_settings(), HistorySettings::default());

    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), HistorySettings::default());
}

/// Setting a whole section replaces it if the new value is valid.
#[test]
fn test_set_value_replaces_section() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    engine
        .set_value("grouping", serde_json::json!({"utc_offset_minutes": -480}))
        .unwrap();

    assert_eq!(engine.get_settings().grouping.utc_offset_minutes, -480);
}

/// Replaces the settings directory with a regular file so the next save fails.
fn block_config_dir(dir: &std::path::Path) {
    std::fs::remove_dir_all(dir).unwrap();
    std::fs::write(dir, "not a directory").unwrap();
}

/// A save that fails leaves the in-memory settings as they were.
#[test]
fn test_failed_save_leaves_settings_unchanged() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("config");
    let path = config_dir.join("settings.json").to_string_lossy().to_string();
    let mut engine = SettingsEngine::new(Some(path));
    engine.load().unwrap();
    engine
        .set_value("grouping.utc_offset_minutes", serde_json::json!(120))
        .unwrap();
    let before = engine.get_settings().clone();

    block_config_dir(&config_dir);

    assert!(matches!(
        engine.set_value("display.size_units", serde_json::json!("binary")),
        Err(SettingsError::IoError(_))
    ));
    assert_eq!(*engine.get_settings(), before);

    assert!(matches!(engine.reset(), Err(SettingsError::IoError(_))));
    assert_eq!(*engine.get_settings(), before);
    assert_eq!(engine.get_settings().grouping.utc_offset_minutes, 120);
}
