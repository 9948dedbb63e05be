// Download history settings engine
// Loads, saves, updates and resets the list settings.
// Settings are stored as a JSON file in the user's config directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use tracing::{debug, info, warn};

use crate::types::errors::SettingsError;
use crate::types::settings::HistorySettings;

const CONFIG_DIR_NAME: &str = "download-history";
const CONFIG_FILE_NAME: &str = "settings.json";

/// Offsets are limited to strictly less than a day either way.
const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<HistorySettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &HistorySettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: HistorySettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, that path is used for the config file.
    /// Otherwise the file is `settings.json` under the platform config directory.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => default_config_dir()
                .join(CONFIG_FILE_NAME)
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            settings: HistorySettings::default(),
        }
    }

    /// Installs `settings` and saves them. If the save fails the previous
    /// settings are restored, so memory never holds what disk refused.
    fn commit(&mut self, settings: HistorySettings) -> Result<(), SettingsError> {
        let previous = std::mem::replace(&mut self.settings, settings);
        if let Err(e) = self.save() {
            warn!(path = %self.config_path, error = %e, "settings not saved, keeping previous values");
            self.settings = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Rejects values that deserialize fine but cannot be used.
    fn validate(settings: &HistorySettings) -> Result<(), SettingsError> {
        let offset = settings.grouping.utc_offset_minutes;
        if offset <= -MAX_UTC_OFFSET_MINUTES || offset >= MAX_UTC_OFFSET_MINUTES {
            return Err(SettingsError::InvalidValue(format!(
                "grouping.utc_offset_minutes out of range: {}",
                offset
            )));
        }

        let pattern = &settings.display.date_header_format;
        if pattern.is_empty()
            || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
        {
            return Err(SettingsError::InvalidValue(format!(
                "display.date_header_format is not a valid date pattern: {:?}",
                pattern
            )));
        }
        Ok(())
    }
}

fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// A missing file yields defaults. A malformed file is a serialization
    /// error; a well-formed file with unusable values is an invalid value.
    fn load(&mut self) -> Result<HistorySettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            debug!(path = %self.config_path, "no settings file, using defaults");
            self.settings = HistorySettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: HistorySettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        Self::validate(&settings)?;

        info!(path = %self.config_path, "loaded settings");
        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Saves the current settings, creating parent directories as needed.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;

        debug!(path = %self.config_path, "saved settings");
        Ok(())
    }

    fn get_settings(&self) -> &HistorySettings {
        &self.settings
    }

    /// Updates one setting by dot-notation key path and saves to disk.
    ///
    /// - `"display.size_units"` → `"decimal"` or `"binary"`
    /// - `"display.date_header_format"` → a strftime pattern
    /// - `"grouping.utc_offset_minutes"` → an integer
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        let parts: Vec<&str> = key.split('.').collect();
        let (last, parents) = match parts.split_last() {
            Some(split) => split,
            None => return Err(SettingsError::InvalidKey(key.to_string())),
        };

        let mut current = &mut json_value;
        for part in parents {
            current = current.get_mut(*part).ok_or_else(|| {
                SettingsError::InvalidKey(format!("Key '{}' not found in settings", key))
            })?;
        }
        match current {
            serde_json::Value::Object(map) if map.contains_key(*last) => {
                map.insert(last.to_string(), value);
            }
            serde_json::Value::Object(_) => {
                return Err(SettingsError::InvalidKey(format!(
                    "Key '{}' not found in settings",
                    key
                )));
            }
            _ => {
                return Err(SettingsError::InvalidKey(format!(
                    "Cannot navigate to key '{}': intermediate value is not an object",
                    key
                )));
            }
        }

        let new_settings: HistorySettings = serde_json::from_value(json_value).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;
        Self::validate(&new_settings)?;

        self.commit(new_settings)
    }

    /// Resets all settings to defaults and saves to disk.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.commit(HistorySettings::default())
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
