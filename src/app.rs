//! App Core for the download history list.
//!
//! Holds the settings engine, the adapter and the layouts rows are built from.

use crate::managers::download_history_adapter::DownloadHistoryAdapter;
use crate::services::layout_inflater::BuiltinLayouts;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::SettingsError;

/// Central application struct wiring settings into the adapter.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub adapter: DownloadHistoryAdapter,
    pub layouts: BuiltinLayouts,
}

impl App {
    /// Loads settings from `config_path` (or the platform default) and
    /// builds an adapter with the default formatters.
    pub fn new(config_path: Option<String>) -> Result<Self, SettingsError> {
        let mut settings_engine = SettingsEngine::new(config_path);
        let settings = settings_engine.load()?;
        let adapter = DownloadHistoryAdapter::with_default_formatters(&settings);

        Ok(Self {
            settings_engine,
            adapter,
            layouts: BuiltinLayouts,
        })
    }

    /// Pushes the current settings into the adapter after a change.
    pub fn refresh_settings(&mut self) {
        self.adapter
            .apply_settings(self.settings_engine.get_settings());
    }
}
