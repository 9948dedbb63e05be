use serde::{Deserialize, Serialize};

/// Top-level settings for the download history list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HistorySettings {
    pub display: DisplaySettings,
    pub grouping: GroupingSettings,
}

/// How file sizes are rendered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnits {
    /// Powers of 1000, printed as `KB`, `MB`, ...
    #[default]
    Decimal,
    /// Powers of 1024, printed as `kiB`, `MiB`, ...
    Binary,
}

/// Row text settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplaySettings {
    pub size_units: SizeUnits,
    /// `chrono` strftime pattern used for day section headers.
    pub date_header_format: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            size_units: SizeUnits::Decimal,
            date_header_format: "%B %-d, %Y".to_string(),
        }
    }
}

/// Day sectioning settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GroupingSettings {
    /// Offset from UTC, in minutes, that defines where a day starts.
    pub utc_offset_minutes: i32,
}
