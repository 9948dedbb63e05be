use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::list_item::TimedItem;

fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// A finished download as delivered by the history backend.
///
/// Records are consumed read-only by the list. `content_length` is kept
/// signed so that whatever the backend reports reaches the size formatter
/// unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadRecord {
    #[serde(default = "new_record_id")]
    pub id: String,
    pub filename: String,
    pub url: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub content_length: i64,
    /// Completion time in UNIX milliseconds, used for date sectioning.
    pub timestamp: i64,
}

impl DownloadRecord {
    /// Creates a record with a freshly generated ID.
    pub fn new(
        filename: impl Into<String>,
        url: impl Into<String>,
        mime_type: Option<&str>,
        content_length: i64,
        timestamp: i64,
    ) -> Self {
        Self {
            id: new_record_id(),
            filename: filename.into(),
            url: url.into(),
            mime_type: mime_type.map(str::to_string),
            content_length,
            timestamp,
        }
    }
}

impl TimedItem for DownloadRecord {
    fn timestamp(&self) -> i64 {
        self.timestamp
    }
}
