use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of file categories used to pick a row icon.
///
/// `Other` doubles as the result for anything that cannot be classified.
/// `Page` is never produced by MIME classification; callers that recognise
/// saved pages through some other signal assign it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    #[default]
    Other,
    Page,
    Video,
    Audio,
    Image,
    Document,
}

impl FileCategory {
    /// Every category, in declaration order.
    pub const ALL: [FileCategory; 6] = [
        FileCategory::Other,
        FileCategory::Page,
        FileCategory::Video,
        FileCategory::Audio,
        FileCategory::Image,
        FileCategory::Document,
    ];

    /// Returns the icon shown for this category.
    pub fn icon(self) -> FileIcon {
        match self {
            FileCategory::Other => FileIcon::GenericFile,
            FileCategory::Page => FileIcon::Site,
            FileCategory::Video => FileIcon::PlayArrow,
            FileCategory::Audio => FileIcon::MusicNote,
            FileCategory::Image => FileIcon::Picture,
            FileCategory::Document => FileIcon::TextDocument,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            FileCategory::Other => "other",
            FileCategory::Page => "page",
            FileCategory::Video => "video",
            FileCategory::Audio => "audio",
            FileCategory::Image => "image",
            FileCategory::Document => "document",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon resources a download row can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileIcon {
    #[serde(rename = "ic_drive_file")]
    GenericFile,
    #[serde(rename = "ic_drive_site")]
    Site,
    #[serde(rename = "ic_play_arrow")]
    PlayArrow,
    #[serde(rename = "ic_music_note")]
    MusicNote,
    #[serde(rename = "ic_image")]
    Picture,
    #[serde(rename = "ic_drive_text")]
    TextDocument,
}

impl FileIcon {
    /// Name of the drawable resource backing this icon.
    pub fn resource_name(self) -> &'static str {
        match self {
            FileIcon::GenericFile => "ic_drive_file",
            FileIcon::Site => "ic_drive_site",
            FileIcon::PlayArrow => "ic_play_arrow",
            FileIcon::MusicNote => "ic_music_note",
            FileIcon::Picture => "ic_image",
            FileIcon::TextDocument => "ic_drive_text",
        }
    }
}

impl fmt::Display for FileIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource_name())
    }
}
