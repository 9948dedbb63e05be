//! Reusable row handles and the layout templates they are built from.
//!
//! A row is created once from a template and then rebound many times as the
//! list scrolls. Binding replaces the whole row content in one step, so a
//! recycled row never shows a field left over from a previous record.

use std::fmt;

use serde::Serialize;

use super::errors::RowError;
use super::file_category::FileIcon;

/// Layout used for a single download entry.
pub const DOWNLOAD_ITEM_LAYOUT: &str = "download_item_view";
/// Layout used for a day section header.
pub const DOWNLOAD_DATE_LAYOUT: &str = "download_date_view";

pub const ICON_SLOT: &str = "icon_view";
pub const FILENAME_SLOT: &str = "filename_view";
pub const HOSTNAME_SLOT: &str = "hostname_view";
pub const FILESIZE_SLOT: &str = "filesize_view";
pub const DATE_SLOT: &str = "date_view";

/// Slots a download item layout must declare.
pub const ITEM_SLOTS: [&str; 4] = [ICON_SLOT, FILENAME_SLOT, HOSTNAME_SLOT, FILESIZE_SLOT];

/// The two disjoint kinds of rows a date-divided list displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    DateHeader,
    Download,
}

impl RowKind {
    /// Layout identifier used to build rows of this kind.
    pub fn layout_id(self) -> &'static str {
        match self {
            RowKind::DateHeader => DOWNLOAD_DATE_LAYOUT,
            RowKind::Download => DOWNLOAD_ITEM_LAYOUT,
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKind::DateHeader => write!(f, "date header"),
            RowKind::Download => write!(f, "download"),
        }
    }
}

/// An inflated layout: its identifier plus the named slots it exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTemplate {
    pub layout_id: String,
    pub slots: Vec<String>,
}

impl ViewTemplate {
    pub fn new(layout_id: impl Into<String>, slots: &[&str]) -> Self {
        Self {
            layout_id: layout_id.into(),
            slots: slots.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn has_slot(&self, name: &str) -> bool {
        self.slots.iter().any(|s| s == name)
    }

    /// Fails with `RowError::MissingSlot` if the template lacks `name`.
    pub fn require_slot(&self, name: &str) -> Result<(), RowError> {
        if self.has_slot(name) {
            Ok(())
        } else {
            Err(RowError::MissingSlot {
                layout: self.layout_id.clone(),
                slot: name.to_string(),
            })
        }
    }
}

/// Everything a download row displays, computed in one pass from a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRowContent {
    pub icon: FileIcon,
    pub filename: String,
    pub hostname: String,
    pub filesize: String,
}

/// Reusable row holding the four display slots of a download entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ItemRow {
    icon: Option<FileIcon>,
    filename: String,
    hostname: String,
    filesize: String,
}

impl ItemRow {
    /// Builds an empty row from an inflated template.
    ///
    /// Every slot in `ITEM_SLOTS` must be present; a missing slot means the
    /// layout and this crate disagree and is reported here rather than at
    /// bind time.
    pub fn from_template(template: &ViewTemplate) -> Result<Self, RowError> {
        for slot in ITEM_SLOTS {
            template.require_slot(slot)?;
        }
        Ok(Self::default())
    }

    /// Replaces all four slots with `content`.
    pub fn apply(&mut self, content: ItemRowContent) {
        let ItemRowContent {
            icon,
            filename,
            hostname,
            filesize,
        } = content;
        self.icon = Some(icon);
        self.filename = filename;
        self.hostname = hostname;
        self.filesize = filesize;
    }

    /// `None` until the row has been bound at least once.
    pub fn icon(&self) -> Option<FileIcon> {
        self.icon
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn filesize(&self) -> &str {
        &self.filesize
    }
}

/// Reusable row for a day section header.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DateHeaderRow {
    date: String,
}

impl DateHeaderRow {
    pub fn from_template(template: &ViewTemplate) -> Result<Self, RowError> {
        template.require_slot(DATE_SLOT)?;
        Ok(Self::default())
    }

    pub fn set_date(&mut self, text: String) {
        self.date = text;
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}

/// A row handle of either kind, as handed out by the row factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowHandle {
    DateHeader(DateHeaderRow),
    Download(ItemRow),
}

impl RowHandle {
    pub fn kind(&self) -> RowKind {
        match self {
            RowHandle::DateHeader(_) => RowKind::DateHeader,
            RowHandle::Download(_) => RowKind::Download,
        }
    }

    pub fn as_download(&self) -> Option<&ItemRow> {
        match self {
            RowHandle::Download(row) => Some(row),
            RowHandle::DateHeader(_) => None,
        }
    }

    pub fn as_date_header(&self) -> Option<&DateHeaderRow> {
        match self {
            RowHandle::DateHeader(row) => Some(row),
            RowHandle::Download(_) => None,
        }
    }
}
