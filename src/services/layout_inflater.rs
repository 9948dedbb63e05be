use crate::types::errors::RowError;
use crate::types::row::{ViewTemplate, DATE_SLOT, DOWNLOAD_DATE_LAYOUT, DOWNLOAD_ITEM_LAYOUT, ITEM_SLOTS};

/// Resolves a layout identifier into the template a row is built from.
pub trait LayoutInflater {
    fn inflate(&self, layout_id: &str) -> Result<ViewTemplate, RowError>;
}

/// The two layouts shipped with the download history list.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLayouts;

impl LayoutInflater for BuiltinLayouts {
    fn inflate(&self, layout_id: &str) -> Result<ViewTemplate, RowError> {
        match layout_id {
            DOWNLOAD_ITEM_LAYOUT => Ok(ViewTemplate::new(DOWNLOAD_ITEM_LAYOUT, &ITEM_SLOTS)),
            DOWNLOAD_DATE_LAYOUT => Ok(ViewTemplate::new(DOWNLOAD_DATE_LAYOUT, &[DATE_SLOT])),
            other => Err(RowError::UnknownLayout(other.to_string())),
        }
    }
}
