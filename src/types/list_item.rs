use chrono::NaiveDate;

use super::row::RowKind;

/// Anything that can be placed into a date-divided list.
pub trait TimedItem {
    /// Timestamp in UNIX milliseconds.
    fn timestamp(&self) -> i64;
}

/// One position in a date-divided list: either a day header or an item.
#[derive(Debug, Clone, PartialEq)]
pub enum ListItem<T> {
    DateHeader(NaiveDate),
    Item(T),
}

impl<T> ListItem<T> {
    /// The kind of row that can display this position.
    pub fn row_kind(&self) -> RowKind {
        match self {
            ListItem::DateHeader(_) => RowKind::DateHeader,
            ListItem::Item(_) => RowKind::Download,
        }
    }

    pub fn as_item(&self) -> Option<&T> {
        match self {
            ListItem::Item(item) => Some(item),
            ListItem::DateHeader(_) => None,
        }
    }
}
