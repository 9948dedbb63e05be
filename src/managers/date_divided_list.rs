//! Date-divided list for timed items.
//!
//! Items are kept newest first and split into one section per calendar day,
//! each section preceded by a `ListItem::DateHeader`. Loading is a bulk
//! replace; there is no incremental update.

use std::cmp::Reverse;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Offset, Utc};
use tracing::{debug, warn};

use crate::types::list_item::{ListItem, TimedItem};

/// Sorted, day-sectioned view over a collection of timed items.
pub struct DateDividedList<T> {
    offset: FixedOffset,
    records: Vec<T>,
    items: Vec<ListItem<T>>,
}

impl<T: TimedItem + Clone> DateDividedList<T> {
    /// Creates an empty list whose days start at midnight in `offset`.
    pub fn new(offset: FixedOffset) -> Self {
        Self {
            offset,
            records: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Creates an empty list from an offset in minutes east of UTC.
    ///
    /// An offset chrono cannot represent falls back to UTC.
    pub fn with_utc_offset_minutes(minutes: i32) -> Self {
        Self::new(offset_from_minutes(minutes))
    }

    /// Replaces the list contents with `items`, re-sorting and re-sectioning.
    pub fn load_items(&mut self, mut items: Vec<T>) {
        items.sort_by_key(|item| Reverse(instant_of(item.timestamp())));
        self.records = items;
        self.rebuild();
    }

    /// Changes the day boundary and re-sections the current items.
    pub fn set_utc_offset_minutes(&mut self, minutes: i32) {
        let offset = offset_from_minutes(minutes);
        if offset != self.offset {
            self.offset = offset;
            self.rebuild();
        }
    }

    /// Calendar day an item belongs to under the current offset.
    pub fn day_of(&self, item: &T) -> NaiveDate {
        let utc = instant_of(item.timestamp()).naive_utc();
        utc.checked_add_signed(Duration::seconds(i64::from(self.offset.local_minus_utc())))
            .unwrap_or(utc)
            .date()
    }

    fn rebuild(&mut self) {
        let mut items = Vec::with_capacity(self.records.len() * 2);
        let mut current_day: Option<NaiveDate> = None;
        for record in &self.records {
            let day = self.day_of(record);
            if current_day != Some(day) {
                items.push(ListItem::DateHeader(day));
                current_day = Some(day);
            }
            items.push(ListItem::Item(record.clone()));
        }
        self.items = items;
        debug!(
            records = self.records.len(),
            positions = self.items.len(),
            "rebuilt date-divided list"
        );
    }

    /// Number of positions, headers included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&ListItem<T>> {
        self.items.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListItem<T>> {
        self.items.iter()
    }

    /// Items only, newest first.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn section_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| matches!(i, ListItem::DateHeader(_)))
            .count()
    }
}

/// Instant an item is filed under. Timestamps past either end of chrono's
/// range clamp to the nearest representable instant, so ordering and day
/// sections agree.
fn instant_of(timestamp_ms: i64) -> DateTime<Utc> {
    match DateTime::<Utc>::from_timestamp_millis(timestamp_ms) {
        Some(instant) => instant,
        None if timestamp_ms < 0 => DateTime::<Utc>::MIN_UTC,
        None => DateTime::<Utc>::MAX_UTC,
    }
}

fn offset_from_minutes(minutes: i32) -> FixedOffset {
    match minutes.checked_mul(60).and_then(FixedOffset::east_opt) {
        Some(offset) => offset,
        None => {
            warn!(minutes, "unrepresentable UTC offset, using UTC");
            Utc.fix()
        }
    }
}
