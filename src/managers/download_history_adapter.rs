//! Download History Adapter.
//!
//! Bridges the user's download history and the rows used to display it.
//! The date-divided list owns ordering and sectioning; this adapter builds
//! rows of either kind and binds each position to the right row, resolving
//! header versus download once per call through `ListItem`.

use std::fmt::Write as _;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::managers::date_divided_list::DateDividedList;
use crate::services::formatters::{
    ByteSizeFormatter, DisplayContext, HostFormatter, SecurityHostFormatter, SizeFormatter,
};
use crate::services::history_row_binder::HistoryRowBinder;
use crate::services::layout_inflater::LayoutInflater;
use crate::types::download::DownloadRecord;
use crate::types::errors::RowError;
use crate::types::list_item::ListItem;
use crate::types::row::{
    DateHeaderRow, ItemRow, RowHandle, RowKind, DOWNLOAD_DATE_LAYOUT, DOWNLOAD_ITEM_LAYOUT,
};
use crate::types::settings::HistorySettings;

/// Fallback used if a configured header pattern fails to render.
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Trait defining the row operations a date-divided list asks of its adapter.
pub trait DateDividedAdapterTrait {
    /// Layout identifier used for day section headers.
    fn header_template_id(&self) -> &'static str;
    /// Layout identifier used for download rows.
    fn item_template_id(&self) -> &'static str;
    /// Kind of row needed at `position`, or `None` past the end.
    fn row_kind(&self, position: usize) -> Option<RowKind>;
    /// Builds an empty row of `kind` from its layout.
    fn create_row(&self, kind: RowKind, inflater: &dyn LayoutInflater) -> Result<RowHandle, RowError>;
    /// Binds the item at `position` into `row`.
    fn bind_row(&self, position: usize, row: &mut RowHandle) -> Result<(), RowError>;
    /// Number of positions, headers included.
    fn item_count(&self) -> usize;
}

/// Adapter over a date-divided list of download records.
pub struct DownloadHistoryAdapter {
    list: DateDividedList<DownloadRecord>,
    binder: HistoryRowBinder,
    date_header_format: String,
}

impl DownloadHistoryAdapter {
    /// Creates an adapter with injected formatting services.
    pub fn new(
        settings: &HistorySettings,
        size_formatter: Box<dyn SizeFormatter + Send>,
        host_formatter: Box<dyn HostFormatter + Send>,
    ) -> Self {
        Self {
            list: DateDividedList::with_utc_offset_minutes(settings.grouping.utc_offset_minutes),
            binder: HistoryRowBinder::new(
                DisplayContext::from_settings(settings),
                size_formatter,
                host_formatter,
            ),
            date_header_format: settings.display.date_header_format.clone(),
        }
    }

    /// Creates an adapter using `ByteSizeFormatter` and `SecurityHostFormatter`.
    pub fn with_default_formatters(settings: &HistorySettings) -> Self {
        Self::new(
            settings,
            Box::new(ByteSizeFormatter),
            Box::new(SecurityHostFormatter),
        )
    }

    /// Called when the user's download history has been gathered.
    ///
    /// Replaces whatever was loaded before. An empty collection is valid and
    /// yields an empty list.
    pub fn on_all_downloads_retrieved(&mut self, records: Vec<DownloadRecord>) {
        let count = records.len();
        self.list.load_items(records);
        info!(
            records = count,
            sections = self.list.section_count(),
            "download history loaded"
        );
    }

    /// Re-applies display and grouping settings to the loaded history.
    pub fn apply_settings(&mut self, settings: &HistorySettings) {
        self.binder.set_context(DisplayContext::from_settings(settings));
        self.date_header_format = settings.display.date_header_format.clone();
        self.list
            .set_utc_offset_minutes(settings.grouping.utc_offset_minutes);
    }

    pub fn list(&self) -> &DateDividedList<DownloadRecord> {
        &self.list
    }

    /// Builds an empty download row from the item layout.
    pub fn create_view_holder(&self, inflater: &dyn LayoutInflater) -> Result<ItemRow, RowError> {
        let template = inflater.inflate(DOWNLOAD_ITEM_LAYOUT)?;
        ItemRow::from_template(&template).map_err(|e| {
            warn!(error = %e, "download item layout is miswired");
            e
        })
    }

    /// Writes filename, host, size and icon for `record` into `row`.
    pub fn bind_view_holder_for_download(&self, row: &mut ItemRow, record: &DownloadRecord) {
        self.binder.bind(row, record);
    }

    /// Writes the formatted day into a header row.
    pub fn bind_date_header(&self, row: &mut DateHeaderRow, date: NaiveDate) {
        row.set_date(self.format_date(date));
    }

    fn format_date(&self, date: NaiveDate) -> String {
        let mut text = String::new();
        if write!(text, "{}", date.format(&self.date_header_format)).is_ok() {
            return text;
        }
        warn!(pattern = %self.date_header_format, "date header pattern failed, using ISO date");
        date.format(ISO_DATE_FORMAT).to_string()
    }

    /// Creates and binds a row for every position, in order.
    pub fn snapshot_rows(&self, inflater: &dyn LayoutInflater) -> Result<Vec<RowHandle>, RowError> {
        let mut rows = Vec::with_capacity(self.list.len());
        for (position, item) in self.list.iter().enumerate() {
            let mut row = self.create_row(item.row_kind(), inflater)?;
            self.bind_row(position, &mut row)?;
            rows.push(row);
        }
        Ok(rows)
    }
}

impl DateDividedAdapterTrait for DownloadHistoryAdapter {
    fn header_template_id(&self) -> &'static str {
        DOWNLOAD_DATE_LAYOUT
    }

    fn item_template_id(&self) -> &'static str {
        DOWNLOAD_ITEM_LAYOUT
    }

    fn row_kind(&self, position: usize) -> Option<RowKind> {
        self.list.get(position).map(ListItem::row_kind)
    }

    fn create_row(&self, kind: RowKind, inflater: &dyn LayoutInflater) -> Result<RowHandle, RowError> {
        debug!(%kind, "creating row");
        match kind {
            RowKind::DateHeader => {
                let template = inflater.inflate(self.header_template_id())?;
                Ok(RowHandle::DateHeader(DateHeaderRow::from_template(&template)?))
            }
            RowKind::Download => Ok(RowHandle::Download(self.create_view_holder(inflater)?)),
        }
    }

    fn bind_row(&self, position: usize, row: &mut RowHandle) -> Result<(), RowError> {
        let item = self.list.get(position).ok_or(RowError::PositionOutOfRange {
            position,
            len: self.list.len(),
        })?;

        match (item, row) {
            (ListItem::DateHeader(date), RowHandle::DateHeader(header)) => {
                self.bind_date_header(header, *date);
                Ok(())
            }
            (ListItem::Item(record), RowHandle::Download(download)) => {
                self.bind_view_holder_for_download(download, record);
                Ok(())
            }
            (item, row) => Err(RowError::KindMismatch {
                position,
                expected: item.row_kind(),
                actual: row.kind(),
            }),
        }
    }

    fn item_count(&self) -> usize {
        self.list.len()
    }
}
