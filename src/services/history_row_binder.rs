//! Binds download records to reusable item rows.
//!
//! Row content is computed as a whole from the record and then written into
//! the row in a single `ItemRow::apply`, so rebinding a recycled row cannot
//! leave a slot from the previous record behind.

use tracing::trace;

use crate::services::formatters::{DisplayContext, HostFormatter, SizeFormatter};
use crate::services::mime_classifier::classify;
use crate::types::download::DownloadRecord;
use crate::types::row::{ItemRow, ItemRowContent};

/// Fills item rows from download records using injected formatters.
pub struct HistoryRowBinder {
    context: DisplayContext,
    size_formatter: Box<dyn SizeFormatter + Send>,
    host_formatter: Box<dyn HostFormatter + Send>,
}

impl HistoryRowBinder {
    pub fn new(
        context: DisplayContext,
        size_formatter: Box<dyn SizeFormatter + Send>,
        host_formatter: Box<dyn HostFormatter + Send>,
    ) -> Self {
        Self {
            context,
            size_formatter,
            host_formatter,
        }
    }

    pub fn context(&self) -> &DisplayContext {
        &self.context
    }

    pub fn set_context(&mut self, context: DisplayContext) {
        self.context = context;
    }

    /// Computes what a row shows for `record` without touching any row.
    pub fn content_for(&self, record: &DownloadRecord) -> ItemRowContent {
        let hostname = self
            .host_formatter
            .format_url_for_security_display(&record.url, false);
        let filesize = self
            .size_formatter
            .format_file_size(&self.context, record.content_length);
        let icon = classify(record.mime_type.as_deref()).icon();

        ItemRowContent {
            icon,
            filename: record.filename.clone(),
            hostname,
            filesize,
        }
    }

    /// Overwrites all four slots of `row` with values for `record`.
    pub fn bind(&self, row: &mut ItemRow, record: &DownloadRecord) {
        let content = self.content_for(record);
        trace!(id = %record.id, icon = %content.icon, "binding download row");
        row.apply(content);
    }
}
