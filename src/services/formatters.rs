//! Formatting capabilities injected into the row binder.
//!
//! The binder never inspects sizes or URLs itself; it forwards whatever these
//! services return. Default implementations are provided for sizes (via
//! `bytesize`) and for security-display hosts (via `url`).

use bytesize::ByteSize;
use url::Url;

use crate::types::settings::{HistorySettings, SizeUnits};

/// Locale-ish context handed to the size formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayContext {
    pub size_units: SizeUnits,
}

impl DisplayContext {
    pub fn from_settings(settings: &HistorySettings) -> Self {
        Self {
            size_units: settings.display.size_units,
        }
    }
}

/// Turns a byte count into a human-readable string.
pub trait SizeFormatter {
    fn format_file_size(&self, context: &DisplayContext, bytes: i64) -> String;
}

/// Reduces a URL to the part that is safe to show as its origin.
pub trait HostFormatter {
    /// Must not panic; an unparsable URL yields an empty or best-effort string.
    fn format_url_for_security_display(&self, url: &str, show_scheme: bool) -> String;
}

impl<F> SizeFormatter for F
where
    F: Fn(&DisplayContext, i64) -> String,
{
    fn format_file_size(&self, context: &DisplayContext, bytes: i64) -> String {
        self(context, bytes)
    }
}

impl<F> HostFormatter for F
where
    F: Fn(&str, bool) -> String,
{
    fn format_url_for_security_display(&self, url: &str, show_scheme: bool) -> String {
        self(url, show_scheme)
    }
}

/// Size formatter backed by `bytesize`.
///
/// Negative lengths are rendered with a leading minus sign rather than
/// clamped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteSizeFormatter;

impl SizeFormatter for ByteSizeFormatter {
    fn format_file_size(&self, context: &DisplayContext, bytes: i64) -> String {
        let binary = context.size_units == SizeUnits::Binary;
        let text = ByteSize::b(bytes.unsigned_abs()).to_string_as(binary);
        if bytes < 0 {
            format!("-{}", text)
        } else {
            text
        }
    }
}

/// Host formatter backed by the `url` crate.
///
/// Keeps the host and any non-default port, drops userinfo, path, query and
/// fragment. URLs without a host, or that fail to parse, produce an empty
/// string.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityHostFormatter;

impl HostFormatter for SecurityHostFormatter {
    fn format_url_for_security_display(&self, url: &str, show_scheme: bool) -> String {
        let parsed = match Url::parse(url.trim()) {
            Ok(u) => u,
            Err(_) => return String::new(),
        };
        let host = match parsed.host_str() {
            Some(h) => h,
            None => return String::new(),
        };

        let mut out = String::new();
        if show_scheme {
            out.push_str(parsed.scheme());
            out.push_str("://");
        }
        out.push_str(host);
        if let Some(port) = parsed.port() {
            out.push(':');
            out.push_str(&port.to_string());
        }
        out
    }
}
