//! RPC method handler for the download history JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches method calls to the adapter and settings
//! engine held by `App`.

use std::sync::Mutex;

use serde_json::{json, Value};
use tracing::debug;

use crate::app::App;
use crate::managers::download_history_adapter::DateDividedAdapterTrait;
use crate::services::mime_classifier::classify;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::download::DownloadRecord;

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    debug!(method, "rpc call");
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Downloads ───
        "downloads.load" => {
            let records = params.get("records").cloned().ok_or("missing records")?;
            let records: Vec<DownloadRecord> =
                serde_json::from_value(records).map_err(|e| format!("invalid records: {}", e))?;
            let count = records.len();
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.adapter.on_all_downloads_retrieved(records);
            Ok(json!({"count": count, "positions": a.adapter.item_count()}))
        }
        "downloads.rows" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let rows = a.adapter.snapshot_rows(&a.layouts).map_err(|e| e.to_string())?;
            serde_json::to_value(rows).map_err(|e| e.to_string())
        }
        "downloads.count" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let list = a.adapter.list();
            Ok(json!({
                "records": list.records().len(),
                "sections": list.section_count(),
                "positions": list.len(),
            }))
        }
        "downloads.templates" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({
                "header": a.adapter.header_template_id(),
                "item": a.adapter.item_template_id(),
            }))
        }

        // ─── Classification ───
        "mime.classify" => {
            let mime_type = params.get("mime_type").and_then(|v| v.as_str());
            let category = classify(mime_type);
            Ok(json!({"category": category, "icon": category.icon()}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            a.refresh_settings();
            Ok(json!({"ok": true}))
        }
        "settings.reset" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.reset().map_err(|e| e.to_string())?;
            a.refresh_settings();
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
