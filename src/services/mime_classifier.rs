//! MIME type classification for download row icons.
//!
//! Only the top-level type is inspected. Anything that is not a well-formed
//! `type/subtype` pair resolves to `FileCategory::Other`; there is no error
//! path.

use crate::types::file_category::FileCategory;

const MIMETYPE_VIDEO: &str = "video";
const MIMETYPE_AUDIO: &str = "audio";
const MIMETYPE_IMAGE: &str = "image";
const MIMETYPE_DOCUMENT: &str = "text";

/// Identifies the category of file described by a MIME type string.
///
/// Matching is case-insensitive. A string with no `/`, more than one `/`,
/// or an empty subtype is treated as unclassifiable. `text/*` maps to
/// `Document`.
pub fn classify(mime_type: Option<&str>) -> FileCategory {
    let mime_type = match mime_type {
        Some(m) if !m.is_empty() => m,
        _ => return FileCategory::Other,
    };

    let (top_level, subtype) = match mime_type.split_once('/') {
        Some(pieces) => pieces,
        None => return FileCategory::Other,
    };
    if subtype.is_empty() || subtype.contains('/') {
        return FileCategory::Other;
    }

    if top_level.eq_ignore_ascii_case(MIMETYPE_VIDEO) {
        FileCategory::Video
    } else if top_level.eq_ignore_ascii_case(MIMETYPE_AUDIO) {
        FileCategory::Audio
    } else if top_level.eq_ignore_ascii_case(MIMETYPE_IMAGE) {
        FileCategory::Image
    } else if top_level.eq_ignore_ascii_case(MIMETYPE_DOCUMENT) {
        FileCategory::Document
    } else {
        FileCategory::Other
    }
}
