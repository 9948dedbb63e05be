use download_history::types::errors::*;
use download_history::types::row::RowKind;

// === RowError Tests ===

#[test]
fn row_error_missing_slot_display() {
    let err = RowError::MissingSlot {
        layout: "download_item_view".to_string(),
        slot: "icon_view".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Layout download_item_view is missing slot: icon_view"
    );
}

#[test]
fn row_error_unknown_layout_display() {
    let err = RowError::UnknownLayout("bookmark_view".to_string());
    assert_eq!(err.to_string(), "Unknown layout: bookmark_view");
}

#[test]
fn row_error_position_display() {
    let err = RowError::PositionOutOfRange { position: 7, len: 3 };
    assert_eq!(err.to_string(), "Row position 7 out of range (len 3)");
}

#[test]
fn row_error_kind_mismatch_display() {
    let err = RowError::KindMismatch {
        position: 0,
        expected: RowKind::DateHeader,
        actual: RowKind::Download,
    };
    assert_eq!(
        err.to_string(),
        "Row kind mismatch at position 0: expected date header row, got download row"
    );
}

#[test]
fn row_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(RowError::UnknownLayout("x".to_string()));
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("display.colour".to_string()).to_string(),
        "Invalid settings key: display.colour"
    );
    assert_eq!(
        SettingsError::InvalidValue("offset".to_string()).to_string(),
        "Invalid settings value: offset"
    );
}

#[test]
fn settings_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(SettingsError::IoError("x".to_string()));
    assert!(err.source().is_none());
}
