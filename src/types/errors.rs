use std::fmt;

use super::row::RowKind;

// === RowError ===

/// Errors raised while building or binding list rows.
///
/// These are wiring faults between the list, its layouts and this crate.
/// They are reported to the caller and never papered over.
#[derive(Debug)]
pub enum RowError {
    /// The layout does not declare a slot the row needs.
    MissingSlot { layout: String, slot: String },
    /// No layout is registered under the requested identifier.
    UnknownLayout(String),
    /// The list has no item at the requested position.
    PositionOutOfRange { position: usize, len: usize },
    /// The row handle is of the wrong kind for the item at this position.
    KindMismatch {
        position: usize,
        expected: RowKind,
        actual: RowKind,
    },
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::MissingSlot { layout, slot } => {
                write!(f, "Layout {} is missing slot: {}", layout, slot)
            }
            RowError::UnknownLayout(id) => write!(f, "Unknown layout: {}", id),
            RowError::PositionOutOfRange { position, len } => {
                write!(f, "Row position {} out of range (len {})", position, len)
            }
            RowError::KindMismatch {
                position,
                expected,
                actual,
            } => write!(
                f,
                "Row kind mismatch at position {}: expected {} row, got {} row",
                position, expected, actual
            ),
        }
    }
}

impl std::error::Error for RowError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
