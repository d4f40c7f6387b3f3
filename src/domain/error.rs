//! Error types for the widget kit.
//!
//! This module defines the centralized error type [`WidgetError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Widgets validate their configuration when they are constructed, so a malformed
//! column or field descriptor is rejected up front instead of surfacing as a
//! rendering fault later. Missing row values are not errors: they render blank.

use thiserror::Error;

/// The main error type for widget operations.
///
/// Construction errors (`Duplicate*`, `UnknownFieldType`, `MissingOptions`) come
/// from validating descriptors. Interaction errors (`UnknownColumn`, `NotSortable`,
/// `NotFilterable`, `UnknownField`) come from driving a widget with a key it does
/// not know about. The remaining variants cover theme and configuration loading.
///
/// # Examples
///
/// ```
/// use zwidgets::WidgetError;
///
/// fn check(key: &str) -> Result<(), WidgetError> {
///     Err(WidgetError::UnknownColumn(key.to_string()))
/// }
///
/// assert_eq!(check("age").unwrap_err().to_string(), "Unknown column: age");
/// ```
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Two columns of the same table share a key.
    #[error("Duplicate column key: {0}")]
    DuplicateColumnKey(String),

    /// A table operation referenced a column key that is not configured.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// A sort toggle targeted a column declared as not sortable.
    #[error("Column is not sortable: {0}")]
    NotSortable(String),

    /// A filter edit targeted a column declared as not filterable.
    #[error("Column is not filterable: {0}")]
    NotFilterable(String),

    /// Two fields of the same form share a key.
    #[error("Duplicate field key: {0}")]
    DuplicateFieldKey(String),

    /// A form operation referenced a field key that is not configured.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A field descriptor declared a type outside `text`, `textarea`, `select`.
    #[error("Unknown field type '{kind}' for field '{key}'")]
    UnknownFieldType {
        /// Key of the offending field.
        key: String,
        /// The unrecognized type name.
        kind: String,
    },

    /// A `select` field was declared without any options.
    #[error("Select field '{0}' has no options")]
    MissingOptions(String),

    /// A date input could not be parsed as `YYYY-MM-DD`.
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate {
        /// The text that failed to parse.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Encoding an emitted value as JSON failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for widget operations.
pub type Result<T> = std::result::Result<T, WidgetError>;
