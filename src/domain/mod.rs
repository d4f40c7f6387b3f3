//! Domain layer for the widget kit.
//!
//! This module contains the data model shared by the widgets, independent of
//! Zellij-specific APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`value`]: Table rows and scalar cell values
//! - [`column`]: Column descriptors and sort configuration
//! - [`field`]: Form field descriptors and form values
//! - [`date`]: Date ranges, presets and the free-text custom range

pub mod column;
pub mod date;
pub mod error;
pub mod field;
pub mod value;

pub use column::{Column, SortConfig, SortDirection};
pub use date::{CustomRange, DateRange, Preset, RangeEnd, DATE_INPUT_FORMAT};
pub use error::{Result, WidgetError};
pub use field::{Field, FieldType, FormValues};
pub use value::{CellValue, Row};
