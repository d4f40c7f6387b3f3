//! Sortable/filterable table widget.
//!
//! - [`pipeline`]: pure sort-then-filter derivation of the display order
//! - [`widget`]: the stateful [`Table`] holding sort configuration and filters
//!
//! The table's only outputs are its rendered rows; sort and filter changes are
//! not reported to the host.

pub mod pipeline;
pub mod widget;

pub use pipeline::{compare_rows, derive_rows, row_matches, sort_indices};
pub use widget::{Table, ASCENDING_INDICATOR, DESCENDING_INDICATOR, UNSORTED_INDICATOR};
