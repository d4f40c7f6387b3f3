//! Composable UI component renderers.
//!
//! Each component writes one part of the page into a [`Frame`] starting at a
//! given row and returns the next available row.
//!
//! # Components
//!
//! - [`header`]: Title bar and section titles
//! - [`table`]: Column headers with sort indicators, filter inputs, rows
//! - [`form`]: One control per field plus the submit button
//! - [`date_picker`]: Preset buttons and the from/to inputs
//! - [`footer`]: Status line and keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Table section]
//! [blank line]
//! [Form section]
//! [blank line]
//! [Date section]
//! [blank line]
//! [Status]
//! [Border]
//! [Footer]
//! ```

mod date_picker;
mod footer;
mod form;
mod header;
mod table;

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use date_picker::render_date_picker;
use footer::{render_footer, render_status};
use form::render_form;
use header::{render_header, render_section_title};
use table::render_table;

/// Renders a horizontal border line. Returns the next row.
fn render_border(frame: &mut Frame, row: usize, color: &str, cols: usize) -> usize {
    frame.move_to(row, 1);
    frame.push(&Theme::fg(color));
    frame.push(&"─".repeat(cols));
    frame.reset();
    row + 1
}

/// Renders the whole page.
///
/// The table body gets however many rows the view model's window holds (at
/// least one, for the empty message). Border and footer are pinned to the last
/// two rows of the pane.
pub fn render_page(frame: &mut Frame, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(frame, current_row, &vm.header, theme, cols);
    current_row = render_border(frame, current_row, &theme.colors.border, cols);

    current_row = render_section_title(frame, current_row, &vm.table_section, theme, cols);
    current_row = render_table(frame, current_row, &vm.table, theme, cols, vm.table.rows.len().max(1));
    current_row += 1;

    current_row = render_section_title(frame, current_row, &vm.form_section, theme, cols);
    current_row = render_form(frame, current_row, &vm.form, theme, cols);
    current_row += 1;

    current_row = render_section_title(frame, current_row, &vm.date_section, theme, cols);
    current_row = render_date_picker(frame, current_row, &vm.date_picker, theme);
    current_row += 1;

    render_status(frame, current_row, vm.status.as_deref(), theme, cols);

    let footer_row = rows.max(current_row + 2);
    render_border(frame, footer_row - 1, &theme.colors.border, cols);
    render_footer(frame, footer_row, &vm.footer, theme, cols);
}
