//! Table component renderer.
//!
//! Renders a [`TableView`] as a header line (title plus sort indicator), a line
//! of filter inputs, a rule, and the visible window of rows. Column widths split
//! the pane evenly. The view's optional style slots override the theme colors
//! for the frame, the header cells and the body rows.

use crate::ui::helpers::{split_columns, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderCell, TableView};

/// Renders the table starting at `row` with `body_rows` lines reserved for data.
///
/// Returns the row after the reserved body.
pub fn render_table(
    frame: &mut Frame,
    row: usize,
    view: &TableView,
    theme: &Theme,
    cols: usize,
    body_rows: usize,
) -> usize {
    let widths = split_columns(cols, view.headers.len().max(1));

    let mut current_row = render_table_headers(frame, row, view, &widths, theme);
    current_row = render_filter_inputs(frame, current_row, &view.headers, &widths, theme);
    current_row = render_rule(frame, current_row, view, theme, cols);
    render_table_rows(frame, current_row, view, &widths, theme, cols);
    current_row + body_rows
}

fn header_label(cell: &HeaderCell) -> String {
    match cell.sort_indicator {
        Some(indicator) => format!(" {} {indicator}", cell.title),
        None => format!(" {}", cell.title),
    }
}

fn render_table_headers(frame: &mut Frame, row: usize, view: &TableView, widths: &[usize], theme: &Theme) -> usize {
    frame.move_to(row, 1);
    for (cell, &width) in view.headers.iter().zip(widths) {
        if cell.is_focused {
            frame.push(Theme::bold());
            frame.push(&Theme::fg(&theme.colors.selection_fg));
            frame.push(&Theme::bg(&theme.colors.selection_bg));
        } else if let Some(style) = &view.styles.header {
            frame.push(&style.prefix());
        } else {
            frame.push(Theme::bold());
            frame.push(&Theme::fg(&theme.colors.header_fg));
        }
        frame.push_fit(&header_label(cell), width);
        frame.reset();
    }
    row + 1
}

fn render_filter_inputs(frame: &mut Frame, row: usize, headers: &[HeaderCell], widths: &[usize], theme: &Theme) -> usize {
    frame.move_to(row, 1);
    for (cell, &width) in headers.iter().zip(widths) {
        let Some(filter) = &cell.filter else {
            frame.pad(width);
            continue;
        };

        if cell.is_editing {
            frame.push(&Theme::fg(&theme.colors.focus_fg));
            frame.push_fit(&format!(" [{filter}_]"), width);
        } else if filter.is_empty() {
            frame.push(&Theme::fg(&theme.colors.text_dim));
            frame.push_fit(&format!(" [{}]", cell.filter_placeholder), width);
        } else {
            frame.push(&Theme::fg(&theme.colors.input_border));
            frame.push_fit(&format!(" [{filter}]"), width);
        }
        frame.reset();
    }
    row + 1
}

fn render_rule(frame: &mut Frame, row: usize, view: &TableView, theme: &Theme, cols: usize) -> usize {
    frame.move_to(row, 1);
    match &view.styles.container {
        Some(style) => frame.push(&style.prefix()),
        None => frame.push(&Theme::fg(&theme.colors.border)),
    }
    frame.push(&"─".repeat(cols));
    frame.reset();
    row + 1
}

fn render_table_rows(frame: &mut Frame, row: usize, view: &TableView, widths: &[usize], theme: &Theme, cols: usize) {
    if view.rows.is_empty() {
        frame.move_to(row, 1);
        frame.push(&Theme::fg(&theme.colors.text_dim));
        frame.push_fit(" No matching rows", cols);
        frame.reset();
        return;
    }

    for (offset, table_row) in view.rows.iter().enumerate() {
        frame.move_to(row + offset, 1);
        if table_row.is_selected {
            frame.push(&Theme::fg(&theme.colors.selection_fg));
            frame.push(&Theme::bg(&theme.colors.selection_bg));
        } else if let Some(style) = &view.styles.body {
            frame.push(&style.prefix());
        } else {
            frame.push(&Theme::fg(&theme.colors.text_normal));
        }

        for (cell, &width) in table_row.cells.iter().zip(widths) {
            frame.push_fit(&format!(" {cell}"), width);
        }
        frame.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;
    use crate::ui::theme::TableStyles;
    use crate::ui::viewmodel::TableRowView;

    fn view() -> TableView {
        TableView {
            headers: vec![
                HeaderCell {
                    title: "Name".into(),
                    sort_indicator: Some("▲"),
                    filter: Some(String::new()),
                    filter_placeholder: "Filter Name".into(),
                    is_focused: false,
                    is_editing: false,
                },
                HeaderCell {
                    title: "Age".into(),
                    sort_indicator: None,
                    filter: None,
                    filter_placeholder: "Filter Age".into(),
                    is_focused: false,
                    is_editing: false,
                },
            ],
            rows: vec![TableRowView {
                cells: vec!["Ann".into(), "25".into()],
                is_selected: false,
            }],
            total_rows: 1,
            shown_rows: 1,
            styles: TableStyles::default(),
        }
    }

    #[test]
    fn renders_indicator_placeholder_and_cells() {
        let mut frame = Frame::new();
        let next = render_table(&mut frame, 1, &view(), &Theme::default(), 40, 3);
        assert_eq!(next, 7);

        let text = strip_ansi(frame.as_str());
        assert!(text.contains(" Name ▲"));
        assert!(text.contains("[Filter Name]"));
        assert!(!text.contains("Filter Age"));
        assert!(text.contains(" Ann"));
    }

    #[test]
    fn empty_body_shows_message() {
        let mut v = view();
        v.rows.clear();
        let mut frame = Frame::new();
        render_table(&mut frame, 1, &v, &Theme::default(), 40, 1);
        assert!(strip_ansi(frame.as_str()).contains("No matching rows"));
    }
}
