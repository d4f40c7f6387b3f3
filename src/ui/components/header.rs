//! Title bar and section title renderers.

use crate::ui::helpers::{center_offset, display_width, fit, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, SectionInfo};

/// Renders the page title centered across the full width.
///
/// Returns the next available row.
pub fn render_header(frame: &mut Frame, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = fit(&header.title, cols);
    let title_len = display_width(&title);
    let padding = center_offset(title_len, cols);

    frame.move_to(row, 1);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        frame.push(&Theme::bg(bg));
    }

    frame.pad(padding);
    frame.push(&title);
    frame.pad(cols.saturating_sub(padding + title_len));

    frame.reset();
    row + 1
}

/// Renders a widget's section title, highlighted while the widget has focus.
pub fn render_section_title(frame: &mut Frame, row: usize, section: &SectionInfo, theme: &Theme, cols: usize) -> usize {
    frame.move_to(row, 1);
    if section.is_focused {
        frame.push(Theme::bold());
        frame.push(&Theme::fg(&theme.colors.focus_fg));
        frame.push_fit(&format!("› {}", section.title), cols);
    } else {
        frame.push(&Theme::fg(&theme.colors.text_dim));
        frame.push_fit(&format!("  {}", section.title), cols);
    }
    frame.reset();
    row + 1
}
