//! Footer help bar and status line renderers.

use crate::ui::helpers::{center_offset, display_width, fit, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders keybinding hints centered and dimmed, truncated on narrow panes.
pub fn render_footer(frame: &mut Frame, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = fit(&footer.keybindings, cols);
    let text_len = display_width(&help_text);
    let padding = center_offset(text_len, cols);

    frame.move_to(row, 1);
    frame.push(&Theme::fg(&theme.colors.text_dim));
    frame.pad(padding);
    frame.push(&help_text);
    frame.pad(cols.saturating_sub(padding + text_len));
    frame.reset();
    row + 1
}

/// Renders the last emitted value, or a blank line when nothing was emitted yet.
pub fn render_status(frame: &mut Frame, row: usize, status: Option<&str>, theme: &Theme, cols: usize) -> usize {
    frame.move_to(row, 1);
    match status {
        Some(text) => {
            frame.push(&Theme::fg(&theme.colors.status_fg));
            frame.push_fit(&format!(" {text}"), cols);
            frame.reset();
        }
        None => frame.pad(cols),
    }
    row + 1
}
